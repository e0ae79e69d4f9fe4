//! Mutation surface for effects and hero powers.
//!
//! Card effects and hero powers receive an `EffectContext` for the duration
//! of the `play_card` or `use_power` command that triggered them. It is the
//! only way outside the engine to change the game without going through a
//! command. Each mutation applies a single change and notifies observers,
//! so a view following the event stream never misses a change made by an
//! effect. None of them check turn or mana rules; the triggering command
//! already has, and it announces any resulting winner once the effect
//! returns.

use crate::cards::{CardDefinition, CardId, Hero};
use crate::core::Player;
use crate::events::GameEvent;

use super::engine::Game;

/// Capabilities handed to a running effect or hero power.
pub struct EffectContext<'a> {
    game: &'a mut Game,
}

impl<'a> EffectContext<'a> {
    pub(crate) fn new(game: &'a mut Game) -> Self {
        Self { game }
    }

    /// Read-only view of the whole game.
    pub fn game(&self) -> &Game {
        self.game
    }

    pub fn field_size(&self, player: Player) -> usize {
        self.game.field_size(player)
    }

    pub fn hero(&self, player: Player) -> &Hero {
        self.game.hero(player)
    }

    /// Random index in `0..bound` from the game's choice source.
    ///
    /// # Panics
    ///
    /// If `bound` is zero.
    pub fn choose_index(&mut self, bound: usize) -> usize {
        self.game.choose_index(bound)
    }

    /// Add `delta` to a hero's health. Negative values are damage.
    pub fn change_hero_health(&mut self, player: Player, delta: i32) {
        self.game.change_hero_health(player, delta);
    }

    /// Move the top card of `player`'s deck to the front of their hand.
    ///
    /// Returns `None`, and changes nothing, when the deck is empty.
    pub fn draw_card(&mut self, player: Player) -> Option<CardId> {
        self.game.draw_card(player)
    }

    /// Put a fresh minion built from `definition` on `player`'s field.
    ///
    /// The index is clamped to the field length. A summoned minion cannot
    /// attack until its owner's next turn.
    pub fn summon(&mut self, player: Player, definition: &CardDefinition, index: usize) -> CardId {
        self.game.summon(player, definition, index)
    }

    /// Change attack and health of the minion at `index` on `player`'s
    /// field, removing it if its health ends at zero or below.
    ///
    /// # Panics
    ///
    /// If `index >= field_size(player)`.
    pub fn adjust_minion(&mut self, player: Player, index: usize, attack: i32, health: i32) {
        self.game.adjust_minion(player, index, attack, health);
    }

    /// Remove the minion at `index` on `player`'s field.
    ///
    /// # Panics
    ///
    /// If `index >= field_size(player)`.
    pub fn destroy_minion(&mut self, player: Player, index: usize) -> CardId {
        self.game.destroy_minion(player, index)
    }
}

impl Game {
    pub(crate) fn choose_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "Cannot choose from an empty range");
        self.random_choice().choose(bound)
    }

    pub(crate) fn change_hero_health(&mut self, player: Player, delta: i32) {
        self.heroes_mut()[player].change_health(delta);
        self.notify(GameEvent::HeroUpdated { player });
    }

    /// Also used for the opening hands and the turn draw.
    pub(crate) fn draw_card(&mut self, player: Player) -> Option<CardId> {
        let card = self.decks_mut()[player].pop_front()?;
        let id = card.id();
        self.hands_mut()[player].push_front(card);
        log::trace!("{} draws {}", player, id);
        self.notify(GameEvent::CardDrawn { player, card: id });
        Some(id)
    }

    pub(crate) fn summon(
        &mut self,
        player: Player,
        definition: &CardDefinition,
        index: usize,
    ) -> CardId {
        let card = self.instantiate(player, definition);
        let id = card.id();
        let field = &mut self.fields_mut()[player];
        let index = index.min(field.len());
        field.insert(index, card);
        log::debug!("{} summons {} ({}) at {}", player, definition.name, id, index);
        self.notify(GameEvent::CardSummoned {
            player,
            card: id,
            index,
        });
        id
    }

    pub(crate) fn adjust_minion(&mut self, player: Player, index: usize, attack: i32, health: i32) {
        let card = &mut self.fields_mut()[player][index];
        card.adjust(attack, health);
        let id = card.id();
        self.notify(GameEvent::CardUpdated { card: id });
        self.remove_if_dead(player, index);
    }

    pub(crate) fn destroy_minion(&mut self, player: Player, index: usize) -> CardId {
        let card = self.fields_mut()[player].remove(index);
        let id = card.id();
        log::debug!("{} loses {} ({})", player, card.name(), id);
        self.notify(GameEvent::CardRemoved { player, card: id });
        id
    }

    /// Remove the minion at `index` if its health is at or below zero.
    pub(crate) fn remove_if_dead(&mut self, player: Player, index: usize) -> bool {
        if self.field(player)[index].is_dead() {
            self.destroy_minion(player, index);
            true
        } else {
            false
        }
    }
}
