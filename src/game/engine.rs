//! The game engine.
//!
//! `Game` owns both heroes and every card. Callers read through the
//! accessors and change state only through the commands:
//!
//! - `end_turn`
//! - `play_card`
//! - `attack_card`
//! - `attack_hero`
//! - `use_power`
//!
//! Each command checks its rules first and either applies all of its
//! effects or none. Turn ownership is derived from the global turn number
//! (even: first player, odd: second player), and the winner is derived
//! from the winning strategy on every query. Card effects and hero powers
//! run inside `play_card` and `use_power` through an `EffectContext`.
//!
//! ## Example
//!
//! ```
//! use stone_ccg::core::Player;
//! use stone_ccg::variants::{GameBuilder, Variant};
//!
//! let mut game = GameBuilder::new(Variant::Alpha).build().unwrap();
//! assert_eq!(game.player_in_turn(), Player::First);
//!
//! let uno = game.card_in_hand(Player::First, 2).id();
//! assert!(game.play_card(Player::First, uno, 0).is_ok());
//! assert_eq!(game.field_size(Player::First), 1);
//!
//! game.end_turn();
//! assert_eq!(game.player_in_turn(), Player::Second);
//! ```

use std::rc::Rc;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardDefinition, CardId, Hero};
use crate::core::{GameConfig, Player, PlayerMap, RandomChoice};
use crate::error::{RuleViolation, Status};
use crate::events::{EventDispatcher, GameEvent, GameObserver};
use crate::strategies::{ManaProductionStrategy, StrategySet, WinningStrategy};

use super::effect_api::EffectContext;

/// Where a card is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Field,
}

/// A card's current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardLocation {
    pub owner: Player,
    pub zone: Zone,
    pub index: usize,
}

/// A two-player game.
pub struct Game {
    config: GameConfig,

    // === Progression ===
    /// Global turn counter, starts at 0.
    turn_number: u32,
    /// Each player's own turn count, starts at 1.
    personal_turns: PlayerMap<u32>,

    // === Entities ===
    heroes: PlayerMap<Hero>,
    /// Hand; drawn cards go to the front.
    hands: PlayerMap<Vector<Card>>,
    /// Deck; drawn from the front.
    decks: PlayerMap<Vector<Card>>,
    fields: PlayerMap<Vector<Card>>,
    next_card_id: u32,

    // === Variant ===
    mana_production: Box<dyn ManaProductionStrategy>,
    winning: Box<dyn WinningStrategy>,
    choice: Box<dyn RandomChoice>,

    dispatcher: EventDispatcher,
    announced_winner: Option<Player>,
}

impl Game {
    /// Build a game from a rule configuration and a variant's strategies.
    ///
    /// Heroes are assigned and decks built for the first player, then the
    /// second. Each hero starts with `config.hero_health` and the mana for
    /// personal turn 1, and each player draws `config.starting_hand_size`
    /// cards. Setup emits no events.
    pub fn new(config: GameConfig, strategies: StrategySet) -> Self {
        let StrategySet {
            mana,
            winning,
            mut heroes,
            mut decks,
            choice,
        } = strategies;

        let opening_mana = mana.calculate_mana(1);
        let heroes = PlayerMap::new(|player| {
            let mut hero = heroes.hero_for(player);
            hero.set_health(config.hero_health);
            hero.set_mana(opening_mana);
            hero
        });

        let mut next_card_id = 0;
        let decks = PlayerMap::new(|player| {
            decks
                .build_deck(player)
                .iter()
                .map(|definition| {
                    let id = CardId::new(next_card_id);
                    next_card_id += 1;
                    Card::from_definition(id, player, definition)
                })
                .collect::<Vector<Card>>()
        });

        let mut game = Self {
            config,
            turn_number: 0,
            personal_turns: PlayerMap::with_value(1),
            heroes,
            hands: PlayerMap::with_default(),
            decks,
            fields: PlayerMap::with_default(),
            next_card_id,
            mana_production: mana,
            winning,
            choice,
            dispatcher: EventDispatcher::new(),
            announced_winner: None,
        };

        for player in Player::BOTH {
            for _ in 0..game.config.starting_hand_size {
                game.draw_card(player);
            }
        }

        log::info!(
            "new game: {} ({}) vs {} ({})",
            Player::First,
            game.heroes[Player::First].hero_type(),
            Player::Second,
            game.heroes[Player::Second].hero_type()
        );
        game
    }

    /// Register an observer for all future events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.dispatcher.subscribe(Box::new(observer));
    }

    /// Register an already boxed observer.
    pub fn subscribe_boxed(&mut self, observer: Box<dyn GameObserver>) {
        self.dispatcher.subscribe(observer);
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Global turn number, starting at 0.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn player_in_turn(&self) -> Player {
        Player::for_turn(self.turn_number)
    }

    /// Turns `player` has started, starting at 1.
    #[must_use]
    pub fn personal_turn(&self, player: Player) -> u32 {
        self.personal_turns[player]
    }

    /// Ask the winning strategy, against the current state.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winning.winner(self)
    }

    #[must_use]
    pub fn hero(&self, player: Player) -> &Hero {
        &self.heroes[player]
    }

    #[must_use]
    pub fn deck_size(&self, player: Player) -> usize {
        self.decks[player].len()
    }

    #[must_use]
    pub fn hand_size(&self, player: Player) -> usize {
        self.hands[player].len()
    }

    #[must_use]
    pub fn field_size(&self, player: Player) -> usize {
        self.fields[player].len()
    }

    /// The card at `index` in `player`'s hand.
    ///
    /// # Panics
    ///
    /// If `index >= hand_size(player)`.
    #[must_use]
    pub fn card_in_hand(&self, player: Player, index: usize) -> &Card {
        &self.hands[player][index]
    }

    /// The minion at `index` on `player`'s field.
    ///
    /// # Panics
    ///
    /// If `index >= field_size(player)`.
    #[must_use]
    pub fn card_in_field(&self, player: Player, index: usize) -> &Card {
        &self.fields[player][index]
    }

    /// Read-only view of a hand, front first.
    #[must_use]
    pub fn hand(&self, player: Player) -> &Vector<Card> {
        &self.hands[player]
    }

    /// Read-only view of a field, in board order.
    #[must_use]
    pub fn field(&self, player: Player) -> &Vector<Card> {
        &self.fields[player]
    }

    /// Read-only view of a deck, next draw first.
    #[must_use]
    pub fn deck(&self, player: Player) -> &Vector<Card> {
        &self.decks[player]
    }

    /// Find a card by id in any deck, hand or field.
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<CardLocation> {
        Player::BOTH.into_iter().find_map(|owner| {
            [Zone::Deck, Zone::Hand, Zone::Field]
                .into_iter()
                .find_map(|zone| {
                    self.zone(owner, zone)
                        .iter()
                        .position(|c| c.id() == card)
                        .map(|index| CardLocation { owner, zone, index })
                })
        })
    }

    /// Look a card up by id in any deck, hand or field.
    #[must_use]
    pub fn find_card(&self, card: CardId) -> Option<&Card> {
        self.locate(card)
            .map(|location| &self.zone(location.owner, location.zone)[location.index])
    }

    fn zone(&self, player: Player, zone: Zone) -> &Vector<Card> {
        match zone {
            Zone::Deck => &self.decks[player],
            Zone::Hand => &self.hands[player],
            Zone::Field => &self.fields[player],
        }
    }

    // === Commands ===

    /// Finish the current player's turn and hand over to the opponent.
    ///
    /// The ending player gets next turn's mana and a usable power, their
    /// minions age one turn and may attack again, and they take the empty
    /// deck penalty if they have nothing left to draw. From global turn 2
    /// on, the incoming player draws a card.
    pub fn end_turn(&mut self) {
        let current = self.player_in_turn();
        log::debug!("{} ends turn {}", current, self.turn_number);

        self.personal_turns[current] += 1;
        let mana = self
            .mana_production
            .calculate_mana(self.personal_turns[current]);
        for card in self.fields[current].iter_mut() {
            card.refresh();
        }

        let hero = &mut self.heroes[current];
        hero.set_mana(mana);
        hero.set_power_usable(true);
        if self.decks[current].is_empty() {
            hero.change_health(-self.config.empty_deck_penalty);
            log::debug!("{} has an empty deck, hero health now {}", current, hero.health());
        }
        self.notify(GameEvent::HeroUpdated { player: current });

        self.turn_number += 1;
        let next = self.player_in_turn();
        log::info!("turn {}: {} to act", self.turn_number, next);
        self.notify(GameEvent::TurnChanged { player: next });

        if self.turn_number >= 2 {
            self.draw_card(next);
        }
        self.announce_winner();
    }

    /// Move `card` from `who`'s hand onto their field at `at_index`.
    ///
    /// The index is clamped to the field length. The card's mana cost is
    /// paid by the hero and its effect, if any, is applied after the card
    /// is on the field.
    ///
    /// # Panics
    ///
    /// If `card` is not in any hand or field, or is owned by `who` but not
    /// in their hand.
    pub fn play_card(&mut self, who: Player, card: CardId, at_index: usize) -> Status {
        log::debug!("{} plays {} at {}", who, card, at_index);
        let status = self.try_play_card(who, card, at_index);
        Self::log_rejection("play_card", status)
    }

    fn try_play_card(&mut self, who: Player, card: CardId, at_index: usize) -> Status {
        self.ensure_in_turn(who)?;
        if self.expect_card(card).owner() != who {
            return Err(RuleViolation::NotOwner);
        }
        let hand_index = self.index_in(who, Zone::Hand, card);
        let cost = self.hands[who][hand_index].mana_cost();
        if self.heroes[who].mana() < cost {
            return Err(RuleViolation::NotEnoughMana);
        }

        self.heroes[who].spend_mana(cost);
        let played = self.hands[who].remove(hand_index);
        let effect = played.effect().map(Rc::clone);
        let index = at_index.min(self.fields[who].len());
        self.fields[who].insert(index, played);

        self.notify(GameEvent::CardPlayed {
            player: who,
            card,
            index,
        });
        self.notify(GameEvent::HeroUpdated { player: who });

        if let Some(effect) = effect {
            log::debug!("{} triggers: {}", card, effect.description());
            effect.apply(&mut EffectContext::new(self), who);
        }
        self.announce_winner();
        Ok(())
    }

    /// Fight `defending` with `attacking`.
    ///
    /// Both minions take the other's attack as damage. Any minion left at
    /// zero health or below is removed. The attacker is marked as having
    /// attacked either way.
    ///
    /// # Panics
    ///
    /// If either card is not in any hand or field, or a card that passed
    /// the rule checks is not on its owner's field.
    pub fn attack_card(&mut self, attacker: Player, attacking: CardId, defending: CardId) -> Status {
        log::debug!("{} attacks {} with {}", attacker, defending, attacking);
        let status = self.try_attack_card(attacker, attacking, defending);
        Self::log_rejection("attack_card", status)
    }

    fn try_attack_card(&mut self, attacker: Player, attacking: CardId, defending: CardId) -> Status {
        self.ensure_can_attack(attacker, attacking)?;
        if self.expect_card(defending).owner() == attacker {
            return Err(RuleViolation::AttackNotAllowedOnOwnMinion);
        }

        let defender = attacker.opponent();
        let attacking_index = self.index_in(attacker, Zone::Field, attacking);
        let defending_index = self.index_in(defender, Zone::Field, defending);
        let attacking_power = self.fields[attacker][attacking_index].attack();
        let defending_power = self.fields[defender][defending_index].attack();

        {
            let card = &mut self.fields[attacker][attacking_index];
            card.take_damage(defending_power);
            card.mark_attacked();
        }
        self.fields[defender][defending_index].take_damage(attacking_power);

        self.notify(GameEvent::CardAttacked {
            attacker: attacking,
            defender: defending,
        });
        self.notify(GameEvent::CardUpdated { card: attacking });
        self.notify(GameEvent::CardUpdated { card: defending });

        self.remove_if_dead(defender, defending_index);
        self.remove_if_dead(attacker, attacking_index);
        self.announce_winner();
        Ok(())
    }

    /// Hit the opposing hero with `attacking`.
    ///
    /// # Panics
    ///
    /// If `attacking` is not in any hand or field, or passes the rule
    /// checks without being on the attacker's field.
    pub fn attack_hero(&mut self, attacker: Player, attacking: CardId) -> Status {
        log::debug!("{} attacks the opposing hero with {}", attacker, attacking);
        let status = self.try_attack_hero(attacker, attacking);
        Self::log_rejection("attack_hero", status)
    }

    fn try_attack_hero(&mut self, attacker: Player, attacking: CardId) -> Status {
        self.ensure_can_attack(attacker, attacking)?;

        let defender = attacker.opponent();
        let index = self.index_in(attacker, Zone::Field, attacking);
        let card = &mut self.fields[attacker][index];
        card.mark_attacked();
        let damage = card.attack();
        self.heroes[defender].change_health(-damage);

        self.notify(GameEvent::HeroAttacked {
            attacker: attacking,
            hero: defender,
        });
        self.notify(GameEvent::HeroUpdated { player: defender });
        self.announce_winner();
        Ok(())
    }

    /// Pay for and resolve `who`'s hero power.
    pub fn use_power(&mut self, who: Player) -> Status {
        log::debug!("{} uses hero power", who);
        let status = self.try_use_power(who);
        Self::log_rejection("use_power", status)
    }

    fn try_use_power(&mut self, who: Player) -> Status {
        self.ensure_in_turn(who)?;
        let cost = self.config.power_cost;
        let hero = &mut self.heroes[who];
        if !hero.is_power_usable() {
            return Err(RuleViolation::PowerUseNotAllowedTwicePrRound);
        }
        if hero.mana() < cost {
            return Err(RuleViolation::NotEnoughMana);
        }

        hero.spend_mana(cost);
        hero.set_power_usable(false);
        let power = Rc::clone(hero.power());

        self.notify(GameEvent::PowerUsed { player: who });
        self.notify(GameEvent::HeroUpdated { player: who });
        power.use_power(&mut EffectContext::new(self), who);
        self.announce_winner();
        Ok(())
    }

    // === Internals ===

    fn ensure_in_turn(&self, player: Player) -> Status {
        if self.player_in_turn() != player {
            return Err(RuleViolation::NotPlayerInTurn);
        }
        Ok(())
    }

    fn ensure_can_attack(&self, attacker: Player, attacking: CardId) -> Status {
        self.ensure_in_turn(attacker)?;
        let card = self.expect_card(attacking);
        if card.owner() != attacker {
            return Err(RuleViolation::NotOwner);
        }
        if !card.is_active() {
            return Err(RuleViolation::AttackNotAllowedForNonActiveMinion);
        }
        Ok(())
    }

    fn expect_card(&self, card: CardId) -> &Card {
        match self.find_card(card) {
            Some(found) => found,
            None => panic!("{card} is not part of this game"),
        }
    }

    fn index_in(&self, player: Player, zone: Zone, card: CardId) -> usize {
        match self.zone(player, zone).iter().position(|c| c.id() == card) {
            Some(index) => index,
            None => panic!("{card} is not in the {zone:?} of the {player}"),
        }
    }

    fn log_rejection(command: &str, status: Status) -> Status {
        if let Err(violation) = status {
            log::debug!("{} rejected: {}", command, violation);
        }
        status
    }

    pub(crate) fn allocate_card_id(&mut self) -> CardId {
        let id = CardId::new(self.next_card_id);
        self.next_card_id += 1;
        id
    }

    pub(crate) fn instantiate(&mut self, owner: Player, definition: &CardDefinition) -> Card {
        let id = self.allocate_card_id();
        Card::from_definition(id, owner, definition)
    }

    pub(crate) fn heroes_mut(&mut self) -> &mut PlayerMap<Hero> {
        &mut self.heroes
    }

    pub(crate) fn hands_mut(&mut self) -> &mut PlayerMap<Vector<Card>> {
        &mut self.hands
    }

    pub(crate) fn decks_mut(&mut self) -> &mut PlayerMap<Vector<Card>> {
        &mut self.decks
    }

    pub(crate) fn fields_mut(&mut self) -> &mut PlayerMap<Vector<Card>> {
        &mut self.fields
    }

    pub(crate) fn random_choice(&mut self) -> &mut dyn RandomChoice {
        &mut *self.choice
    }

    pub(crate) fn notify(&mut self, event: GameEvent) {
        self.dispatcher.notify(event);
    }

    /// Emit `GameWon` whenever the verdict changes to a new winner.
    pub(crate) fn announce_winner(&mut self) {
        let winner = self.winner();
        if winner == self.announced_winner {
            return;
        }
        self.announced_winner = winner;
        if let Some(player) = winner {
            log::info!("{} wins at turn {}", player, self.turn_number);
            self.notify(GameEvent::GameWon { player });
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn_number", &self.turn_number)
            .field("personal_turns", &self.personal_turns)
            .field("heroes", &self.heroes)
            .field("hands", &self.hands)
            .field("decks", &self.decks)
            .field("fields", &self.fields)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}
