//! Card instances - runtime card state.
//!
//! A `Card` is one copy of a definition in one game. The same value lives
//! in the deck, then the hand, then the field; there is no separate minion
//! type, only the location and the activation counters.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;
use crate::core::Player;
use crate::effects::Effect;

/// Unique id of a card within one game.
///
/// Ids are handed out by the engine when decks are built and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in a game.
///
/// Identity (`id`, `name`, `owner`) is fixed; battle stats and activation
/// state change as the card moves and fights. Mutation goes through the
/// engine, callers only read.
#[derive(Clone)]
pub struct Card {
    id: CardId,
    name: String,
    owner: Player,
    mana_cost: i32,
    attack: i32,
    health: i32,
    effect: Option<Rc<dyn Effect>>,
    turns_on_field: u32,
    has_attacked: bool,
}

impl Card {
    /// Instantiate a definition for `owner`.
    #[must_use]
    pub fn from_definition(id: CardId, owner: Player, definition: &CardDefinition) -> Self {
        Self {
            id,
            name: definition.name.clone(),
            owner,
            mana_cost: definition.mana_cost,
            attack: definition.attack,
            health: definition.health,
            effect: definition.effect.clone(),
            turns_on_field: 0,
            has_attacked: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    #[must_use]
    pub fn mana_cost(&self) -> i32 {
        self.mana_cost
    }

    #[must_use]
    pub fn attack(&self) -> i32 {
        self.attack
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn effect(&self) -> Option<&Rc<dyn Effect>> {
        self.effect.as_ref()
    }

    /// Effect text, empty when the card has none.
    #[must_use]
    pub fn effect_description(&self) -> String {
        self.effect
            .as_ref()
            .map(|effect| effect.description())
            .unwrap_or_default()
    }

    /// Completed owner turns since the card entered the field.
    #[must_use]
    pub fn turns_on_field(&self) -> u32 {
        self.turns_on_field
    }

    #[must_use]
    pub fn has_attacked(&self) -> bool {
        self.has_attacked
    }

    /// A card may attack once it has survived one of its owner's turn ends
    /// on the field and has not attacked since.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.turns_on_field >= 1 && !self.has_attacked
    }

    /// Health at or below zero.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub(crate) fn adjust(&mut self, attack_delta: i32, health_delta: i32) {
        self.attack += attack_delta;
        self.health += health_delta;
    }

    pub(crate) fn mark_attacked(&mut self) {
        self.has_attacked = true;
    }

    /// Called for every card on the field when its owner ends a turn.
    pub(crate) fn refresh(&mut self) {
        self.turns_on_field += 1;
        self.has_attacked = false;
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("mana_cost", &self.mana_cost)
            .field("attack", &self.attack)
            .field("health", &self.health)
            .field("effect", &self.effect_description())
            .field("turns_on_field", &self.turns_on_field)
            .field("has_attacked", &self.has_attacked)
            .finish()
    }
}
