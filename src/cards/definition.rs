//! Card definitions - static card data.
//!
//! `CardDefinition` holds what a card is before it enters a game: name,
//! cost, base stats and the effect it carries. Deck builders and catalogs
//! deal in definitions; the engine turns each into a `Card` with its own id
//! and owner when the deck is built.

use std::fmt;
use std::rc::Rc;

use crate::effects::Effect;

/// Static card data.
///
/// ## Example
///
/// ```
/// use stone_ccg::cards::CardDefinition;
///
/// let uno = CardDefinition::new("Uno", 1, 1, 1);
///
/// assert_eq!(uno.name, "Uno");
/// assert_eq!(uno.mana_cost, 1);
/// assert!(uno.effect.is_none());
/// ```
#[derive(Clone)]
pub struct CardDefinition {
    /// Card name (for display/debugging).
    pub name: String,

    /// Mana paid to play the card.
    pub mana_cost: i32,

    /// Damage dealt in combat.
    pub attack: i32,

    /// Damage the card can absorb before it is removed.
    pub health: i32,

    /// Applied when the card is played.
    pub effect: Option<Rc<dyn Effect>>,
}

impl CardDefinition {
    /// Create an effect-less definition.
    pub fn new(name: impl Into<String>, mana_cost: i32, attack: i32, health: i32) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            attack,
            health,
            effect: None,
        }
    }

    /// Attach an on-play effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: impl Effect + 'static) -> Self {
        self.effect = Some(Rc::new(effect));
        self
    }

    /// Human readable effect text, empty when the card has none.
    #[must_use]
    pub fn effect_description(&self) -> String {
        self.effect
            .as_ref()
            .map(|effect| effect.description())
            .unwrap_or_default()
    }
}

impl fmt::Debug for CardDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDefinition")
            .field("name", &self.name)
            .field("mana_cost", &self.mana_cost)
            .field("attack", &self.attack)
            .field("health", &self.health)
            .field("effect", &self.effect_description())
            .finish()
    }
}

impl PartialEq for CardDefinition {
    /// Definitions compare by name and stats; effects are compared by text.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.mana_cost == other.mana_cost
            && self.attack == other.attack
            && self.health == other.health
            && self.effect_description() == other.effect_description()
    }
}
