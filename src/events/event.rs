//! Game event types.
//!
//! Every state-changing action of the engine is announced as a `GameEvent`.
//! Events carry ids and players rather than card data; observers read the
//! current values back from the game when they need them.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Player;

/// Something that just happened in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// The turn passed to `player`.
    TurnChanged { player: Player },

    /// `card` moved from `player`'s deck to the front of their hand.
    CardDrawn { player: Player, card: CardId },

    /// `card` moved from `player`'s hand to their field at `index`.
    CardPlayed { player: Player, card: CardId, index: usize },

    /// A minion entered the field without being played from hand.
    CardSummoned { player: Player, card: CardId, index: usize },

    /// `attacker` and `defender` traded damage.
    CardAttacked { attacker: CardId, defender: CardId },

    /// `attacker` hit the hero owned by `hero`.
    HeroAttacked { attacker: CardId, hero: Player },

    /// A card's attack or health changed.
    CardUpdated { card: CardId },

    /// `card` left `player`'s field.
    CardRemoved { player: Player, card: CardId },

    /// A hero's mana, health or power state changed.
    HeroUpdated { player: Player },

    /// `player` used their hero power.
    PowerUsed { player: Player },

    /// The winning strategy named `player` as winner.
    GameWon { player: Player },
}

impl GameEvent {
    /// The player the event is about, if it is about one player.
    #[must_use]
    pub fn player(&self) -> Option<Player> {
        match *self {
            GameEvent::TurnChanged { player }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::CardPlayed { player, .. }
            | GameEvent::CardSummoned { player, .. }
            | GameEvent::CardRemoved { player, .. }
            | GameEvent::HeroUpdated { player }
            | GameEvent::PowerUsed { player }
            | GameEvent::GameWon { player } => Some(player),
            GameEvent::HeroAttacked { hero, .. } => Some(hero),
            GameEvent::CardAttacked { .. } | GameEvent::CardUpdated { .. } => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::TurnChanged { .. } => "turn_changed",
            GameEvent::CardDrawn { .. } => "card_drawn",
            GameEvent::CardPlayed { .. } => "card_played",
            GameEvent::CardSummoned { .. } => "card_summoned",
            GameEvent::CardAttacked { .. } => "card_attacked",
            GameEvent::HeroAttacked { .. } => "hero_attacked",
            GameEvent::CardUpdated { .. } => "card_updated",
            GameEvent::CardRemoved { .. } => "card_removed",
            GameEvent::HeroUpdated { .. } => "hero_updated",
            GameEvent::PowerUsed { .. } => "power_used",
            GameEvent::GameWon { .. } => "game_won",
        }
    }
}
