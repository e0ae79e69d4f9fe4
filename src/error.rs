//! Error types.
//!
//! Two families:
//!
//! - `RuleViolation`: the closed set of rule checks a command can fail.
//!   A command that returns one has changed nothing.
//! - `ConfigError`: problems building a game (bad variant name, bad config).
//!
//! Misuse that an honest caller cannot trigger (a card id that was never
//! taken from a hand or field, an index past the end of a zone) is not an
//! error value. Those paths panic with a descriptive message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rule check that rejected a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RuleViolation {
    /// The acting player is not the player in turn.
    #[error("it is not this player's turn")]
    NotPlayerInTurn,

    /// The card belongs to the other player.
    #[error("the card is owned by the other player")]
    NotOwner,

    /// The hero cannot pay the cost.
    #[error("not enough mana")]
    NotEnoughMana,

    /// The minion entered the field this turn or has already attacked.
    #[error("the minion is not active and cannot attack")]
    AttackNotAllowedForNonActiveMinion,

    /// The defending minion belongs to the attacker.
    #[error("a minion cannot attack its own side")]
    AttackNotAllowedOnOwnMinion,

    /// The hero power was already used this round.
    #[error("the hero power can only be used once per round")]
    PowerUseNotAllowedTwicePrRound,
}

/// Outcome of a command: `Ok(())` when every effect was applied.
pub type Status = Result<(), RuleViolation>;

/// Problems setting up a game.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown variant '{0}'")]
    UnknownVariant(String),

    #[error("invalid config field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_messages() {
        assert_eq!(
            RuleViolation::NotPlayerInTurn.to_string(),
            "it is not this player's turn"
        );
        assert_eq!(RuleViolation::NotEnoughMana.to_string(), "not enough mana");
    }

    #[test]
    fn test_rule_violation_serialization() {
        let json = serde_json::to_string(&RuleViolation::PowerUseNotAllowedTwicePrRound).unwrap();
        assert_eq!(json, "\"PowerUseNotAllowedTwicePrRound\"");
        let back: RuleViolation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RuleViolation::PowerUseNotAllowedTwicePrRound);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownVariant("omega".into());
        assert_eq!(err.to_string(), "unknown variant 'omega'");
    }
}
