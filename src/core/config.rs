//! Game configuration.
//!
//! `GameConfig` carries the numeric rules shared by every variant. Variants
//! differ in their strategies, not in these constants, but callers may
//! override them (for example from a JSON file) when building a game.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Starting hero health.
pub const HERO_MAX_HEALTH: i32 = 21;

/// Mana cost of using a hero power.
pub const HERO_POWER_COST: i32 = 2;

/// Health lost at the end of a turn taken with an empty deck.
pub const EMPTY_DECK_PENALTY: i32 = 2;

/// Cards drawn into each hand when the game is set up.
pub const STARTING_HAND_SIZE: usize = 3;

/// Engine-wide rule constants.
///
/// Missing fields fall back to their defaults when deserializing.
///
/// ```
/// use stone_ccg::core::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "hero_health": 30 }"#).unwrap();
/// assert_eq!(config.hero_health, 30);
/// assert_eq!(config.power_cost, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health each hero starts with.
    pub hero_health: i32,

    /// Mana spent by `use_power`.
    pub power_cost: i32,

    /// Damage a hero takes when its owner ends a turn with an empty deck.
    pub empty_deck_penalty: i32,

    /// Cards moved from deck to hand for each player at construction.
    pub starting_hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hero_health: HERO_MAX_HEALTH,
            power_cost: HERO_POWER_COST,
            empty_deck_penalty: EMPTY_DECK_PENALTY,
            starting_hand_size: STARTING_HAND_SIZE,
        }
    }
}

impl GameConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the starting hero health.
    #[must_use]
    pub fn with_hero_health(mut self, health: i32) -> Self {
        self.hero_health = health;
        self
    }

    /// Set the hero power cost.
    #[must_use]
    pub fn with_power_cost(mut self, cost: i32) -> Self {
        self.power_cost = cost;
        self
    }

    /// Set the empty deck penalty.
    #[must_use]
    pub fn with_empty_deck_penalty(mut self, penalty: i32) -> Self {
        self.empty_deck_penalty = penalty;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Reject settings no game can be played with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hero_health <= 0 {
            return Err(ConfigError::Invalid {
                field: "hero_health",
                reason: format!("must be positive, got {}", self.hero_health),
            });
        }
        if self.power_cost < 0 {
            return Err(ConfigError::Invalid {
                field: "power_cost",
                reason: format!("must not be negative, got {}", self.power_cost),
            });
        }
        if self.empty_deck_penalty < 0 {
            return Err(ConfigError::Invalid {
                field: "empty_deck_penalty",
                reason: format!("must not be negative, got {}", self.empty_deck_penalty),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.hero_health, 21);
        assert_eq!(config.power_cost, 2);
        assert_eq!(config.empty_deck_penalty, 2);
        assert_eq!(config.starting_hand_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "starting_hand_size": 0 }"#).unwrap();
        assert_eq!(config.starting_hand_size, 0);
        assert_eq!(config.hero_health, HERO_MAX_HEALTH);
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ hero_health: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = GameConfig::default().with_hero_health(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hero_health", .. }));

        let err = GameConfig::from_json(r#"{ "power_cost": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "power_cost", .. }));

        let err = GameConfig::default()
            .with_empty_deck_penalty(-3)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("empty_deck_penalty"));
    }

    #[test]
    fn test_round_trip() {
        let config = GameConfig::default().with_power_cost(1);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }
}
