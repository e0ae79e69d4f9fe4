//! Core engine types: players, randomness, configuration.
//!
//! These are the leaves every other module builds on.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, EMPTY_DECK_PENALTY, HERO_MAX_HEALTH, HERO_POWER_COST, STARTING_HAND_SIZE};
pub use player::{Player, PlayerMap};
pub use rng::{shuffle, GameRng, RandomChoice, ScriptedChoice};
