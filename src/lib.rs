//! # stone-ccg
//!
//! A two-player card battle engine with pluggable rule variants.
//!
//! Each player commands a hero and a deck. Players alternate turns, playing
//! cards as minions, attacking and using hero powers until the variant's
//! winning condition names a winner.
//!
//! ## Design Principles
//!
//! 1. **One Engine, Many Variants**: mana production, winning condition,
//!    hero assignment, deck building and hero powers are strategies
//!    injected at construction. The engine's mutation logic never changes.
//!
//! 2. **Commands Report, Never Partially Apply**: every command checks its
//!    rules first and returns `Status`. A rejected command leaves the game
//!    untouched.
//!
//! 3. **Reproducible Randomness**: every random pick goes through the
//!    injected `RandomChoice`. A seed, or a scripted source in tests, fixes
//!    heroes, deck order and effect targets.
//!
//! ## Architecture
//!
//! - **Derived State**: the player in turn comes from the turn number and
//!   the winner from the winning strategy, both computed on demand.
//!
//! - **Observers**: each state change is announced as a `GameEvent` to
//!   subscribed observers, in the order it happens.
//!
//! ## Modules
//!
//! - `core`: Players, per-player storage, randomness, configuration
//! - `cards`: Card definitions, in-game cards, heroes, catalogs
//! - `effects`: On-play card effects and targeting
//! - `strategies`: The strategy roles and their built-in implementations
//! - `events`: Game events and observers
//! - `game`: The engine and its snapshots
//! - `variants`: Named rule sets and the game builder
//! - `error`: Rule violations and configuration errors

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod events;
pub mod game;
pub mod strategies;
pub mod variants;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Player, PlayerMap, RandomChoice, ScriptedChoice};

pub use crate::cards::{Card, CardCatalog, CardDefinition, CardId, Hero};

pub use crate::effects::{Effect, Side};

pub use crate::strategies::{
    DeckBuilderStrategy, HeroPowerStrategy, HeroStrategy, ManaProductionStrategy, StrategySet,
    WinningStrategy,
};

pub use crate::events::{EventLog, GameEvent, GameObserver, LoggingObserver};

pub use crate::game::{CardLocation, EffectContext, Game, GameSnapshot, Zone};

pub use crate::variants::{GameBuilder, Variant};

pub use crate::error::{ConfigError, RuleViolation, Status};
