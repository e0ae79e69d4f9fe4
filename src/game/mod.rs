//! The game engine and its views.
//!
//! - `engine`: the `Game` state and its commands
//! - `effect_api`: the mutation surface used by effects and hero powers
//! - `snapshot`: serializable read-only views

pub mod effect_api;
pub mod engine;
pub mod snapshot;

pub use effect_api::EffectContext;
pub use engine::{CardLocation, Game, Zone};
pub use snapshot::{CardView, GameSnapshot, HeroView};
