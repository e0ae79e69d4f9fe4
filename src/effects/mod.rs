//! Effect system for card abilities.
//!
//! Effects are applied when a card is played. They act through the engine's
//! mutation surface and pick random targets through the injected random
//! choice capability, so a scripted source makes every effect reproducible.
//!
//! ## Built-in effects
//!
//! - `ChangeHeroHealth`: damage or heal a hero
//! - `BuffRandomMinion`: change a random minion's attack/health
//! - `DestroyRandomMinion`: remove a random minion
//! - `DrawCard`: conditional draw

pub mod effect;
pub mod targeting;

pub use effect::{BuffRandomMinion, ChangeHeroHealth, DestroyRandomMinion, DrawCard, DrawCondition, Effect};
pub use targeting::{random_minion, Side};
