//! Card system: definitions, instances, heroes and catalogs.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data plus an optional on-play effect
//! - `Card`: A definition instantiated in a game (id, owner, battle stats)
//! - `CardId`: Identifier for a card within one game
//! - `Hero`: Per-player mana, health and bound hero power
//! - `CardCatalog`: Ordered definition lookup used by deck builders

pub mod catalog;
pub mod definition;
pub mod hero;
pub mod instance;

pub use catalog::{dish_catalog, seasoned_dish_catalog, sovs, spanish_catalog, CardCatalog};
pub use definition::CardDefinition;
pub use hero::Hero;
pub use instance::{Card, CardId};
