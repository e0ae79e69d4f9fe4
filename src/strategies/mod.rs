//! Strategy roles that turn the engine into a variant.
//!
//! - `ManaProductionStrategy`: mana per personal turn
//! - `WinningStrategy`: who, if anyone, has won
//! - `HeroStrategy`: which hero each player commands
//! - `DeckBuilderStrategy`: the cards in each deck, in draw order
//! - `HeroPowerStrategy`: what a hero power does
//!
//! Strategies hold only their own configuration (and, where they need it,
//! their own random choice source). They receive the game per call and
//! never keep references into it.

pub mod deck;
pub mod hero;
pub mod mana;
pub mod power;
pub mod winning;

pub use deck::{enforce_opening_curve, CatalogDeck, DeckBuilderStrategy, ShuffledDeck, OPENING_CURVE};
pub use hero::{FixedHeroes, HeroArchetype, HeroStrategy, RandomHeroes};
pub use mana::{ConstantMana, IncreasingMana, ManaProductionStrategy};
pub use power::{EffectPower, HeroPowerStrategy, NoPower, SummonTokenPower};
pub use winning::{FieldEmptinessWinning, FixedTurnWinning, HeroHealthWinning, Stage, StagedWinning, WinningStrategy};

use crate::core::RandomChoice;

/// Everything a game needs from its variant.
///
/// `heroes` and `decks` are consumed during setup. `choice` stays with the
/// game and feeds every random pick made by effects and powers.
pub struct StrategySet {
    pub mana: Box<dyn ManaProductionStrategy>,
    pub winning: Box<dyn WinningStrategy>,
    pub heroes: Box<dyn HeroStrategy>,
    pub decks: Box<dyn DeckBuilderStrategy>,
    pub choice: Box<dyn RandomChoice>,
}

impl StrategySet {
    pub fn new(
        mana: impl ManaProductionStrategy + 'static,
        winning: impl WinningStrategy + 'static,
        heroes: impl HeroStrategy + 'static,
        decks: impl DeckBuilderStrategy + 'static,
        choice: impl RandomChoice + 'static,
    ) -> Self {
        Self {
            mana: Box::new(mana),
            winning: Box::new(winning),
            heroes: Box::new(heroes),
            decks: Box::new(decks),
            choice: Box::new(choice),
        }
    }

    /// Replace the hero strategy.
    #[must_use]
    pub fn with_heroes(mut self, heroes: impl HeroStrategy + 'static) -> Self {
        self.heroes = Box::new(heroes);
        self
    }

    /// Replace the game's random choice source.
    #[must_use]
    pub fn with_choice(mut self, choice: impl RandomChoice + 'static) -> Self {
        self.choice = Box::new(choice);
        self
    }
}
