//! Heroes.
//!
//! One hero per player, created by the variant's hero strategy when the game
//! is built and never destroyed. Health may drop to zero or below; whether
//! that ends the game is up to the winning strategy.

use std::fmt;
use std::rc::Rc;

use crate::core::Player;
use crate::strategies::HeroPowerStrategy;

/// A player's hero.
#[derive(Clone)]
pub struct Hero {
    hero_type: String,
    owner: Player,
    mana: i32,
    health: i32,
    power_usable: bool,
    power: Rc<dyn HeroPowerStrategy>,
}

impl Hero {
    /// Create a hero with no mana and no health.
    ///
    /// The engine seats the hero with the configured health and the first
    /// turn's mana when the game is built.
    pub fn new(hero_type: impl Into<String>, owner: Player, power: Rc<dyn HeroPowerStrategy>) -> Self {
        Self {
            hero_type: hero_type.into(),
            owner,
            mana: 0,
            health: 0,
            power_usable: true,
            power,
        }
    }

    /// Short archetype name, e.g. "Thai Chef".
    #[must_use]
    pub fn hero_type(&self) -> &str {
        &self.hero_type
    }

    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    #[must_use]
    pub fn mana(&self) -> i32 {
        self.mana
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// False after the power has been used, until the owner's turn ends.
    #[must_use]
    pub fn is_power_usable(&self) -> bool {
        self.power_usable
    }

    #[must_use]
    pub fn power(&self) -> &Rc<dyn HeroPowerStrategy> {
        &self.power
    }

    #[must_use]
    pub fn power_description(&self) -> String {
        self.power.description()
    }

    pub(crate) fn set_mana(&mut self, mana: i32) {
        self.mana = mana;
    }

    pub(crate) fn spend_mana(&mut self, amount: i32) {
        self.mana -= amount;
    }

    pub(crate) fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    pub(crate) fn change_health(&mut self, delta: i32) {
        self.health += delta;
    }

    pub(crate) fn set_power_usable(&mut self, usable: bool) {
        self.power_usable = usable;
    }
}

impl fmt::Debug for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hero")
            .field("hero_type", &self.hero_type)
            .field("owner", &self.owner)
            .field("mana", &self.mana)
            .field("health", &self.health)
            .field("power_usable", &self.power_usable)
            .field("power", &self.power.description())
            .finish()
    }
}
