//! Hero assignment.
//!
//! Called once per player while the game is built. Each archetype comes
//! with its own hero power.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::power::{EffectPower, HeroPowerStrategy, NoPower, SummonTokenPower};
use crate::cards::{sovs, Hero};
use crate::core::{Player, RandomChoice};
use crate::effects::{BuffRandomMinion, ChangeHeroHealth, Side};

/// Picks the hero a player commands.
pub trait HeroStrategy {
    fn hero_for(&mut self, player: Player) -> Hero;
}

/// The built-in hero archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroArchetype {
    /// No power.
    Baby,
    /// 2 damage to the opposing hero.
    ThaiChef,
    /// Summons a Sovs token.
    DanishChef,
    /// +2 attack to a random own minion.
    ItalianChef,
    /// 2 damage to a random opposing minion.
    FrenchChef,
}

impl HeroArchetype {
    /// The chefs a random hero strategy chooses from by default.
    pub const CHEFS: [HeroArchetype; 4] = [
        HeroArchetype::ThaiChef,
        HeroArchetype::DanishChef,
        HeroArchetype::ItalianChef,
        HeroArchetype::FrenchChef,
    ];

    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            HeroArchetype::Baby => "Baby",
            HeroArchetype::ThaiChef => "Thai Chef",
            HeroArchetype::DanishChef => "Danish Chef",
            HeroArchetype::ItalianChef => "Italian Chef",
            HeroArchetype::FrenchChef => "French Chef",
        }
    }

    #[must_use]
    pub fn power(self) -> Rc<dyn HeroPowerStrategy> {
        match self {
            HeroArchetype::Baby => Rc::new(NoPower),
            HeroArchetype::ThaiChef => {
                Rc::new(EffectPower::new(ChangeHeroHealth::new(Side::Opponent, -2)))
            }
            HeroArchetype::DanishChef => Rc::new(SummonTokenPower::new(sovs())),
            HeroArchetype::ItalianChef => {
                Rc::new(EffectPower::new(BuffRandomMinion::new(Side::Own, 2, 0)))
            }
            HeroArchetype::FrenchChef => {
                Rc::new(EffectPower::new(BuffRandomMinion::new(Side::Opponent, 0, -2)))
            }
        }
    }

    /// A hero of this archetype for `owner`.
    #[must_use]
    pub fn hero(self, owner: Player) -> Hero {
        Hero::new(self.type_name(), owner, self.power())
    }
}

/// Each player always gets the same archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedHeroes {
    pub first: HeroArchetype,
    pub second: HeroArchetype,
}

impl FixedHeroes {
    pub fn new(first: HeroArchetype, second: HeroArchetype) -> Self {
        Self { first, second }
    }

    /// Both players get the same archetype.
    pub fn both(archetype: HeroArchetype) -> Self {
        Self::new(archetype, archetype)
    }
}

impl HeroStrategy for FixedHeroes {
    fn hero_for(&mut self, player: Player) -> Hero {
        match player {
            Player::First => self.first.hero(player),
            Player::Second => self.second.hero(player),
        }
    }
}

/// Each player gets an archetype picked by a random choice source.
pub struct RandomHeroes {
    archetypes: Vec<HeroArchetype>,
    choice: Box<dyn RandomChoice>,
}

impl RandomHeroes {
    /// Pick among `archetypes`.
    ///
    /// Panics if `archetypes` is empty.
    pub fn new(archetypes: Vec<HeroArchetype>, choice: impl RandomChoice + 'static) -> Self {
        assert!(!archetypes.is_empty(), "Need at least one hero archetype");
        Self {
            archetypes,
            choice: Box::new(choice),
        }
    }

    /// Pick among the four chefs.
    pub fn chefs(choice: impl RandomChoice + 'static) -> Self {
        Self::new(HeroArchetype::CHEFS.to_vec(), choice)
    }
}

impl HeroStrategy for RandomHeroes {
    fn hero_for(&mut self, player: Player) -> Hero {
        let pick = self.choice.choose(self.archetypes.len());
        self.archetypes[pick].hero(player)
    }
}
