//! Named rule variants and the game builder.
//!
//! A variant is a fixed bundle of strategies: mana production, winning
//! condition, hero assignment, deck builder and the random choice source
//! effects use. `Variant::strategies` assembles the bundle; `GameBuilder`
//! turns a variant (or a custom bundle) into a running `Game`.
//!
//! ```
//! use stone_ccg::core::Player;
//! use stone_ccg::variants::{GameBuilder, Variant};
//!
//! let variant: Variant = "gamma".parse().unwrap();
//! let game = GameBuilder::new(variant).seed(7).build().unwrap();
//!
//! assert_eq!(game.hero(Player::First).hero_type(), "Thai Chef");
//! assert_eq!(game.hero(Player::Second).hero_type(), "Danish Chef");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{dish_catalog, seasoned_dish_catalog, spanish_catalog};
use crate::core::{GameConfig, GameRng, Player};
use crate::error::ConfigError;
use crate::events::GameObserver;
use crate::game::Game;
use crate::strategies::{
    CatalogDeck, ConstantMana, FieldEmptinessWinning, FixedHeroes, FixedTurnWinning,
    HeroArchetype, HeroHealthWinning, IncreasingMana, RandomHeroes, ShuffledDeck, StagedWinning,
};

pub use crate::strategies::StrategySet;

/// Copies of each catalog entry in a shuffled deck.
const SHUFFLED_COPIES: usize = 2;

/// The built-in rule sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Constant 3 mana, first player wins at turn 8.
    Alpha,
    /// Growing mana, heroes fight to the death.
    Beta,
    /// Alpha with Thai and Danish chefs.
    Gamma,
    /// Constant 7 mana and a shuffled dish deck.
    Delta,
    /// Random chefs, last field standing from turn 10.
    Epsilon,
    /// Winning rule changes with the stage of the game.
    Zeta,
    /// Random chefs and seasoned dishes with effects.
    Eta,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::Alpha,
        Variant::Beta,
        Variant::Gamma,
        Variant::Delta,
        Variant::Epsilon,
        Variant::Zeta,
        Variant::Eta,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::Alpha => "alpha",
            Variant::Beta => "beta",
            Variant::Gamma => "gamma",
            Variant::Delta => "delta",
            Variant::Epsilon => "epsilon",
            Variant::Zeta => "zeta",
            Variant::Eta => "eta",
        }
    }

    /// Build this variant's strategies.
    ///
    /// Every random strategy gets its own fork of a `GameRng` seeded with
    /// `seed`, so one seed reproduces heroes, decks and effect targets.
    #[must_use]
    pub fn strategies(self, seed: u64) -> StrategySet {
        let mut rng = GameRng::new(seed);
        let heroes_rng = rng.fork();
        let decks_rng = rng.fork();
        let choice = rng.fork();

        let spanish = || CatalogDeck::new(spanish_catalog());
        let baby = FixedHeroes::both(HeroArchetype::Baby);
        let turn_eight = FixedTurnWinning::new(8, Player::First);

        match self {
            Variant::Alpha => StrategySet::new(ConstantMana(3), turn_eight, baby, spanish(), choice),
            Variant::Beta => StrategySet::new(
                IncreasingMana::new(7),
                HeroHealthWinning,
                baby,
                spanish(),
                choice,
            ),
            Variant::Gamma => StrategySet::new(
                ConstantMana(3),
                turn_eight,
                FixedHeroes::new(HeroArchetype::ThaiChef, HeroArchetype::DanishChef),
                spanish(),
                choice,
            ),
            Variant::Delta => StrategySet::new(
                ConstantMana(7),
                turn_eight,
                baby,
                ShuffledDeck::new(dish_catalog(), SHUFFLED_COPIES, decks_rng),
                choice,
            ),
            Variant::Epsilon => StrategySet::new(
                ConstantMana(3),
                FieldEmptinessWinning::new(10, Player::First),
                RandomHeroes::chefs(heroes_rng),
                spanish(),
                choice,
            ),
            Variant::Zeta => StrategySet::new(
                IncreasingMana::new(7),
                StagedWinning::new(
                    HeroHealthWinning,
                    FieldEmptinessWinning::new(6, Player::First),
                    FixedTurnWinning::new(16, Player::First),
                    6,
                    16,
                ),
                baby,
                spanish(),
                choice,
            ),
            Variant::Eta => StrategySet::new(
                IncreasingMana::new(7),
                HeroHealthWinning,
                RandomHeroes::chefs(heroes_rng),
                ShuffledDeck::new(seasoned_dish_catalog(), SHUFFLED_COPIES, decks_rng),
                choice,
            ),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

enum StrategySource {
    Named(Variant),
    Custom(StrategySet),
}

/// Builder for creating a `Game`.
pub struct GameBuilder {
    source: StrategySource,
    seed: u64,
    config: GameConfig,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameBuilder {
    /// Start from a named variant.
    pub fn new(variant: Variant) -> Self {
        Self::from_source(StrategySource::Named(variant))
    }

    /// Start from a variant name such as `"alpha"`.
    pub fn named(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.parse()?))
    }

    /// Start from a hand-assembled strategy bundle. The seed is ignored.
    pub fn custom(strategies: StrategySet) -> Self {
        Self::from_source(StrategySource::Custom(strategies))
    }

    fn from_source(source: StrategySource) -> Self {
        Self {
            source,
            seed: 0,
            config: GameConfig::default(),
            observers: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Subscribe an observer before the first command.
    pub fn observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> Result<Game, ConfigError> {
        self.config.validate()?;

        let strategies = match self.source {
            StrategySource::Named(variant) => {
                log::debug!("building {} game with seed {}", variant, self.seed);
                variant.strategies(self.seed)
            }
            StrategySource::Custom(strategies) => strategies,
        };

        let mut game = Game::new(self.config, strategies);
        for observer in self.observers {
            game.subscribe_boxed(observer);
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedChoice;
    use crate::events::EventLog;
    use crate::strategies::Stage;

    #[test]
    fn test_parse_variant_names() {
        assert_eq!("alpha".parse::<Variant>().unwrap(), Variant::Alpha);
        assert_eq!("ZETA".parse::<Variant>().unwrap(), Variant::Zeta);
        assert_eq!(" Eta ".parse::<Variant>().unwrap(), Variant::Eta);

        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_unknown_variant() {
        let err = "omega".parse::<Variant>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVariant(ref name) if name == "omega"));
        assert!(GameBuilder::named("omega").is_err());
    }

    #[test]
    fn test_variant_serde_names() {
        let json = serde_json::to_string(&Variant::Epsilon).unwrap();
        assert_eq!(json, "\"epsilon\"");
        let back: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Variant::Epsilon);
    }

    #[test]
    fn test_every_variant_builds() {
        for variant in Variant::ALL {
            let game = GameBuilder::new(variant).seed(11).build().unwrap();
            for player in Player::BOTH {
                assert_eq!(game.hand_size(player), 3);
                assert_eq!(game.hero(player).health(), 21);
                assert!(game.hero(player).is_power_usable());
            }
            assert_eq!(game.winner(), None);
        }
    }

    #[test]
    fn test_deck_sizes() {
        let alpha = GameBuilder::new(Variant::Alpha).build().unwrap();
        assert_eq!(alpha.deck_size(Player::First), 4);

        let delta = GameBuilder::new(Variant::Delta).seed(5).build().unwrap();
        assert_eq!(delta.deck_size(Player::First), 15);
        assert_eq!(delta.deck_size(Player::Second), 15);

        let eta = GameBuilder::new(Variant::Eta).seed(5).build().unwrap();
        assert_eq!(eta.deck_size(Player::Second), 21);
    }

    #[test]
    fn test_opening_mana() {
        let mana = |variant| {
            GameBuilder::new(variant)
                .build()
                .unwrap()
                .hero(Player::First)
                .mana()
        };
        assert_eq!(mana(Variant::Alpha), 3);
        assert_eq!(mana(Variant::Beta), 1);
        assert_eq!(mana(Variant::Delta), 7);
    }

    #[test]
    fn test_random_heroes_are_chefs() {
        let chefs: Vec<_> = HeroArchetype::CHEFS.iter().map(|c| c.type_name()).collect();
        for seed in 0..10 {
            let game = GameBuilder::new(Variant::Epsilon).seed(seed).build().unwrap();
            for player in Player::BOTH {
                assert!(chefs.contains(&game.hero(player).hero_type()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let names = |seed| {
            let game = GameBuilder::new(Variant::Eta).seed(seed).build().unwrap();
            let heroes: Vec<String> = Player::BOTH
                .iter()
                .map(|&p| game.hero(p).hero_type().to_string())
                .collect();
            let deck: Vec<String> = game
                .deck(Player::First)
                .iter()
                .map(|c| c.name().to_string())
                .collect();
            (heroes, deck)
        };
        assert_eq!(names(21), names(21));
    }

    #[test]
    fn test_custom_strategies() {
        let strategies = Variant::Alpha
            .strategies(0)
            .with_heroes(FixedHeroes::both(HeroArchetype::FrenchChef))
            .with_choice(ScriptedChoice::first());
        let game = GameBuilder::custom(strategies).build().unwrap();

        assert_eq!(game.hero(Player::Second).hero_type(), "French Chef");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GameBuilder::new(Variant::Alpha)
            .config(GameConfig::default().with_hero_health(0))
            .build();
        assert!(matches!(result, Err(ConfigError::Invalid { field: "hero_health", .. })));
    }

    #[test]
    fn test_builder_observers_see_first_command() {
        let log = EventLog::new();
        let mut game = GameBuilder::new(Variant::Alpha)
            .observer(log.clone())
            .build()
            .unwrap();
        assert!(log.is_empty());

        game.end_turn();
        assert!(!log.is_empty());
    }

    #[test]
    fn test_zeta_stages() {
        let staged = StagedWinning::new(
            HeroHealthWinning,
            FieldEmptinessWinning::new(6, Player::First),
            FixedTurnWinning::new(16, Player::First),
            6,
            16,
        );
        assert_eq!(staged.stage(5), Stage::Early);
        assert_eq!(staged.stage(6), Stage::Mid);
        assert_eq!(staged.stage(16), Stage::Late);
    }
}
