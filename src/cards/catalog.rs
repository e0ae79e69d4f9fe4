//! Card catalogs.
//!
//! A `CardCatalog` is the ordered list of definitions a deck builder draws
//! from, with lookup by name. The built-in catalogs back the named variants.

use rustc_hash::FxHashMap;

use super::definition::CardDefinition;
use crate::effects::{BuffRandomMinion, ChangeHeroHealth, DestroyRandomMinion, DrawCard, Side};

/// Ordered catalog of card definitions.
///
/// ## Example
///
/// ```
/// use stone_ccg::cards::{CardCatalog, CardDefinition};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new("Uno", 1, 1, 1));
///
/// assert_eq!(catalog.get("Uno").unwrap().mana_cost, 1);
/// assert!(catalog.get("Dos").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition at the end of the catalog.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.by_name.contains_key(&card.name) {
            panic!("Card named {:?} already registered", card.name);
        }
        self.by_name.insert(card.name.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.by_name.get(name).map(|&index| &self.cards[index])
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

impl FromIterator<CardDefinition> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut catalog = CardCatalog::new();
        for card in iter {
            catalog.register(card);
        }
        catalog
    }
}

/// Seven plain cards named after Spanish numbers.
#[must_use]
pub fn spanish_catalog() -> CardCatalog {
    [
        CardDefinition::new("Uno", 1, 1, 1),
        CardDefinition::new("Dos", 2, 2, 2),
        CardDefinition::new("Tres", 3, 3, 3),
        CardDefinition::new("Cuatro", 2, 3, 1),
        CardDefinition::new("Cinco", 3, 5, 1),
        CardDefinition::new("Seis", 2, 1, 3),
        CardDefinition::new("Siete", 3, 2, 4),
    ]
    .into_iter()
    .collect()
}

/// Plain dishes with a wider mana curve.
#[must_use]
pub fn dish_catalog() -> CardCatalog {
    [
        CardDefinition::new("Brown Rice", 1, 1, 1),
        CardDefinition::new("French Fries", 1, 2, 1),
        CardDefinition::new("Green Salad", 2, 2, 3),
        CardDefinition::new("Tomato Salad", 2, 2, 2),
        CardDefinition::new("Poke Bowl", 3, 2, 3),
        CardDefinition::new("Pumpkin Soup", 4, 2, 7),
        CardDefinition::new("Noodle Soup", 4, 5, 3),
        CardDefinition::new("Spring Rolls", 5, 3, 7),
        CardDefinition::new("Baked Salmon", 5, 8, 2),
    ]
    .into_iter()
    .collect()
}

/// Dishes that carry on-play effects.
#[must_use]
pub fn seasoned_dish_catalog() -> CardCatalog {
    [
        CardDefinition::new("Brown Rice", 1, 1, 2)
            .with_effect(ChangeHeroHealth::new(Side::Opponent, -1)),
        CardDefinition::new("French Fries", 1, 2, 1),
        CardDefinition::new("Green Salad", 2, 2, 3),
        CardDefinition::new("Tomato Salad", 2, 2, 2)
            .with_effect(BuffRandomMinion::new(Side::Own, 1, 0)),
        CardDefinition::new("Poke Bowl", 3, 2, 3)
            .with_effect(ChangeHeroHealth::new(Side::Own, 2)),
        CardDefinition::new("Pumpkin Soup", 4, 2, 7),
        CardDefinition::new("Noodle Soup", 4, 5, 3).with_effect(DrawCard::always()),
        CardDefinition::new("Spring Rolls", 5, 3, 7)
            .with_effect(BuffRandomMinion::new(Side::Opponent, 0, -2)),
        CardDefinition::new("Baked Salmon", 5, 8, 2),
        CardDefinition::new("Chicken Curry", 6, 4, 4)
            .with_effect(DestroyRandomMinion::new(Side::Opponent)),
        CardDefinition::new("Beef Burger", 6, 8, 1)
            .with_effect(BuffRandomMinion::new(Side::Opponent, 2, 0)),
        CardDefinition::new("Ramen Soup", 2, 3, 2).with_effect(DrawCard::when_behind()),
    ]
    .into_iter()
    .collect()
}

/// Token summoned by the Danish Chef's power.
#[must_use]
pub fn sovs() -> CardDefinition {
    CardDefinition::new("Sovs", 1, 1, 1)
}
