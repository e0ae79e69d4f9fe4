//! Deck building.
//!
//! Deck builders return definitions in draw order (index 0 is drawn
//! first). The engine instantiates them for the player.

use crate::cards::{CardCatalog, CardDefinition};
use crate::core::{shuffle, Player, RandomChoice};

/// Maximum mana cost allowed at each of the first deck positions.
pub const OPENING_CURVE: [(usize, i32); 3] = [(0, 1), (1, 2), (2, 4)];

/// Produces a player's deck.
pub trait DeckBuilderStrategy {
    fn build_deck(&mut self, player: Player) -> Vec<CardDefinition>;
}

/// The catalog, once, in catalog order.
#[derive(Clone, Debug)]
pub struct CatalogDeck {
    catalog: CardCatalog,
}

impl CatalogDeck {
    pub fn new(catalog: CardCatalog) -> Self {
        Self { catalog }
    }
}

impl DeckBuilderStrategy for CatalogDeck {
    fn build_deck(&mut self, _player: Player) -> Vec<CardDefinition> {
        self.catalog.iter().cloned().collect()
    }
}

/// `copies` of every catalog entry, shuffled, with a playable opening.
pub struct ShuffledDeck {
    catalog: CardCatalog,
    copies: usize,
    choice: Box<dyn RandomChoice>,
}

impl ShuffledDeck {
    pub fn new(catalog: CardCatalog, copies: usize, choice: impl RandomChoice + 'static) -> Self {
        Self {
            catalog,
            copies,
            choice: Box::new(choice),
        }
    }
}

impl DeckBuilderStrategy for ShuffledDeck {
    fn build_deck(&mut self, player: Player) -> Vec<CardDefinition> {
        let mut deck: Vec<CardDefinition> = self
            .catalog
            .iter()
            .flat_map(|card| std::iter::repeat(card).take(self.copies))
            .cloned()
            .collect();
        shuffle(&mut deck, &mut self.choice);
        enforce_opening_curve(&mut deck, |card| card.mana_cost);
        log::debug!("built {} card deck for {}", deck.len(), player);
        deck
    }
}

/// Reorder the front of a deck so the first draws follow `OPENING_CURVE`.
///
/// For each (position, threshold) in turn, the first card at or after the
/// position costing no more than the threshold is swapped into place. A
/// position is left alone when no such card exists.
pub fn enforce_opening_curve<T>(deck: &mut [T], cost: impl Fn(&T) -> i32) {
    for (position, threshold) in OPENING_CURVE {
        if position >= deck.len() {
            break;
        }
        if let Some(found) = deck[position..]
            .iter()
            .position(|card| cost(card) <= threshold)
        {
            deck.swap(position, position + found);
        }
    }
}
