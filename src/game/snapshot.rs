//! Serializable views of a game.
//!
//! A snapshot is a plain copy of everything a player interface shows. It
//! does not carry strategies or effects, so it cannot be turned back into
//! a playable game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Hero};
use crate::core::{Player, PlayerMap};

use super::engine::Game;

/// What a card looks like from the outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    pub owner: Player,
    pub mana_cost: i32,
    pub attack: i32,
    pub health: i32,
    pub active: bool,
    /// Effect text, empty for vanilla cards.
    pub effect: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            name: card.name().to_string(),
            owner: card.owner(),
            mana_cost: card.mana_cost(),
            attack: card.attack(),
            health: card.health(),
            active: card.is_active(),
            effect: card.effect_description(),
        }
    }
}

/// What a hero looks like from the outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroView {
    pub hero_type: String,
    pub owner: Player,
    pub mana: i32,
    pub health: i32,
    pub power_usable: bool,
    pub power: String,
}

impl From<&Hero> for HeroView {
    fn from(hero: &Hero) -> Self {
        Self {
            hero_type: hero.hero_type().to_string(),
            owner: hero.owner(),
            mana: hero.mana(),
            health: hero.health(),
            power_usable: hero.is_power_usable(),
            power: hero.power_description(),
        }
    }
}

/// Full public state at one moment. Deck contents stay hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn_number: u32,
    pub player_in_turn: Player,
    pub winner: Option<Player>,
    pub heroes: PlayerMap<HeroView>,
    pub hands: PlayerMap<Vector<CardView>>,
    pub fields: PlayerMap<Vector<CardView>>,
    pub deck_sizes: PlayerMap<usize>,
}

impl GameSnapshot {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Game {
    /// Capture the current public state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let views =
            |cards: &Vector<Card>| -> Vector<CardView> { cards.iter().map(CardView::from).collect() };
        GameSnapshot {
            turn_number: self.turn_number(),
            player_in_turn: self.player_in_turn(),
            winner: self.winner(),
            heroes: PlayerMap::new(|player| HeroView::from(self.hero(player))),
            hands: PlayerMap::new(|player| views(self.hand(player))),
            fields: PlayerMap::new(|player| views(self.field(player))),
            deck_sizes: PlayerMap::new(|player| self.deck_size(player)),
        }
    }
}
