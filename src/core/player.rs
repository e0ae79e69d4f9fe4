//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Exactly two seats. `Player::opponent` is used for every opponent lookup.
//!
//! ## PlayerMap
//!
//! Two-slot storage indexed by `Player`. Supports iteration and indexing.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
///
/// The first player acts on even global turns, the second on odd ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players, first player first.
    pub const BOTH: [Player; 2] = [Player::First, Player::Second];

    /// The other seat.
    ///
    /// ```
    /// use stone_ccg::core::Player;
    ///
    /// assert_eq!(Player::First.opponent(), Player::Second);
    /// assert_eq!(Player::Second.opponent(), Player::First);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// The player whose turn it is for a global turn number.
    #[must_use]
    pub const fn for_turn(turn_number: u32) -> Self {
        if turn_number % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Raw seat index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "first player"),
            Player::Second => write!(f, "second player"),
        }
    }
}

/// Per-player data storage.
///
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use stone_ccg::core::{Player, PlayerMap};
///
/// let mut health: PlayerMap<i32> = PlayerMap::with_value(21);
/// health[Player::Second] -= 4;
///
/// assert_eq!(health[Player::First], 21);
/// assert_eq!(health[Player::Second], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory is called for the first player, then the second.
    pub fn new(mut factory: impl FnMut(Player) -> T) -> Self {
        let first = factory(Player::First);
        let second = factory(Player::Second);
        Self {
            data: [first, second],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::BOTH {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_turn_parity() {
        assert_eq!(Player::for_turn(0), Player::First);
        assert_eq!(Player::for_turn(1), Player::Second);
        assert_eq!(Player::for_turn(8), Player::First);
        assert_eq!(Player::for_turn(13), Player::Second);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::First), "first player");
        assert_eq!(format!("{}", Player::Second), "second player");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[Player::First], 0);
        assert_eq!(map[Player::Second], 10);
    }

    #[test]
    fn test_player_map_with_default() {
        let map: PlayerMap<Vec<i32>> = PlayerMap::with_default();

        assert!(map[Player::First].is_empty());
        assert!(map[Player::Second].is_empty());
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[Player::First] = 10;
        *map.get_mut(Player::Second) += 20;

        assert_eq!(map[Player::First], 10);
        assert_eq!(map[Player::Second], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::First, &1), (Player::Second, &2)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
