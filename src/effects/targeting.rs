//! Target selection for effects.
//!
//! Effects name a side relative to the player who triggered them and pick
//! minions on that side through the game's random choice capability.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::game::EffectContext;

/// Which side of the table an effect targets, relative to its player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player who played the card or used the power.
    Own,
    /// The other player.
    Opponent,
}

impl Side {
    /// The concrete player this side refers to.
    #[must_use]
    pub const fn resolve(self, player: Player) -> Player {
        match self {
            Side::Own => player,
            Side::Opponent => player.opponent(),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Own => write!(f, "own"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Pick a random minion index on `owner`'s field.
///
/// Returns `None` without consuming a pick when the field is empty.
pub fn random_minion(ctx: &mut EffectContext<'_>, owner: Player) -> Option<usize> {
    match ctx.field_size(owner) {
        0 => None,
        size => Some(ctx.choose_index(size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(Side::Own.resolve(Player::Second), Player::Second);
        assert_eq!(Side::Opponent.resolve(Player::Second), Player::First);
    }

    #[test]
    fn test_display() {
        assert_eq!(Side::Own.to_string(), "own");
        assert_eq!(Side::Opponent.to_string(), "opponent");
    }
}
