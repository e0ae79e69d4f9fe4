//! Winning conditions.
//!
//! A winning strategy is evaluated from scratch every time the game is
//! asked for its winner. Nothing is cached, so the verdict follows the
//! current state.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::game::Game;

/// Decides whether the game has a winner.
pub trait WinningStrategy {
    fn winner(&self, game: &Game) -> Option<Player>;
}

/// A fixed player wins once the global turn number reaches `turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTurnWinning {
    pub turn: u32,
    pub winner: Player,
}

impl FixedTurnWinning {
    pub fn new(turn: u32, winner: Player) -> Self {
        Self { turn, winner }
    }
}

impl WinningStrategy for FixedTurnWinning {
    fn winner(&self, game: &Game) -> Option<Player> {
        (game.turn_number() >= self.turn).then_some(self.winner)
    }
}

/// A player wins when the opposing hero's health is at or below zero.
///
/// If both heroes are down the player in turn wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroHealthWinning;

impl WinningStrategy for HeroHealthWinning {
    fn winner(&self, game: &Game) -> Option<Player> {
        let current = game.player_in_turn();
        [current, current.opponent()]
            .into_iter()
            .find(|player| game.hero(player.opponent()).health() <= 0)
    }
}

/// From `from_turn` on, the player holding the only non-empty field wins.
///
/// Two empty fields are a tie decided in favour of `default_winner`; two
/// occupied fields leave the game open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldEmptinessWinning {
    pub from_turn: u32,
    pub default_winner: Player,
}

impl FieldEmptinessWinning {
    pub fn new(from_turn: u32, default_winner: Player) -> Self {
        Self {
            from_turn,
            default_winner,
        }
    }
}

impl WinningStrategy for FieldEmptinessWinning {
    fn winner(&self, game: &Game) -> Option<Player> {
        if game.turn_number() < self.from_turn {
            return None;
        }
        let first_empty = game.field_size(Player::First) == 0;
        let second_empty = game.field_size(Player::Second) == 0;
        match (first_empty, second_empty) {
            (true, true) => Some(self.default_winner),
            (true, false) => Some(Player::Second),
            (false, true) => Some(Player::First),
            (false, false) => None,
        }
    }
}

/// Phase of a staged game, derived from the global turn number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Early,
    Mid,
    Late,
}

/// Delegates to a different rule depending on the stage of the game.
///
/// Turns before `mid_from` are early, turns from `late_from` on are late,
/// everything in between is mid.
pub struct StagedWinning {
    early: Box<dyn WinningStrategy>,
    mid: Box<dyn WinningStrategy>,
    late: Box<dyn WinningStrategy>,
    mid_from: u32,
    late_from: u32,
}

impl StagedWinning {
    /// # Panics
    ///
    /// If `mid_from > late_from`. Stage boundaries are fixed by the variant
    /// that builds the rule, never by runtime input.
    pub fn new(
        early: impl WinningStrategy + 'static,
        mid: impl WinningStrategy + 'static,
        late: impl WinningStrategy + 'static,
        mid_from: u32,
        late_from: u32,
    ) -> Self {
        assert!(mid_from <= late_from, "mid stage must start before late stage");
        Self {
            early: Box::new(early),
            mid: Box::new(mid),
            late: Box::new(late),
            mid_from,
            late_from,
        }
    }

    /// The stage a global turn number falls in.
    #[must_use]
    pub fn stage(&self, turn_number: u32) -> Stage {
        if turn_number >= self.late_from {
            Stage::Late
        } else if turn_number >= self.mid_from {
            Stage::Mid
        } else {
            Stage::Early
        }
    }
}

impl WinningStrategy for StagedWinning {
    fn winner(&self, game: &Game) -> Option<Player> {
        let rule = match self.stage(game.turn_number()) {
            Stage::Early => &self.early,
            Stage::Mid => &self.mid,
            Stage::Late => &self.late,
        };
        rule.winner(game)
    }
}
