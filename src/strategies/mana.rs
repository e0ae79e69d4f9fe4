//! Mana production.
//!
//! The engine asks for a player's mana each time that player ends a turn,
//! passing the player's personal turn count (1 for the opening turn).

/// Mana available for a player's turn.
pub trait ManaProductionStrategy {
    fn calculate_mana(&self, personal_turn: u32) -> i32;
}

/// The same amount every turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstantMana(pub i32);

impl ManaProductionStrategy for ConstantMana {
    fn calculate_mana(&self, _personal_turn: u32) -> i32 {
        self.0
    }
}

/// One mana per personal turn, up to `cap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncreasingMana {
    pub cap: i32,
}

impl IncreasingMana {
    pub fn new(cap: i32) -> Self {
        Self { cap }
    }
}

impl ManaProductionStrategy for IncreasingMana {
    fn calculate_mana(&self, personal_turn: u32) -> i32 {
        i32::try_from(personal_turn).map_or(self.cap, |turn| turn.min(self.cap))
    }
}
