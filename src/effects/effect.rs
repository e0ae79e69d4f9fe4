//! Card effects.
//!
//! An `Effect` runs when its card is played. It receives an
//! `EffectContext` and the player who played the card, so every change it
//! makes is announced to observers. Random targets always come from
//! `EffectContext::choose_index`.

use serde::{Deserialize, Serialize};

use super::targeting::{random_minion, Side};
use crate::core::Player;
use crate::game::EffectContext;

/// On-play behaviour attached to a card definition.
pub trait Effect {
    /// Apply the effect on behalf of `player`.
    fn apply(&self, ctx: &mut EffectContext<'_>, player: Player);

    /// Card text shown to players.
    fn description(&self) -> String;
}

/// Damage (negative delta) or heal (positive delta) a hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeHeroHealth {
    pub side: Side,
    pub delta: i32,
}

impl ChangeHeroHealth {
    pub fn new(side: Side, delta: i32) -> Self {
        Self { side, delta }
    }
}

impl Effect for ChangeHeroHealth {
    fn apply(&self, ctx: &mut EffectContext<'_>, player: Player) {
        ctx.change_hero_health(self.side.resolve(player), self.delta);
    }

    fn description(&self) -> String {
        if self.delta < 0 {
            format!("Deal {} damage to {} hero", -self.delta, self.side)
        } else {
            format!("Add {} health to {} hero", self.delta, self.side)
        }
    }
}

/// Change the attack and health of one random minion on a side.
///
/// A minion whose health drops to zero is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffRandomMinion {
    pub side: Side,
    pub attack: i32,
    pub health: i32,
}

impl BuffRandomMinion {
    pub fn new(side: Side, attack: i32, health: i32) -> Self {
        Self {
            side,
            attack,
            health,
        }
    }
}

impl Effect for BuffRandomMinion {
    fn apply(&self, ctx: &mut EffectContext<'_>, player: Player) {
        let owner = self.side.resolve(player);
        if let Some(index) = random_minion(ctx, owner) {
            ctx.adjust_minion(owner, index, self.attack, self.health);
        }
    }

    fn description(&self) -> String {
        match (self.attack, self.health) {
            (0, health) if health < 0 => {
                format!("Deal {} damage to random {} minion", -health, self.side)
            }
            (attack, 0) => format!("Add {:+} attack to random {} minion", attack, self.side),
            (0, health) => format!("Add {:+} health to random {} minion", health, self.side),
            (attack, health) => format!(
                "Add {:+} attack and {:+} health to random {} minion",
                attack, health, self.side
            ),
        }
    }
}

/// Remove one random minion on a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyRandomMinion {
    pub side: Side,
}

impl DestroyRandomMinion {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl Effect for DestroyRandomMinion {
    fn apply(&self, ctx: &mut EffectContext<'_>, player: Player) {
        let owner = self.side.resolve(player);
        if let Some(index) = random_minion(ctx, owner) {
            ctx.destroy_minion(owner, index);
        }
    }

    fn description(&self) -> String {
        format!("Destroy random {} minion", self.side)
    }
}

/// When a `DrawCard` effect actually draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCondition {
    Always,
    /// Only while the opponent has more minions on the field.
    WhenBehind,
}

/// Draw a card for the player, if the condition holds and the deck is not
/// empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCard {
    pub condition: DrawCondition,
}

impl DrawCard {
    #[must_use]
    pub fn always() -> Self {
        Self {
            condition: DrawCondition::Always,
        }
    }

    #[must_use]
    pub fn when_behind() -> Self {
        Self {
            condition: DrawCondition::WhenBehind,
        }
    }
}

impl Effect for DrawCard {
    fn apply(&self, ctx: &mut EffectContext<'_>, player: Player) {
        let allowed = match self.condition {
            DrawCondition::Always => true,
            DrawCondition::WhenBehind => {
                ctx.field_size(player.opponent()) > ctx.field_size(player)
            }
        };
        if allowed {
            ctx.draw_card(player);
        }
    }

    fn description(&self) -> String {
        match self.condition {
            DrawCondition::Always => "Draw a card".to_string(),
            DrawCondition::WhenBehind => {
                "Draw a card if opponent has more minions".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_health_descriptions() {
        assert_eq!(
            ChangeHeroHealth::new(Side::Opponent, -2).description(),
            "Deal 2 damage to opponent hero"
        );
        assert_eq!(
            ChangeHeroHealth::new(Side::Own, 2).description(),
            "Add 2 health to own hero"
        );
    }

    #[test]
    fn test_buff_descriptions() {
        assert_eq!(
            BuffRandomMinion::new(Side::Own, 1, 0).description(),
            "Add +1 attack to random own minion"
        );
        assert_eq!(
            BuffRandomMinion::new(Side::Opponent, 0, -2).description(),
            "Deal 2 damage to random opponent minion"
        );
        assert_eq!(
            BuffRandomMinion::new(Side::Own, 0, 3).description(),
            "Add +3 health to random own minion"
        );
        assert_eq!(
            BuffRandomMinion::new(Side::Own, 1, 1).description(),
            "Add +1 attack and +1 health to random own minion"
        );
    }

    #[test]
    fn test_other_descriptions() {
        assert_eq!(
            DestroyRandomMinion::new(Side::Opponent).description(),
            "Destroy random opponent minion"
        );
        assert_eq!(DrawCard::always().description(), "Draw a card");
        assert!(DrawCard::when_behind().description().contains("more minions"));
    }
}
