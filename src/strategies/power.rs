//! Hero powers.
//!
//! The engine checks turn, once-per-round and mana before calling a power,
//! and has already paid the cost when `use_power` runs.

use std::rc::Rc;

use crate::cards::CardDefinition;
use crate::core::Player;
use crate::effects::Effect;
use crate::game::EffectContext;

/// Side effect of a hero's power.
pub trait HeroPowerStrategy {
    /// Resolve the power for the hero owned by `hero`.
    fn use_power(&self, ctx: &mut EffectContext<'_>, hero: Player);

    fn description(&self) -> String;
}

/// A power that does nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoPower;

impl HeroPowerStrategy for NoPower {
    fn use_power(&self, _ctx: &mut EffectContext<'_>, _hero: Player) {}

    fn description(&self) -> String {
        "Cute".to_string()
    }
}

/// A power that applies a card effect on behalf of the hero's owner.
#[derive(Clone)]
pub struct EffectPower {
    effect: Rc<dyn Effect>,
}

impl EffectPower {
    pub fn new(effect: impl Effect + 'static) -> Self {
        Self {
            effect: Rc::new(effect),
        }
    }
}

impl HeroPowerStrategy for EffectPower {
    fn use_power(&self, ctx: &mut EffectContext<'_>, hero: Player) {
        self.effect.apply(ctx, hero);
    }

    fn description(&self) -> String {
        self.effect.description()
    }
}

/// Put a fresh token minion at the front of the owner's field.
#[derive(Clone, Debug)]
pub struct SummonTokenPower {
    token: CardDefinition,
}

impl SummonTokenPower {
    pub fn new(token: CardDefinition) -> Self {
        Self { token }
    }
}

impl HeroPowerStrategy for SummonTokenPower {
    fn use_power(&self, ctx: &mut EffectContext<'_>, hero: Player) {
        ctx.summon(hero, &self.token, 0);
    }

    fn description(&self) -> String {
        format!("Summon {}", self.token.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::sovs;
    use crate::effects::{ChangeHeroHealth, Side};

    #[test]
    fn test_descriptions() {
        assert_eq!(NoPower.description(), "Cute");
        assert_eq!(
            EffectPower::new(ChangeHeroHealth::new(Side::Opponent, -2)).description(),
            "Deal 2 damage to opponent hero"
        );
        assert_eq!(SummonTokenPower::new(sovs()).description(), "Summon Sovs");
    }
}
