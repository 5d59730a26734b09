//! Currency rules: action prices, stat gains, and typing payouts

use super::stats::StatEffect;
use crate::config::{GameConfig, RewardTier};

/// Paid care actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Feed,
    Pet,
    Play,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Feed => "feed",
            ActionKind::Pet => "pet",
            ActionKind::Play => "play",
        }
    }

    /// Coin cost of the action
    pub fn cost(&self, config: &GameConfig) -> u32 {
        match self {
            ActionKind::Feed => config.action_costs.feed,
            ActionKind::Pet => config.action_costs.pet,
            ActionKind::Play => config.action_costs.play,
        }
    }

    /// Stat effect of the action
    pub fn effect(&self, config: &GameConfig) -> StatEffect {
        let gain = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        match self {
            ActionKind::Feed => StatEffect::hunger(gain(config.base_rewards.feed)),
            ActionKind::Pet => StatEffect::affection(gain(config.base_rewards.pet)),
            ActionKind::Play => StatEffect::happiness(gain(config.base_rewards.play)),
        }
    }
}

/// Balance after paying `cost`, or `None` if it can't be afforded
#[inline]
pub fn charge(balance: u32, cost: u32) -> Option<u32> {
    balance.checked_sub(cost)
}

/// Balance after adding a (possibly negative) amount, floored at zero
pub fn credit(balance: u32, amount: i64) -> u32 {
    let total = i64::from(balance).saturating_add(amount);
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

/// Coins earned for a finished typing session.
///
/// Accuracy does not affect the payout.
pub fn word_game_reward(wpm: u32, _accuracy: u32, config: &GameConfig) -> u32 {
    config.reward_for(RewardTier::for_wpm(wpm))
}
