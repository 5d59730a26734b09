//! Game balance table
//!
//! Loaded once at startup and never mutated during a session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{HIGH_TIER_WPM, MAX_STAT};

/// Per-action values (stat gains or coin costs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTable {
    pub feed: u32,
    pub pet: u32,
    pub play: u32,
}

/// Coin payouts for the typing challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

/// Typing reward bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardTier {
    High,
    /// Present in the payout table but never selected by `RewardTier::for_wpm`
    Medium,
    Low,
}

impl RewardTier {
    /// Select the tier for a finished session.
    ///
    /// Only two brackets are distinguished: at or above `HIGH_TIER_WPM` is
    /// high, everything else is low.
    pub fn for_wpm(wpm: u32) -> Self {
        if wpm >= HIGH_TIER_WPM {
            RewardTier::High
        } else {
            RewardTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RewardTier::High => "high",
            RewardTier::Medium => "medium",
            RewardTier::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maxStatValue must be between 1 and {max} (got {value})")]
    MaxStat { value: u8, max: u8 },
    #[error("currency rewards must satisfy high >= medium >= low (got {high}/{medium}/{low})")]
    RewardOrder { high: u32, medium: u32, low: u32 },
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

/// Game balance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub max_stat_value: u8,
    /// Reserved for time-based decay; no decay is applied
    pub stat_decay_rate: u32,
    /// Stat gain per action
    pub base_rewards: ActionTable,
    /// Coin cost per action
    pub action_costs: ActionTable,
    pub currency_rewards: RewardTable,
    /// Shop prices by item id
    pub item_costs: BTreeMap<String, u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let item_costs = [
            ("premium_food", 30),
            ("toy_ball", 20),
            ("cleaning_kit", 25),
            ("special_treat", 40),
        ]
        .into_iter()
        .map(|(id, cost)| (id.to_string(), cost))
        .collect();

        Self {
            max_stat_value: MAX_STAT,
            stat_decay_rate: 1,
            base_rewards: ActionTable {
                feed: 20,
                pet: 15,
                play: 50,
            },
            action_costs: ActionTable {
                feed: 5,
                pet: 3,
                play: 0,
            },
            currency_rewards: RewardTable {
                high: 30,
                medium: 25,
                low: 20,
            },
            item_costs,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config table
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stat_value == 0 || self.max_stat_value > MAX_STAT {
            return Err(ConfigError::MaxStat {
                value: self.max_stat_value,
                max: MAX_STAT,
            });
        }
        let r = &self.currency_rewards;
        if r.high < r.medium || r.medium < r.low {
            return Err(ConfigError::RewardOrder {
                high: r.high,
                medium: r.medium,
                low: r.low,
            });
        }
        Ok(())
    }

    /// Coins paid out for a reward tier
    pub fn reward_for(&self, tier: RewardTier) -> u32 {
        match tier {
            RewardTier::High => self.currency_rewards.high,
            RewardTier::Medium => self.currency_rewards.medium,
            RewardTier::Low => self.currency_rewards.low,
        }
    }

    /// Shop price for an item, if it is sold
    pub fn item_cost(&self, id: &str) -> Option<u32> {
        self.item_costs.get(id).copied()
    }
}
