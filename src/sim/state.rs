//! Game state and persisted data model
//!
//! Everything here is serialized as the save snapshot. Field names follow the
//! camelCase JSON shape so existing saves load field-for-field.

use serde::{Deserialize, Serialize};

use super::stats::{PetStats, StatEffect};
use crate::consts::STARTING_CURRENCY;

/// The player's pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Set at creation, never changed
    pub name: String,
    pub stats: PetStats,
    /// Unix timestamps (ms) of the last care actions
    pub last_fed: u64,
    pub last_petted: u64,
    pub last_played: u64,
    pub is_adopted: bool,
    /// Set exactly once, when adoption happens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adopted_at: Option<u64>,
}

impl Pet {
    /// A fresh, unadopted pet with all stats at zero
    pub fn new(name: impl Into<String>, now: u64) -> Self {
        Self {
            name: name.into(),
            stats: PetStats::default(),
            last_fed: now,
            last_petted: now,
            last_played: now,
            is_adopted: false,
            adopted_at: None,
        }
    }
}

/// Inventory item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Food,
    Toy,
    Cosmetic,
    Cleaning,
}

/// An owned item stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: ItemCategory,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<StatEffect>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<u64>,
    pub progress: u32,
    pub max_progress: u32,
}

/// Complete game state (the save snapshot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub pet: Pet,
    pub currency: u32,
    /// Preserved but not used by any rule
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    /// Preserved but not used by any rule
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    pub game_started: u64,
    pub last_save: u64,
}

impl GameState {
    /// Create a new game for a freshly named pet
    pub fn new(pet_name: impl Into<String>, now: u64) -> Self {
        Self {
            pet: Pet::new(pet_name, now),
            currency: STARTING_CURRENCY,
            inventory: Vec::new(),
            achievements: Vec::new(),
            game_started: now,
            last_save: now,
        }
    }
}
