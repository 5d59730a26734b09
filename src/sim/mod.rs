//! Pet state engine
//!
//! All game rules live here. This module must stay pure:
//! - Time is passed in, never read
//! - Randomness is passed in as an `Rng`
//! - No storage, rendering, or platform dependencies

pub mod action;
pub mod dialogue;
pub mod economy;
pub mod lifecycle;
pub mod state;
pub mod stats;

pub use action::{Action, ActionError, reduce};
pub use dialogue::{Mood, band_line, overall_mood, pet_dialogue};
pub use economy::{ActionKind, charge, credit, word_game_reward};
pub use lifecycle::{can_adopt, check_adoption};
pub use state::{Achievement, GameState, InventoryItem, ItemCategory, Pet};
pub use stats::{PetStats, StatEffect, apply_effect, calculate_stat_decay, clamp_stat};
