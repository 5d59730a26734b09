//! Pixel Pet - A browser virtual pet
//!
//! Core modules:
//! - `sim`: Pure pet state engine (stats, economy, lifecycle, dialogue, actions)
//! - `typing`: Timed typing minigame that earns currency
//! - `persistence`: Save/load of the game snapshot to a key-value store
//! - `platform`: Browser/native platform abstraction
//! - `config`: Data-driven game balance
//! - `game`: Session orchestrator exposing the action API

pub mod config;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod typing;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{GameConfig, RewardTier};
pub use game::Game;
pub use persistence::{KeyValueStore, MemoryStore, SaveGateway};
pub use sim::{Action, ActionError, GameState, Pet, PetStats, StatEffect};
pub use typing::{TypingPhase, TypingResult, TypingSession};

/// Game configuration constants
pub mod consts {
    /// Upper bound for every pet stat
    pub const MAX_STAT: u8 = 100;
    /// Coins a freshly adopted-to-be pet starts with
    pub const STARTING_CURRENCY: u32 = 10;

    /// Typing challenge length
    pub const GAME_DURATION_SECS: u32 = 30;
    /// Words sampled when a typing session is created
    pub const INITIAL_WORD_COUNT: usize = 200;
    /// Words appended when the buffer runs low
    pub const WORD_REFILL_COUNT: usize = 100;
    /// Refill when fewer than this many words remain unconsumed
    pub const WORD_LOW_WATER: usize = 50;
    /// Standard characters-per-word for WPM
    pub const CHARS_PER_WORD: f64 = 5.0;
    /// Minimum WPM for the high reward tier
    pub const HIGH_TIER_WPM: u32 = 70;

    /// LocalStorage slot for the game save
    pub const SAVE_KEY: &str = "pixelPetGameSave";
}
