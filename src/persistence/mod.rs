//! Save/load persistence
//!
//! Features:
//! - Single JSON slot in a key-value store (LocalStorage on web)
//! - Failures are logged and reported as `false`/`None`, never raised
//! - Loads and imports are validated; a snapshot that breaks the state
//!   invariants is treated like a corrupt one

pub mod store;

use thiserror::Error;

use crate::consts::{MAX_STAT, SAVE_KEY};
use crate::sim::GameState;

pub use store::{KeyValueStore, MemoryStore, StoreError};
#[cfg(target_arch = "wasm32")]
pub use store::LocalStorage;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("could not serialize game: {0}")]
    Serialize(serde_json::Error),
    #[error("corrupt save data: {0}")]
    Deserialize(serde_json::Error),
    #[error("invalid save data: {0}")]
    Invalid(String),
}

/// Reject snapshots that break the state invariants
pub fn validate(state: &GameState, max_stat: u8) -> Result<(), PersistenceError> {
    if !state.pet.stats.within(max_stat) {
        return Err(PersistenceError::Invalid(format!(
            "pet stats exceed maximum of {max_stat}"
        )));
    }
    if state.pet.adopted_at.is_some() && !state.pet.is_adopted {
        return Err(PersistenceError::Invalid(
            "adoptedAt set on a pet that is not adopted".to_string(),
        ));
    }
    Ok(())
}

/// Reads and writes the game snapshot
#[derive(Debug)]
pub struct SaveGateway<S> {
    store: S,
    key: String,
    max_stat: u8,
}

impl<S: KeyValueStore> SaveGateway<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            max_stat: MAX_STAT,
        }
    }

    /// Stat ceiling used to validate loaded and imported snapshots
    pub fn with_max_stat(mut self, max_stat: u8) -> Self {
        self.max_stat = max_stat;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn try_save(&mut self, state: &GameState, now: u64) -> Result<(), PersistenceError> {
        let mut snapshot = state.clone();
        snapshot.last_save = now;
        let json = serde_json::to_string(&snapshot).map_err(PersistenceError::Serialize)?;
        self.store.set_item(&self.key, &json)?;
        Ok(())
    }

    fn try_load(&self) -> Result<Option<GameState>, PersistenceError> {
        let Some(json) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        let state: GameState =
            serde_json::from_str(&json).map_err(PersistenceError::Deserialize)?;
        validate(&state, self.max_stat)?;
        Ok(Some(state))
    }

    /// Write the snapshot with `lastSave` refreshed to `now`
    pub fn save(&mut self, state: &GameState, now: u64) -> bool {
        match self.try_save(state, now) {
            Ok(()) => {
                log::debug!("Game saved ({} coins)", state.currency);
                true
            }
            Err(e) => {
                log::error!("Failed to save game state: {e}");
                false
            }
        }
    }

    /// Read the snapshot; `None` if there is none, it is unreadable, or it
    /// fails validation
    pub fn load(&self) -> Option<GameState> {
        match self.try_load() {
            Ok(Some(state)) => {
                log::info!("Loaded saved game for {}", state.pet.name);
                Some(state)
            }
            Ok(None) => {
                log::info!("No saved game found");
                None
            }
            Err(e) => {
                log::error!("Failed to load game state: {e}");
                None
            }
        }
    }

    pub fn clear(&mut self) -> bool {
        match self.store.remove_item(&self.key) {
            Ok(()) => {
                log::info!("Saved game cleared");
                true
            }
            Err(e) => {
                log::error!("Failed to clear game state: {e}");
                false
            }
        }
    }

    /// Pretty-printed copy of the stored snapshot
    pub fn export(&self) -> Option<String> {
        let state = self.load()?;
        match serde_json::to_string_pretty(&state) {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("Failed to export game state: {e}");
                None
            }
        }
    }

    fn try_import(&mut self, text: &str, now: u64) -> Result<GameState, PersistenceError> {
        let state: GameState =
            serde_json::from_str(text).map_err(PersistenceError::Deserialize)?;
        validate(&state, self.max_stat)?;
        self.try_save(&state, now)?;
        Ok(state)
    }

    /// Parse, validate, and store an exported snapshot.
    ///
    /// On any failure the stored save is left as it was.
    pub fn import(&mut self, text: &str, now: u64) -> Option<GameState> {
        match self.try_import(text, now) {
            Ok(state) => {
                log::info!("Imported saved game for {}", state.pet.name);
                Some(state)
            }
            Err(e) => {
                log::warn!("Failed to import game state: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Achievement, InventoryItem, ItemCategory, StatEffect};

    fn sample_state() -> GameState {
        let mut state = GameState::new("Mochi", 1_000);
        state.currency = 42;
        state.pet.stats.hunger = 60;
        state.inventory.push(InventoryItem {
            id: "premium_food".into(),
            name: "Premium Food".into(),
            category: ItemCategory::Food,
            quantity: 3,
            effect: Some(StatEffect {
                hunger: Some(40),
                happiness: Some(5),
                affection: None,
            }),
        });
        state.achievements.push(Achievement {
            id: "first_feed".into(),
            name: "First Meal".into(),
            description: "Feed your pet".into(),
            completed: false,
            completed_at: None,
            progress: 0,
            max_progress: 1,
        });
        state
    }

    #[test]
    fn test_round_trip_refreshes_last_save() {
        let mut gateway = SaveGateway::new(MemoryStore::new());
        let state = sample_state();
        assert!(gateway.save(&state, 9_999));

        let loaded = gateway.load().unwrap();
        assert_eq!(loaded.last_save, 9_999);
        assert_eq!(
            GameState {
                last_save: state.last_save,
                ..loaded
            },
            state
        );
    }

    #[test]
    fn test_load_missing_and_corrupt() {
        let mut gateway = SaveGateway::new(MemoryStore::new());
        assert!(gateway.load().is_none());

        gateway
            .store_mut()
            .set_item(SAVE_KEY, "{\"pet\": oops")
            .unwrap();
        assert!(gateway.load().is_none());
        assert!(gateway.export().is_none());
    }

    #[test]
    fn test_load_rejects_invalid_snapshot() {
        let mut gateway = SaveGateway::new(MemoryStore::new());
        let mut over = sample_state();
        over.pet.stats.happiness = 250;
        let json = serde_json::to_string(&over).unwrap();
        gateway.store_mut().set_item(SAVE_KEY, &json).unwrap();
        assert!(gateway.load().is_none());
        assert!(gateway.export().is_none());

        let mut early = sample_state();
        early.pet.adopted_at = Some(5);
        let json = serde_json::to_string(&early).unwrap();
        gateway.store_mut().set_item(SAVE_KEY, &json).unwrap();
        assert!(gateway.load().is_none());
    }

    #[test]
    fn test_max_stat_follows_config() {
        let mut gateway = SaveGateway::new(MemoryStore::new()).with_max_stat(50);
        // hunger 60 is over a ceiling of 50
        gateway.save(&sample_state(), 1);
        assert!(gateway.load().is_none());

        let mut low = sample_state();
        low.pet.stats.hunger = 50;
        gateway.save(&low, 2);
        assert_eq!(gateway.load().unwrap().pet.stats.hunger, 50);
    }

    #[test]
    fn test_save_failure_reports_false() {
        let mut gateway = SaveGateway::new(MemoryStore::unavailable());
        assert!(!gateway.save(&sample_state(), 1));
        assert!(gateway.load().is_none());
        assert!(!gateway.clear());
    }

    #[test]
    fn test_quota_exceeded() {
        let mut gateway = SaveGateway::new(MemoryStore::with_quota(16));
        assert!(!gateway.save(&sample_state(), 1));
    }

    #[test]
    fn test_clear() {
        let mut gateway = SaveGateway::new(MemoryStore::new());
        gateway.save(&sample_state(), 1);
        assert!(gateway.clear());
        assert!(gateway.load().is_none());
        // Clearing an empty slot is fine
        assert!(gateway.clear());
    }

    #[test]
    fn test_export_import() {
        let mut gateway = SaveGateway::new(MemoryStore::new());
        assert!(gateway.export().is_none());

        gateway.save(&sample_state(), 5);
        let text = gateway.export().unwrap();
        assert!(text.contains('\n'), "export should be pretty-printed");

        let mut other = SaveGateway::new(MemoryStore::new());
        let imported = other.import(&text, 6).unwrap();
        assert_eq!(imported.inventory, sample_state().inventory);
        assert_eq!(other.load().unwrap().last_save, 6);
    }

    #[test]
    fn test_malformed_import_keeps_existing_save() {
        let mut gateway = SaveGateway::new(MemoryStore::new());
        gateway.save(&sample_state(), 5);

        assert!(gateway.import("not json", 6).is_none());

        let mut bad = sample_state();
        bad.pet.stats.affection = 101;
        let text = serde_json::to_string(&bad).unwrap();
        assert!(gateway.import(&text, 7).is_none());

        let kept = gateway.load().unwrap();
        assert_eq!(kept.last_save, 5);
        assert_eq!(kept.pet.stats.affection, 0);
    }

    #[test]
    fn test_custom_key() {
        let mut gateway = SaveGateway::with_key(MemoryStore::new(), "slot2");
        gateway.save(&sample_state(), 1);
        assert!(gateway.store().get_item("slot2").unwrap().is_some());
        assert!(gateway.store().get_item(SAVE_KEY).unwrap().is_none());
    }

    mod props {
        use crate::persistence::{MemoryStore, SaveGateway};
        use crate::sim::{
            Achievement, GameState, InventoryItem, ItemCategory, Pet, PetStats, StatEffect,
        };
        use proptest::option;
        use proptest::prelude::*;

        fn arb_effect() -> impl Strategy<Value = StatEffect> {
            (
                option::of(-100i32..=100),
                option::of(-100i32..=100),
                option::of(-100i32..=100),
            )
                .prop_map(|(happiness, affection, hunger)| StatEffect {
                    happiness,
                    affection,
                    hunger,
                })
        }

        fn arb_item() -> impl Strategy<Value = InventoryItem> {
            (
                "[a-z_]{1,12}",
                "[A-Za-z ]{1,16}",
                prop_oneof![
                    Just(ItemCategory::Food),
                    Just(ItemCategory::Toy),
                    Just(ItemCategory::Cosmetic),
                    Just(ItemCategory::Cleaning),
                ],
                0u32..100,
                option::of(arb_effect()),
            )
                .prop_map(|(id, name, category, quantity, effect)| InventoryItem {
                    id,
                    name,
                    category,
                    quantity,
                    effect,
                })
        }

        fn arb_achievement() -> impl Strategy<Value = Achievement> {
            (
                "[a-z_]{1,12}",
                "[A-Za-z ]{1,16}",
                ".{0,24}",
                option::of(0u64..2_000_000_000_000),
                0u32..10,
                1u32..10,
            )
                .prop_map(
                    |(id, name, description, completed_at, progress, max_progress)| Achievement {
                        id,
                        name,
                        description,
                        completed: completed_at.is_some(),
                        completed_at,
                        progress,
                        max_progress,
                    },
                )
        }

        fn arb_pet() -> impl Strategy<Value = Pet> {
            (
                ".{1,16}",
                (0u8..=100, 0u8..=100, 0u8..=100),
                (0u64..2_000_000_000_000, 0u64..2_000_000_000_000, 0u64..2_000_000_000_000),
                option::of(0u64..2_000_000_000_000),
            )
                .prop_map(|(name, (happiness, affection, hunger), (fed, petted, played), adopted_at)| {
                    Pet {
                        name,
                        stats: PetStats {
                            happiness,
                            affection,
                            hunger,
                        },
                        last_fed: fed,
                        last_petted: petted,
                        last_played: played,
                        is_adopted: adopted_at.is_some(),
                        adopted_at,
                    }
                })
        }

        fn arb_state() -> impl Strategy<Value = GameState> {
            (
                arb_pet(),
                any::<u32>(),
                prop::collection::vec(arb_item(), 0..4),
                prop::collection::vec(arb_achievement(), 0..4),
                0u64..2_000_000_000_000,
                0u64..2_000_000_000_000,
            )
                .prop_map(
                    |(pet, currency, inventory, achievements, game_started, last_save)| GameState {
                        pet,
                        currency,
                        inventory,
                        achievements,
                        game_started,
                        last_save,
                    },
                )
        }

        proptest! {
            #[test]
            fn prop_save_then_load_keeps_all_but_last_save(
                state in arb_state(),
                now in 0u64..2_000_000_000_000,
            ) {
                let mut gateway = SaveGateway::new(MemoryStore::new());
                prop_assert!(gateway.save(&state, now));
                let loaded = gateway.load().unwrap();
                prop_assert_eq!(loaded, GameState { last_save: now, ..state });
            }

            #[test]
            fn prop_export_import_keeps_all_but_last_save(
                state in arb_state(),
                now in 0u64..2_000_000_000_000,
            ) {
                let mut gateway = SaveGateway::new(MemoryStore::new());
                gateway.save(&state, 1);
                let text = gateway.export().unwrap();

                let mut other = SaveGateway::new(MemoryStore::new());
                let imported = other.import(&text, now).unwrap();
                prop_assert_eq!(&imported, &GameState { last_save: 1, ..state.clone() });
                prop_assert_eq!(other.load().unwrap(), GameState { last_save: now, ..state });
            }
        }
    }
}
