//! Browser bindings
//!
//! `WebGame` exposes the action API to the page. The page renders from
//! `stateJson()` after every call.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::{Game, WordGame};
use crate::persistence::{KeyValueStore, LocalStorage, MemoryStore, StoreError};
use crate::platform;

/// LocalStorage when the browser allows it, memory otherwise
enum WebStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl KeyValueStore for WebStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            WebStore::Local(s) => s.get_item(key),
            WebStore::Memory(s) => s.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            WebStore::Local(s) => s.set_item(key, value),
            WebStore::Memory(s) => s.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        match self {
            WebStore::Local(s) => s.remove_item(key),
            WebStore::Memory(s) => s.remove_item(key),
        }
    }
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Pixel Pet starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<WebStore>,
    minigame: Option<WordGame>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let store = match LocalStorage::open() {
            Ok(local) => WebStore::Local(local),
            Err(e) => {
                log::warn!("LocalStorage unavailable ({e}), progress won't be saved");
                WebStore::Memory(MemoryStore::new())
            }
        };
        let seed = platform::seed_from_clock();
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            game: Game::new(GameConfig::default(), store, seed),
            minigame: None,
        }
    }

    /// Load the saved game; false means show the adoption screen
    pub fn resume(&mut self) -> bool {
        self.game.resume()
    }

    #[wasm_bindgen(js_name = createNewGame)]
    pub fn create_new_game(&mut self, name: &str) {
        self.game.create_new_game(name);
    }

    #[wasm_bindgen(js_name = feedPetAction)]
    pub fn feed_pet_action(&mut self) -> bool {
        self.game.feed_pet_action()
    }

    #[wasm_bindgen(js_name = petPetAction)]
    pub fn pet_pet_action(&mut self) -> bool {
        self.game.pet_pet_action()
    }

    #[wasm_bindgen(js_name = playWithPetAction)]
    pub fn play_with_pet_action(&mut self) {
        self.game.play_with_pet_action();
    }

    #[wasm_bindgen(js_name = completeWordGame)]
    pub fn complete_word_game(&mut self, wpm: u32, accuracy: u32) {
        self.game.complete_word_game(wpm, accuracy);
    }

    #[wasm_bindgen(js_name = addCurrency)]
    pub fn add_currency(&mut self, amount: i32) {
        self.game.add_currency(i64::from(amount));
    }

    #[wasm_bindgen(js_name = spendCurrency)]
    pub fn spend_currency(&mut self, amount: u32) -> bool {
        self.game.spend_currency(amount)
    }

    #[wasm_bindgen(js_name = getPetDialogue)]
    pub fn get_pet_dialogue(&mut self) -> String {
        self.game.get_pet_dialogue()
    }

    #[wasm_bindgen(js_name = isPetAdopted)]
    pub fn is_pet_adopted(&self) -> bool {
        self.game.is_pet_adopted()
    }

    #[wasm_bindgen(js_name = canPetBeAdopted)]
    pub fn can_pet_be_adopted(&self) -> bool {
        self.game.can_pet_be_adopted()
    }

    /// Current state as JSON, or undefined with no game
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Option<String> {
        self.game
            .state()
            .and_then(|s| serde_json::to_string(s).ok())
    }

    #[wasm_bindgen(js_name = exportSave)]
    pub fn export_save(&self) -> Option<String> {
        self.game.export_save()
    }

    #[wasm_bindgen(js_name = importSave)]
    pub fn import_save(&mut self, text: &str) -> bool {
        self.game.import_save(text)
    }

    #[wasm_bindgen(js_name = clearSave)]
    pub fn clear_save(&mut self) -> bool {
        self.minigame = None;
        self.game.start_over()
    }

    /// Open the typing challenge overlay
    #[wasm_bindgen(js_name = openMinigame)]
    pub fn open_minigame(&mut self) -> bool {
        self.minigame = self.game.start_minigame();
        self.minigame.is_some()
    }

    #[wasm_bindgen(js_name = startMinigame)]
    pub fn start_minigame(&mut self) -> bool {
        let now = platform::now_ms();
        self.minigame.as_mut().is_some_and(|m| m.start(now))
    }

    /// Forward the characters typed since the last call
    #[wasm_bindgen(js_name = minigameType)]
    pub fn minigame_type(&mut self, text: &str) {
        if let Some(m) = self.minigame.as_mut() {
            m.type_str(text);
        }
    }

    #[wasm_bindgen(js_name = minigameBackspace)]
    pub fn minigame_backspace(&mut self) {
        if let Some(m) = self.minigame.as_mut() {
            m.backspace();
        }
    }

    /// Call once per second; true when time runs out
    #[wasm_bindgen(js_name = minigameTick)]
    pub fn minigame_tick(&mut self) -> bool {
        let now = platform::now_ms();
        self.minigame.as_mut().is_some_and(|m| m.tick(now))
    }

    #[wasm_bindgen(js_name = minigameTimeLeft)]
    pub fn minigame_time_left(&self) -> u32 {
        self.minigame.as_ref().map_or(0, |m| m.time_left())
    }

    #[wasm_bindgen(js_name = minigameLiveAccuracy)]
    pub fn minigame_live_accuracy(&self) -> u32 {
        self.minigame.as_ref().map_or(100, |m| m.live_accuracy())
    }

    /// The word being typed, for highlighting against the current word
    #[wasm_bindgen(js_name = minigameInput)]
    pub fn minigame_input(&self) -> String {
        self.minigame
            .as_ref()
            .map_or_else(String::new, |m| m.input().to_string())
    }

    #[wasm_bindgen(js_name = minigameLiveWpm)]
    pub fn minigame_live_wpm(&self) -> u32 {
        let now = platform::now_ms();
        self.minigame.as_ref().map_or(0, |m| m.live_wpm(now))
    }

    /// Upcoming words joined by spaces (at most `count`)
    #[wasm_bindgen(js_name = minigameWords)]
    pub fn minigame_words(&self, count: usize) -> String {
        self.minigame.as_ref().map_or_else(String::new, |m| {
            let upcoming = m.upcoming();
            upcoming[..count.min(upcoming.len())].join(" ")
        })
    }

    /// Final numbers with the performance band and its message
    #[wasm_bindgen(js_name = minigameResultJson)]
    pub fn minigame_result_json(&self) -> Option<String> {
        let result = self.minigame.as_ref()?.result()?;
        serde_json::to_string(&result.report()).ok()
    }

    /// Commit a finished challenge and close the overlay. Returns coins earned.
    /// A challenge still in progress stays open.
    #[wasm_bindgen(js_name = finishMinigame)]
    pub fn finish_minigame(&mut self) -> Option<u32> {
        let coins = self.game.finish_minigame(self.minigame.as_ref()?)?;
        self.minigame = None;
        Some(coins)
    }

    /// Close the overlay, discarding any progress
    #[wasm_bindgen(js_name = closeMinigame)]
    pub fn close_minigame(&mut self) {
        if self.minigame.take().is_some() {
            log::info!("Typing challenge closed");
        }
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
