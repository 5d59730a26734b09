//! Game session
//!
//! Owns the live `GameState` and is the only thing that mutates it. Each
//! action runs through `sim::reduce`; a successful transition replaces the
//! state and is then saved. Save failures are logged and play continues on
//! the in-memory state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::persistence::{KeyValueStore, SaveGateway};
use crate::platform;
use crate::sim::{self, Action, ActionError, GameState};
use crate::typing::{SampledWords, TypingSession, WordSource};

/// Typing session backed by the built-in word list
pub type WordGame = TypingSession<SampledWords<Pcg32>>;

pub struct Game<S> {
    state: Option<GameState>,
    config: GameConfig,
    saves: SaveGateway<S>,
    rng: Pcg32,
    clock: fn() -> u64,
}

impl<S: KeyValueStore> Game<S> {
    pub fn new(config: GameConfig, store: S, seed: u64) -> Self {
        Self {
            state: None,
            saves: SaveGateway::new(store).with_max_stat(config.max_stat_value),
            config,
            rng: Pcg32::seed_from_u64(seed),
            clock: platform::now_ms,
        }
    }

    /// Replace the wall clock (tests, replays)
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    fn now(&self) -> u64 {
        (self.clock)()
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn saves(&self) -> &SaveGateway<S> {
        &self.saves
    }

    /// Pick up the saved game, if any. Returns true if a valid one was found.
    pub fn resume(&mut self) -> bool {
        let Some(mut state) = self.saves.load() else {
            return false;
        };
        let now = self.now();
        state.pet.stats = sim::calculate_stat_decay(&state.pet, now);
        self.saves.save(&state, now);
        self.state = Some(state);
        true
    }

    /// Start over with a new pet
    pub fn create_new_game(&mut self, name: &str) -> &GameState {
        let now = self.now();
        let state = GameState::new(name, now);
        log::info!("New game started with {}", state.pet.name);
        self.saves.save(&state, now);
        self.state.insert(state)
    }

    /// Run an action against the live state and save the result
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let state = self.state.as_ref().ok_or(ActionError::NoGame)?;
        let now = self.now();
        match sim::reduce(state, action, &self.config, now) {
            Ok(next) => {
                self.saves.save(&next, now);
                self.state = Some(next);
                Ok(())
            }
            Err(e) => {
                log::debug!("{action:?} rejected: {e}");
                Err(e)
            }
        }
    }

    pub fn feed_pet_action(&mut self) -> bool {
        self.dispatch(Action::Feed).is_ok()
    }

    pub fn pet_pet_action(&mut self) -> bool {
        self.dispatch(Action::Pet).is_ok()
    }

    pub fn play_with_pet_action(&mut self) {
        let _ = self.dispatch(Action::Play);
    }

    pub fn complete_word_game(&mut self, wpm: u32, accuracy: u32) {
        let _ = self.dispatch(Action::CompleteWordGame { wpm, accuracy });
    }

    pub fn add_currency(&mut self, amount: i64) {
        let _ = self.dispatch(Action::AddCurrency(amount));
    }

    pub fn spend_currency(&mut self, amount: u32) -> bool {
        self.dispatch(Action::SpendCurrency(amount)).is_ok()
    }

    /// Pay the entry fee and hand out a fresh typing session
    pub fn start_minigame(&mut self) -> Option<WordGame> {
        self.dispatch(Action::EnterMinigame).ok()?;
        let words = SampledWords::new(Pcg32::seed_from_u64(self.rng.random()));
        Some(TypingSession::new(words))
    }

    /// Commit a finished typing session. Returns the coins earned.
    ///
    /// A session that has not finished is left untouched and earns nothing.
    pub fn finish_minigame<W: WordSource>(&mut self, session: &TypingSession<W>) -> Option<u32> {
        let result = session.result()?;
        let coins = result.coins(&self.config);
        self.dispatch(Action::CompleteWordGame {
            wpm: result.wpm,
            accuracy: result.accuracy,
        })
        .ok()?;
        Some(coins)
    }

    pub fn get_pet_dialogue(&mut self) -> String {
        match &self.state {
            Some(state) => sim::pet_dialogue(&state.pet, &mut self.rng),
            None => String::new(),
        }
    }

    pub fn is_pet_adopted(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.pet.is_adopted)
    }

    pub fn can_pet_be_adopted(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|s| sim::can_adopt(&s.pet.stats, self.config.max_stat_value))
    }

    /// Save the live state now
    pub fn save(&mut self) -> bool {
        let now = self.now();
        match &self.state {
            Some(state) => self.saves.save(state, now),
            None => false,
        }
    }

    pub fn export_save(&self) -> Option<String> {
        self.saves.export()
    }

    /// Replace the game with an exported snapshot. Bad input changes nothing.
    pub fn import_save(&mut self, text: &str) -> bool {
        let now = self.now();
        match self.saves.import(text, now) {
            Some(state) => {
                self.state = Some(state);
                true
            }
            None => false,
        }
    }

    /// Delete the save and drop the live game (after adoption, or a reset)
    pub fn start_over(&mut self) -> bool {
        self.state = None;
        self.saves.clear()
    }
}
