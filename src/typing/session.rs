//! Typing challenge session
//!
//! `Waiting -> Playing -> Finished`. The countdown is driven by `tick`, which
//! the host calls once per second; reaching zero finishes the session and no
//! further input is accepted. Dropping a session discards its counters.

use serde::{Deserialize, Serialize};

use super::score::{self, TypingResult};
use super::words::WordSource;
use crate::consts::{GAME_DURATION_SECS, INITIAL_WORD_COUNT, WORD_LOW_WATER, WORD_REFILL_COUNT};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypingPhase {
    /// Instructions shown, waiting for start
    Waiting,
    /// Countdown running, input accepted
    Playing,
    /// Time's up
    Finished,
}

/// One run of the typing challenge
#[derive(Debug)]
pub struct TypingSession<W> {
    source: W,
    phase: TypingPhase,
    words: Vec<String>,
    time_left: u32,
    /// Committed text, each word followed by a space
    typed: String,
    /// Word currently being typed
    input: String,
    correct_chars: u32,
    total_chars: u32,
    words_completed: usize,
    started_at: Option<u64>,
    ended_at: Option<u64>,
    result: Option<TypingResult>,
}

impl<W: WordSource> TypingSession<W> {
    pub fn new(source: W) -> Self {
        let mut session = Self {
            source,
            phase: TypingPhase::Waiting,
            words: Vec::with_capacity(INITIAL_WORD_COUNT + WORD_REFILL_COUNT),
            time_left: GAME_DURATION_SECS,
            typed: String::new(),
            input: String::new(),
            correct_chars: 0,
            total_chars: 0,
            words_completed: 0,
            started_at: None,
            ended_at: None,
            result: None,
        };
        session.push_words(INITIAL_WORD_COUNT);
        session
    }

    fn push_words(&mut self, count: usize) {
        for _ in 0..count {
            let word = self.source.next_word();
            self.words.push(word);
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Seconds left on the countdown
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Full word buffer (completed and upcoming)
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words not yet typed
    pub fn upcoming(&self) -> &[String] {
        &self.words[self.words_completed.min(self.words.len())..]
    }

    /// Word the player is expected to type next
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.words_completed).map(String::as_str)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Committed text plus the word in progress
    pub fn typed_text(&self) -> String {
        format!("{}{}", self.typed, self.input)
    }

    pub fn words_completed(&self) -> usize {
        self.words_completed
    }

    pub fn correct_chars(&self) -> u32 {
        self.correct_chars
    }

    pub fn total_chars(&self) -> u32 {
        self.total_chars
    }

    /// Final numbers, once finished
    pub fn result(&self) -> Option<&TypingResult> {
        self.result.as_ref()
    }

    fn typed_char_count(&self) -> usize {
        self.typed.chars().count() + self.input.chars().count()
    }

    /// Start the countdown. Only valid while waiting.
    pub fn start(&mut self, now: u64) -> bool {
        if self.phase != TypingPhase::Waiting {
            return false;
        }
        self.phase = TypingPhase::Playing;
        self.time_left = GAME_DURATION_SECS;
        self.typed.clear();
        self.input.clear();
        self.correct_chars = 0;
        self.total_chars = 0;
        self.words_completed = 0;
        self.started_at = Some(now);
        self.ended_at = None;
        self.result = None;
        log::info!("Typing challenge started ({}s)", GAME_DURATION_SECS);
        true
    }

    /// Feed one keystroke. Whitespace completes the current word.
    pub fn type_char(&mut self, c: char) {
        if self.phase != TypingPhase::Playing {
            return;
        }
        if c.is_whitespace() {
            self.complete_word();
        } else {
            self.input.push(c);
        }
    }

    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.type_char(c);
        }
    }

    /// Delete the last character of the word in progress
    pub fn backspace(&mut self) {
        if self.phase == TypingPhase::Playing {
            self.input.pop();
        }
    }

    fn complete_word(&mut self) {
        // A boundary with nothing typed is not a word
        if self.input.is_empty() {
            return;
        }
        let Some(expected) = self.words.get(self.words_completed) else {
            return;
        };

        self.correct_chars += score::score_word(&self.input, expected);
        self.total_chars += self.input.chars().count() as u32;
        self.words_completed += 1;

        self.typed.push_str(&self.input);
        self.typed.push(' ');
        self.input.clear();

        if self.words.len() - self.words_completed < WORD_LOW_WATER {
            self.push_words(WORD_REFILL_COUNT);
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true on the tick that finishes the session. Outside of
    /// `Playing` this does nothing.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.phase != TypingPhase::Playing {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.finish(now);
            return true;
        }
        false
    }

    fn finish(&mut self, now: u64) {
        self.phase = TypingPhase::Finished;
        self.ended_at = Some(now);

        // Time-triggered finish: elapsed is the full challenge length
        let result = TypingResult::new(
            self.typed_char_count(),
            self.correct_chars,
            self.total_chars,
            self.words_completed as u32,
            GAME_DURATION_SECS,
        );
        log::info!(
            "Typing challenge finished: {} WPM, {}% accuracy, {} tier",
            result.wpm,
            result.accuracy,
            result.tier.as_str()
        );
        self.result = Some(result);
    }

    /// Speed so far, from wall-clock time since start
    pub fn live_wpm(&self, now: u64) -> u32 {
        let Some(started) = self.started_at else {
            return 0;
        };
        let end = self.ended_at.unwrap_or(now);
        let elapsed = end.saturating_sub(started) as f64 / 1000.0;
        score::words_per_minute(self.typed_char_count(), elapsed)
    }

    /// Accuracy over completed words so far
    pub fn live_accuracy(&self) -> u32 {
        score::accuracy(self.correct_chars, self.total_chars)
    }

    /// Throw away progress and go back to `Waiting` with fresh words
    pub fn reset(&mut self) {
        self.phase = TypingPhase::Waiting;
        self.time_left = GAME_DURATION_SECS;
        self.typed.clear();
        self.input.clear();
        self.correct_chars = 0;
        self.total_chars = 0;
        self.words_completed = 0;
        self.started_at = None;
        self.ended_at = None;
        self.result = None;
        self.words.clear();
        self.push_words(INITIAL_WORD_COUNT);
    }
}
