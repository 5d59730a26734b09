//! Typing challenge minigame
//!
//! Type as many words as possible in 30 seconds to earn coins.

pub mod score;
pub mod session;
pub mod words;

pub use score::{Performance, TypingReport, TypingResult, accuracy, score_word, words_per_minute};
pub use session::{TypingPhase, TypingSession};
pub use words::{SampledWords, WORD_LIST, WordSource};
