//! Typing scores: speed, accuracy, and how it went

use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, RewardTier};
use crate::consts::CHARS_PER_WORD;

/// Words per minute over `elapsed_secs`, counting five characters as a word
pub fn words_per_minute(typed_chars: usize, elapsed_secs: f64) -> u32 {
    if elapsed_secs <= 0.0 || !elapsed_secs.is_finite() {
        return 0;
    }
    ((60.0 / elapsed_secs) * typed_chars as f64 / CHARS_PER_WORD).round() as u32
}

/// Percentage of correct characters.
///
/// With nothing typed there is nothing wrong, so this reports 100.
pub fn accuracy(correct_chars: u32, total_chars: u32) -> u32 {
    if total_chars == 0 {
        return 100;
    }
    (100.0 * f64::from(correct_chars) / f64::from(total_chars)).round() as u32
}

/// Characters of `typed` that match `expected` at the same position
pub fn score_word(typed: &str, expected: &str) -> u32 {
    typed
        .chars()
        .zip(expected.chars())
        .filter(|(t, e)| t == e)
        .count() as u32
}

/// Feedback band shown after a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    Outstanding,
    Great,
    Good,
    KeepPracticing,
}

impl Performance {
    /// Rate a session. Fast but sloppy (80+ WPM under 90% accuracy) gets no band.
    pub fn rate(wpm: u32, accuracy: u32) -> Option<Self> {
        match wpm {
            80.. if accuracy >= 90 => Some(Performance::Outstanding),
            80.. => None,
            60..80 => Some(Performance::Great),
            40..60 => Some(Performance::Good),
            _ => Some(Performance::KeepPracticing),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Performance::Outstanding => "Outstanding performance! You're a typing master!",
            Performance::Great => "Great typing! You're getting faster!",
            Performance::Good => "Good progress! Keep practicing to improve!",
            Performance::KeepPracticing => "Keep practicing! Your typing will improve with time!",
        }
    }
}

/// Final numbers for a finished session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingResult {
    pub wpm: u32,
    pub accuracy: u32,
    pub words_completed: u32,
    pub correct_chars: u32,
    pub total_chars: u32,
    /// Everything typed, separators included
    pub typed_chars: usize,
    pub elapsed_secs: u32,
    pub tier: RewardTier,
}

impl TypingResult {
    pub fn new(
        typed_chars: usize,
        correct_chars: u32,
        total_chars: u32,
        words_completed: u32,
        elapsed_secs: u32,
    ) -> Self {
        let wpm = words_per_minute(typed_chars, f64::from(elapsed_secs));
        Self {
            wpm,
            accuracy: accuracy(correct_chars, total_chars),
            words_completed,
            correct_chars,
            total_chars,
            typed_chars,
            elapsed_secs,
            tier: RewardTier::for_wpm(wpm),
        }
    }

    /// Coins this result pays out
    pub fn coins(&self, config: &GameConfig) -> u32 {
        config.reward_for(self.tier)
    }

    pub fn performance(&self) -> Option<Performance> {
        Performance::rate(self.wpm, self.accuracy)
    }

    /// The result plus its feedback band, as shown on the results screen
    pub fn report(&self) -> TypingReport<'_> {
        let performance = self.performance();
        TypingReport {
            result: self,
            performance,
            message: performance.map(|p| p.message()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingReport<'a> {
    #[serde(flatten)]
    pub result: &'a TypingResult,
    pub performance: Option<Performance>,
    pub message: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_formula() {
        assert_eq!(words_per_minute(150, 30.0), 60);
        assert_eq!(words_per_minute(175, 30.0), 70);
        assert_eq!(words_per_minute(0, 30.0), 0);
        assert_eq!(words_per_minute(100, 0.0), 0);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(45, 50), 90);
        assert_eq!(accuracy(0, 0), 100);
        assert_eq!(accuracy(0, 10), 0);
        assert_eq!(accuracy(2, 3), 67);
    }

    #[test]
    fn test_score_word_positional() {
        assert_eq!(score_word("kitten", "kitten"), 6);
        assert_eq!(score_word("kiten", "kitten"), 3);
        assert_eq!(score_word("kittens", "kitten"), 6);
        assert_eq!(score_word("", "cat"), 0);
    }

    #[test]
    fn test_performance_bands() {
        assert_eq!(Performance::rate(85, 95), Some(Performance::Outstanding));
        assert_eq!(Performance::rate(85, 80), None);
        assert_eq!(Performance::rate(79, 10), Some(Performance::Great));
        assert_eq!(Performance::rate(60, 100), Some(Performance::Great));
        assert_eq!(Performance::rate(45, 100), Some(Performance::Good));
        assert_eq!(Performance::rate(39, 100), Some(Performance::KeepPracticing));
    }

    #[test]
    fn test_report_carries_feedback() {
        // 250 chars in 30s = 100 WPM
        let clean = TypingResult::new(250, 95, 100, 50, 30);
        let json = serde_json::to_value(clean.report()).unwrap();
        assert_eq!(json["wpm"], 100);
        assert_eq!(json["wordsCompleted"], 50);
        assert_eq!(json["performance"], "Outstanding");
        assert_eq!(
            json["message"],
            "Outstanding performance! You're a typing master!"
        );

        let sloppy = TypingResult::new(250, 50, 100, 50, 30);
        let json = serde_json::to_value(sloppy.report()).unwrap();
        assert!(json["performance"].is_null());
        assert!(json["message"].is_null());
    }

    #[test]
    fn test_result_tier_and_coins() {
        let config = GameConfig::default();
        let slow = TypingResult::new(150, 45, 50, 25, 30);
        assert_eq!(slow.wpm, 60);
        assert_eq!(slow.accuracy, 90);
        assert_eq!(slow.tier, RewardTier::Low);
        assert_eq!(slow.coins(&config), 20);

        let fast = TypingResult::new(175, 140, 140, 35, 30);
        assert_eq!(fast.wpm, 70);
        assert_eq!(fast.coins(&config), 30);
    }
}
