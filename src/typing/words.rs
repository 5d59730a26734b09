//! Word supply for the typing challenge

use rand::Rng;

/// Built-in challenge vocabulary
pub const WORD_LIST: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for", "not", "on", "with",
    "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
    "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
    "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time",
    "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some",
    "could", "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over",
    "think", "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most", "us", "cat", "dog",
    "pet", "play", "feed", "happy", "treat", "paw", "purr", "nap", "ball", "fluffy", "bowl",
    "snack", "cozy", "kitten", "puppy", "whisker", "tail", "hug", "love", "friend", "home",
];

/// Source of challenge words.
///
/// The session pulls from this whenever it needs more text, so tests can
/// supply a fixed sequence.
pub trait WordSource {
    fn next_word(&mut self) -> String;
}

/// Words sampled uniformly, with replacement, from a fixed list
#[derive(Debug, Clone)]
pub struct SampledWords<R> {
    rng: R,
    list: &'static [&'static str],
}

impl<R: Rng> SampledWords<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            list: WORD_LIST,
        }
    }

    /// Sample from a custom list (`None` if the list is empty)
    pub fn with_list(rng: R, list: &'static [&'static str]) -> Option<Self> {
        if list.is_empty() {
            return None;
        }
        Some(Self { rng, list })
    }
}

impl<R: Rng> WordSource for SampledWords<R> {
    fn next_word(&mut self) -> String {
        self.list[self.rng.random_range(0..self.list.len())].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_samples_from_list() {
        let mut words = SampledWords::new(Pcg32::seed_from_u64(3));
        for _ in 0..500 {
            let w = words.next_word();
            assert!(WORD_LIST.contains(&w.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_words() {
        let mut a = SampledWords::new(Pcg32::seed_from_u64(11));
        let mut b = SampledWords::new(Pcg32::seed_from_u64(11));
        for _ in 0..50 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(SampledWords::with_list(Pcg32::seed_from_u64(0), &[]).is_none());
        let mut one = SampledWords::with_list(Pcg32::seed_from_u64(0), &["meow"]).unwrap();
        assert_eq!(one.next_word(), "meow");
    }

    #[test]
    fn test_vocabulary_has_no_whitespace() {
        assert!(WORD_LIST.iter().all(|w| !w.is_empty() && !w.contains(char::is_whitespace)));
    }
}
