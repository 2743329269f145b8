//! Seedable source of target words for Hangman and Word Scramble

use rand::Rng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use crate::error::GameError;
use crate::seeded_rng;

/// Built-in word list: lowercase, letters only
pub const DEFAULT_WORDS: &[&str] = &[
    "apple", "bridge", "castle", "dragon", "engine", "forest", "garden", "harbor", "island",
    "jungle", "kitten", "ladder", "magnet", "needle", "orange", "pirate", "quartz", "rocket",
    "silver", "tunnel", "violin", "window", "yellow", "zipper", "anchor", "breeze", "candle",
    "desert", "falcon", "glacier", "helmet", "lantern", "meadow", "puzzle", "rabbit", "saddle",
    "thunder", "velvet", "walnut", "compass", "blanket", "mirror", "planet", "shadow", "spider",
];

#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<String>,
    rng: Pcg32,
}

impl WordSource {
    pub fn new(seed: u64) -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            rng: seeded_rng(seed),
        }
    }

    /// Custom list. Words are lowercased; entries with non-letters are dropped.
    pub fn with_words<I, S>(seed: u64, words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .collect();
        if words.is_empty() {
            return Err(GameError::InvalidInput(
                "word list has no usable words".to_string(),
            ));
        }
        Ok(Self {
            words,
            rng: seeded_rng(seed),
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Uniformly random word from the list
    pub fn pick(&mut self) -> String {
        let i = self.rng.random_range(0..self.words.len());
        self.words[i].clone()
    }

    /// Letters of `word` in Fisher-Yates shuffled order
    pub fn scramble(&mut self, word: &str) -> String {
        let mut letters: Vec<char> = word.chars().collect();
        letters.shuffle(&mut self.rng);
        letters.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_is_clean() {
        for word in DEFAULT_WORDS {
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{}", word);
        }
    }

    #[test]
    fn test_same_seed_same_words() {
        let mut a = WordSource::new(17);
        let mut b = WordSource::new(17);
        for _ in 0..20 {
            assert_eq!(a.pick(), b.pick());
        }
    }

    #[test]
    fn test_scramble_keeps_letters() {
        let mut source = WordSource::new(3);
        let mut scrambled: Vec<char> = source.scramble("lantern").chars().collect();
        scrambled.sort_unstable();
        let mut original: Vec<char> = "lantern".chars().collect();
        original.sort_unstable();
        assert_eq!(scrambled, original);
    }

    #[test]
    fn test_custom_list_filters() {
        let source = WordSource::with_words(1, ["Ocean", "two words", "", "x1"]).unwrap();
        assert_eq!(source.len(), 1);
        assert!(WordSource::with_words(1, Vec::<String>::new()).is_err());
    }
}
