//! Word Scramble: unscramble the shuffled letters

use serde::Serialize;

use super::hint::Hints;
use super::source::WordSource;
use crate::error::GameError;

/// Pause before the host calls `next_word` after a solve or skip
pub const NEXT_WORD_DELAY_MS: u32 = 1500;

#[derive(Debug, Serialize)]
pub struct WordScramble {
    #[serde(skip)]
    word: String,
    pub scrambled: String,
    pub score: u32,
    /// Feedback for the last action, empty at the start of a word
    pub message: String,
    /// Solved or skipped; waiting for `next_word`
    pub round_over: bool,
    #[serde(skip)]
    source: WordSource,
    #[serde(skip)]
    hints: Hints,
}

impl WordScramble {
    pub fn new(source: WordSource, hints: Hints) -> Self {
        let mut game = Self {
            word: String::new(),
            scrambled: String::new(),
            score: 0,
            message: String::new(),
            round_over: false,
            source,
            hints,
        };
        game.next_word();
        game
    }

    pub fn next_word(&mut self) {
        self.word = self.source.pick();
        self.scrambled = self.source.scramble(&self.word);
        self.message.clear();
        self.round_over = false;
        self.hints.new_round();
        log::debug!("Word Scramble: {}", self.scrambled);
    }

    /// Check a guess, case-insensitively. Returns whether it was right.
    pub fn guess(&mut self, guess: &str) -> Result<bool, GameError> {
        if self.round_over {
            return Err(GameError::RoundOver);
        }
        let correct = guess.trim().to_lowercase() == self.word.to_lowercase();
        if correct {
            self.score += 1;
            self.round_over = true;
            self.message = "Correct! Well done!".to_string();
            log::info!("Word Scramble solved, score {}", self.score);
        } else {
            self.message = "Incorrect. Try again!".to_string();
        }
        Ok(correct)
    }

    /// Give up on this word and show it
    pub fn skip(&mut self) -> &str {
        self.round_over = true;
        self.message = format!("The word was \"{}\".", self.word);
        &self.message
    }

    pub fn hint(&mut self) -> String {
        self.hints.message(&self.word)
    }
}
