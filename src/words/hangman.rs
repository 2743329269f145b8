//! Hangman: guess the word one letter at a time before six misses

use serde::Serialize;

use super::hint::Hints;
use super::source::WordSource;
use crate::error::GameError;
use crate::sim::GamePhase;

pub const MAX_WRONG_GUESSES: u8 = 6;

/// Effect of a letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGuess {
    Hit,
    Miss,
    /// Letter already tried, or the round is over
    Ignored,
}

#[derive(Debug, Serialize)]
pub struct Hangman {
    pub word: String,
    /// Letters tried so far, in order
    pub guessed: Vec<char>,
    pub wrong: u8,
    pub phase: GamePhase,
    #[serde(skip)]
    source: WordSource,
    #[serde(skip)]
    hints: Hints,
}

impl Hangman {
    pub fn new(source: WordSource, hints: Hints) -> Self {
        let mut game = Self {
            word: String::new(),
            guessed: Vec::new(),
            wrong: 0,
            phase: GamePhase::Playing,
            source,
            hints,
        };
        game.new_round();
        game
    }

    /// Pick a fresh word and clear the gallows
    pub fn new_round(&mut self) {
        self.word = self.source.pick();
        self.guessed.clear();
        self.wrong = 0;
        self.phase = GamePhase::Playing;
        self.hints.new_round();
        log::info!("Hangman: new {}-letter word", self.word.len());
    }

    pub fn guess(&mut self, letter: char) -> Result<LetterGuess, GameError> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(GameError::InvalidInput(format!(
                "'{}' is not a letter from a to z.",
                letter
            )));
        }
        if self.phase != GamePhase::Playing || self.guessed.contains(&letter) {
            return Ok(LetterGuess::Ignored);
        }

        self.guessed.push(letter);
        let outcome = if self.word.contains(letter) {
            LetterGuess::Hit
        } else {
            self.wrong += 1;
            LetterGuess::Miss
        };

        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            self.phase = GamePhase::Won;
            log::info!("Hangman won with {} misses", self.wrong);
        } else if self.wrong >= MAX_WRONG_GUESSES {
            self.phase = GamePhase::Lost;
            log::info!("Hangman lost on '{}'", self.word);
        }
        Ok(outcome)
    }

    /// Word with unguessed letters as underscores, space separated
    pub fn masked(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn remaining_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong)
    }

    /// End-of-round banner, if the round is over
    pub fn result_message(&self) -> Option<String> {
        match self.phase {
            GamePhase::Won => Some("You won!".to_string()),
            GamePhase::Lost => Some(format!("You lost! The word was \"{}\".", self.word)),
            _ => None,
        }
    }

    /// This round's clue, or why there is none
    pub fn hint(&mut self) -> String {
        self.hints.message(&self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::hint::LetterHints;

    fn game(word: &str) -> Hangman {
        let source = WordSource::with_words(1, [word]).unwrap();
        Hangman::new(source, Hints::with_provider(Box::new(LetterHints)))
    }

    #[test]
    fn test_win_by_guessing_all_letters() {
        let mut hangman = game("kitten");
        for c in ['k', 'i', 't', 'e'] {
            assert_eq!(hangman.guess(c), Ok(LetterGuess::Hit));
        }
        assert_eq!(hangman.masked(), "k i t t e _");
        assert_eq!(hangman.guess('N'), Ok(LetterGuess::Hit));
        assert_eq!(hangman.phase, GamePhase::Won);
        assert_eq!(hangman.result_message().as_deref(), Some("You won!"));
    }

    #[test]
    fn test_six_misses_lose() {
        let mut hangman = game("kitten");
        for c in ['a', 'b', 'c', 'd', 'f', 'g'] {
            assert_eq!(hangman.guess(c), Ok(LetterGuess::Miss));
        }
        assert_eq!(hangman.phase, GamePhase::Lost);
        assert_eq!(hangman.remaining_guesses(), 0);
        assert_eq!(hangman.guess('k'), Ok(LetterGuess::Ignored));
        assert_eq!(
            hangman.result_message().as_deref(),
            Some("You lost! The word was \"kitten\".")
        );
    }

    #[test]
    fn test_repeat_and_invalid() {
        let mut hangman = game("kitten");
        hangman.guess('z').unwrap();
        assert_eq!(hangman.guess('z'), Ok(LetterGuess::Ignored));
        assert_eq!(hangman.wrong, 1);
        assert!(matches!(hangman.guess('3'), Err(GameError::InvalidInput(_))));
        assert_eq!(hangman.guessed, vec!['z']);
    }

    #[test]
    fn test_new_round_resets_hint() {
        let mut hangman = game("kitten");
        assert!(hangman.hint().starts_with("Hint:"));
        assert_eq!(hangman.hint(), "You already used your hint this round.");
        hangman.new_round();
        assert!(hangman.hint().starts_with("Hint:"));
        assert!(hangman.guessed.is_empty());
    }
}
