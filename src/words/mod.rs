//! Word and number games
//!
//! Hangman and Word Scramble draw their targets from a seedable `WordSource`
//! and can ask the optional hint service for one clue per round.

pub mod hangman;
pub mod hint;
pub mod number_guesser;
pub mod rps;
pub mod scramble;
pub mod source;
pub mod typing;

pub use hangman::{Hangman, LetterGuess, MAX_WRONG_GUESSES};
pub use hint::{HintProvider, Hints, LetterHints};
pub use number_guesser::{GuessFeedback, NumberGuesser, parse_leading_int};
pub use rps::{Choice, RockPaperScissors, RoundResult};
pub use scramble::WordScramble;
pub use source::WordSource;
pub use typing::{CharMark, PASSAGE, TypingTest};
