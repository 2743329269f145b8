//! Number Guesser: find the secret between 1 and 100

use std::fmt;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::error::GameError;
use crate::seeded_rng;

pub const MIN_SECRET: i64 = 1;
pub const MAX_SECRET: i64 = 100;
pub const PROMPT: &str = "Guess a number between 1 and 100!";

/// Answer to one valid guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuessFeedback {
    /// Secret is higher than the guess
    Higher,
    /// Secret is lower than the guess
    Lower,
    Correct { attempts: u32, secret: i64 },
}

impl fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessFeedback::Higher => write!(f, "Too low! Guess higher."),
            GuessFeedback::Lower => write!(f, "Too high! Guess lower."),
            GuessFeedback::Correct { attempts, secret } => write!(
                f,
                "You got it in {} attempts! The number was {}.",
                attempts, secret
            ),
        }
    }
}

/// Leading integer of `text`: optional whitespace, optional sign, digits.
/// Trailing garbage is ignored ("42abc" is 42).
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add((d - b'0') as i64));
    Some(if negative { -value } else { value })
}

#[derive(Debug, Clone, Serialize)]
pub struct NumberGuesser {
    #[serde(skip)]
    secret: i64,
    pub attempts: u32,
    pub won: bool,
    /// Message shown above the input
    pub message: String,
    #[serde(skip)]
    rng: Pcg32,
}

impl NumberGuesser {
    pub fn new(seed: u64) -> Self {
        let mut game = Self::with_secret(0);
        game.rng = seeded_rng(seed);
        game.new_round();
        game
    }

    /// Fixed secret, for scripted play
    pub fn with_secret(secret: i64) -> Self {
        Self {
            secret,
            attempts: 0,
            won: false,
            message: PROMPT.to_string(),
            rng: seeded_rng(0),
        }
    }

    pub fn new_round(&mut self) {
        self.secret = self.rng.random_range(MIN_SECRET..=MAX_SECRET);
        self.attempts = 0;
        self.won = false;
        self.message = PROMPT.to_string();
        log::info!("Number Guesser: new secret picked");
    }

    /// Rejects non-numeric text with no state change, and any guess after the win
    pub fn guess(&mut self, text: &str) -> Result<GuessFeedback, GameError> {
        if self.won {
            return Err(GameError::RoundOver);
        }
        let Some(value) = parse_leading_int(text) else {
            self.message = "Please enter a valid number.".to_string();
            return Err(GameError::InvalidInput(self.message.clone()));
        };

        self.attempts += 1;
        let feedback = if value == self.secret {
            self.won = true;
            log::info!("Number Guesser solved in {} attempts", self.attempts);
            GuessFeedback::Correct {
                attempts: self.attempts,
                secret: self.secret,
            }
        } else if value < self.secret {
            GuessFeedback::Higher
        } else {
            GuessFeedback::Lower
        };
        self.message = feedback.to_string();
        Ok(feedback)
    }
}
