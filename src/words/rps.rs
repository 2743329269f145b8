//! Rock-Paper-Scissors against a random computer

use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::seeded_rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Some(Choice::Rock),
            "paper" | "p" => Some(Choice::Paper),
            "scissors" | "s" => Some(Choice::Scissors),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Choice::Rock => "✊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundResult {
    Tie,
    PlayerWins,
    ComputerWins,
}

impl RoundResult {
    pub fn message(&self) -> &'static str {
        match self {
            RoundResult::Tie => "It's a tie!",
            RoundResult::PlayerWins => "You win!",
            RoundResult::ComputerWins => "Computer wins!",
        }
    }
}

/// Decide a round
pub fn judge(player: Choice, computer: Choice) -> RoundResult {
    if player == computer {
        RoundResult::Tie
    } else if player.beats(computer) {
        RoundResult::PlayerWins
    } else {
        RoundResult::ComputerWins
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RockPaperScissors {
    pub player_score: u32,
    pub computer_score: u32,
    /// Last (player, computer) choices
    pub last: Option<(Choice, Choice)>,
    #[serde(skip)]
    rng: Pcg32,
}

impl RockPaperScissors {
    pub fn new(seed: u64) -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
            last: None,
            rng: seeded_rng(seed),
        }
    }

    pub fn play(&mut self, choice: Choice) -> RoundResult {
        let computer = *Choice::ALL.choose(&mut self.rng).unwrap_or(&Choice::Rock);
        let result = judge(choice, computer);
        match result {
            RoundResult::PlayerWins => self.player_score += 1,
            RoundResult::ComputerWins => self.computer_score += 1,
            RoundResult::Tie => {}
        }
        self.last = Some((choice, computer));
        log::debug!(
            "{} vs {}: {}",
            choice.as_str(),
            computer.as_str(),
            result.message()
        );
        result
    }

    /// Message for the last round, or the opening prompt
    pub fn message(&self) -> &'static str {
        match self.last {
            Some((player, computer)) => judge(player, computer).message(),
            None => "Make your move!",
        }
    }

    pub fn reset(&mut self) {
        self.player_score = 0;
        self.computer_score = 0;
        self.last = None;
    }
}
