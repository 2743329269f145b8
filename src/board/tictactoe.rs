//! Tic-Tac-Toe on a 3x3 board, X moves first

use serde::{Deserialize, Serialize};

use super::lines::{LineShape, Outcome};
use crate::error::GameError;

const SHAPE: LineShape = LineShape::new(3, 3, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    /// Row-major cells
    pub cells: [Option<Mark>; 9],
    /// Whose turn it is
    pub next: Mark,
    pub outcome: Outcome<Mark>,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            next: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Place the current player's mark. Returns `Ok(false)` when the move is
    /// ignored (occupied cell or finished game).
    pub fn play(&mut self, index: usize) -> Result<bool, GameError> {
        if index >= self.cells.len() {
            return Err(GameError::OutOfBounds {
                index,
                len: self.cells.len(),
            });
        }
        if self.outcome.is_over() || self.cells[index].is_some() {
            return Ok(false);
        }

        self.cells[index] = Some(self.next);
        self.outcome = SHAPE.evaluate(&self.cells);
        match &self.outcome {
            Outcome::Won { player, line } => {
                log::info!("Tic-Tac-Toe: {:?} wins on {:?}", player, line);
            }
            Outcome::Draw => log::info!("Tic-Tac-Toe: draw"),
            Outcome::InProgress => self.next = self.next.other(),
        }
        Ok(true)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.outcome {
            Outcome::Won { player, .. } => Some(player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&[usize]> {
        match &self.outcome {
            Outcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }

    /// Status line shown above the board
    pub fn status(&self) -> String {
        match &self.outcome {
            Outcome::Won { player, .. } => format!("Winner: {}", player.as_char()),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.next.as_char()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
