//! Connect Four: 6 rows by 7 columns, discs fall to the lowest empty cell

use serde::{Deserialize, Serialize};

use super::lines::{LineShape, Outcome};
use crate::error::GameError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
const SHAPE: LineShape = LineShape::new(COLS, ROWS, 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    One,
    Two,
}

impl Disc {
    pub fn other(self) -> Self {
        match self {
            Disc::One => Disc::Two,
            Disc::Two => Disc::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Disc::One => 1,
            Disc::Two => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFour {
    /// Row-major, row 0 at the top
    pub cells: Vec<Option<Disc>>,
    pub next: Disc,
    pub outcome: Outcome<Disc>,
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectFour {
    pub fn new() -> Self {
        Self {
            cells: vec![None; ROWS * COLS],
            next: Disc::One,
            outcome: Outcome::InProgress,
        }
    }

    /// Disc at a cell; `None` when empty or off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Disc> {
        if row >= ROWS || col >= COLS {
            return None;
        }
        self.cells.get(row * COLS + col).copied().flatten()
    }

    /// Lowest empty row in a column
    fn landing_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cell(row, col).is_none())
    }

    /// Drop the current player's disc. Returns the row it landed in, or
    /// `None` when the column is full or the game is over.
    pub fn drop_disc(&mut self, col: usize) -> Result<Option<usize>, GameError> {
        if col >= COLS {
            return Err(GameError::OutOfBounds {
                index: col,
                len: COLS,
            });
        }
        if self.outcome.is_over() {
            return Ok(None);
        }
        let Some(row) = self.landing_row(col) else {
            log::debug!("Column {} is full", col);
            return Ok(None);
        };

        self.cells[row * COLS + col] = Some(self.next);
        self.outcome = SHAPE.evaluate(&self.cells);
        match &self.outcome {
            Outcome::Won { player, .. } => {
                log::info!("Connect Four: player {} wins", player.number());
            }
            Outcome::Draw => log::info!("Connect Four: draw"),
            Outcome::InProgress => self.next = self.next.other(),
        }
        Ok(Some(row))
    }

    pub fn winner(&self) -> Option<Disc> {
        match self.outcome {
            Outcome::Won { player, .. } => Some(player),
            _ => None,
        }
    }

    /// Cells of the winning four, for highlighting
    pub fn winning_cells(&self) -> &[usize] {
        match &self.outcome {
            Outcome::Won { line, .. } => line,
            _ => &[],
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
