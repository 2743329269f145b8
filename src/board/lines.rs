//! Win-line detection shared by the grid games
//!
//! A board is a row-major slice of optional marks. A win is `run` equal marks
//! in a row, column or either diagonal. Lines are scanned direction by
//! direction (rows, columns, down-right, up-right), each in row-major order,
//! so the first reported line is stable.

use serde::{Deserialize, Serialize};

/// Result of evaluating a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<P> {
    InProgress,
    /// `line` holds the cell indices of the winning run
    Won { player: P, line: Vec<usize> },
    Draw,
}

impl<P> Outcome<P> {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Board dimensions plus the run length needed to win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    pub width: usize,
    pub height: usize,
    pub run: usize,
}

/// (row step, column step)
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

impl LineShape {
    pub const fn new(width: usize, height: usize, run: usize) -> Self {
        Self { width, height, run }
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell indices of the run starting at (row, col), if it fits on the board
    fn run_from(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<Vec<usize>> {
        let last = self.run as isize - 1;
        let end_row = row as isize + dr * last;
        let end_col = col as isize + dc * last;
        if end_row < 0
            || end_row >= self.height as isize
            || end_col < 0
            || end_col >= self.width as isize
        {
            return None;
        }
        Some(
            (0..self.run as isize)
                .map(|i| {
                    let r = (row as isize + dr * i) as usize;
                    let c = (col as isize + dc * i) as usize;
                    r * self.width + c
                })
                .collect(),
        )
    }

    /// First winning run on the board
    pub fn find_line<P: Copy + PartialEq>(&self, cells: &[Option<P>]) -> Option<(P, Vec<usize>)> {
        debug_assert_eq!(cells.len(), self.len());
        if self.run == 0 {
            return None;
        }
        for direction in DIRECTIONS {
            for row in 0..self.height {
                for col in 0..self.width {
                    let Some(line) = self.run_from(row, col, direction) else {
                        continue;
                    };
                    let Some(player) = cells[line[0]] else {
                        continue;
                    };
                    if line.iter().all(|&i| cells[i] == Some(player)) {
                        return Some((player, line));
                    }
                }
            }
        }
        None
    }

    /// Winner, draw (full board, no winner) or still in progress
    pub fn evaluate<P: Copy + PartialEq>(&self, cells: &[Option<P>]) -> Outcome<P> {
        if let Some((player, line)) = self.find_line(cells) {
            Outcome::Won { player, line }
        } else if cells.iter().all(Option::is_some) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}
