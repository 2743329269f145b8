//! Minesweeper
//!
//! Mines are planted on the first reveal and never under the first cell.
//! Revealing a zero cell opens its whole connected zero region plus the
//! numbered cells bordering it.

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::error::GameError;
use crate::seeded_rng;
use crate::sim::GamePhase;

pub const DEFAULT_SIZE: usize = 10;
pub const DEFAULT_MINES: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Mines in the eight surrounding cells
    pub adjacent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Minesweeper {
    pub width: usize,
    pub height: usize,
    pub mine_count: usize,
    /// Row-major
    pub cells: Vec<Cell>,
    pub phase: GamePhase,
    planted: bool,
    revealed: usize,
    #[serde(skip)]
    rng: Pcg32,
}

impl Minesweeper {
    /// Standard 10x10 board with 10 mines
    pub fn new(seed: u64) -> Self {
        Self::with_size(seed, DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_MINES)
    }

    /// At least one cell always stays mine-free for the first click
    pub fn with_size(seed: u64, width: usize, height: usize, mines: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            mine_count: mines.min(len.saturating_sub(1)),
            cells: vec![Cell::default(); len],
            phase: GamePhase::Start,
            planted: false,
            revealed: 0,
            rng: seeded_rng(seed),
        }
    }

    /// Board with mines at fixed positions, skipping random planting
    pub fn with_mines(width: usize, height: usize, mines: &[usize]) -> Self {
        let mut game = Self::with_size(0, width, height, 0);
        for &i in mines {
            if i < game.cells.len() {
                game.cells[i].mine = true;
            }
        }
        game.mine_count = game.cells.iter().filter(|c| c.mine).count();
        game.planted = true;
        game.count_adjacent();
        game
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Mines minus placed flags, as shown on the counter
    pub fn flags_remaining(&self) -> isize {
        let flags = self.cells.iter().filter(|c| c.flagged).count();
        self.mine_count as isize - flags as isize
    }

    /// Indices of the up to eight cells around `index`
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = ((index / self.width) as isize, (index % self.width) as isize);
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                if r < 0 || c < 0 || r >= self.height as isize || c >= self.width as isize {
                    None
                } else {
                    Some(r as usize * self.width + c as usize)
                }
            })
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index >= self.cells.len() {
            return Err(GameError::OutOfBounds {
                index,
                len: self.cells.len(),
            });
        }
        Ok(())
    }

    fn plant(&mut self, safe: usize) {
        let mut candidates: Vec<usize> = (0..self.cells.len()).filter(|&i| i != safe).collect();
        candidates.shuffle(&mut self.rng);
        for &i in candidates.iter().take(self.mine_count) {
            self.cells[i].mine = true;
        }
        self.planted = true;
        self.count_adjacent();
        log::debug!("Planted {} mines away from cell {}", self.mine_count, safe);
    }

    fn count_adjacent(&mut self) {
        for i in 0..self.cells.len() {
            let count = self.neighbors(i).filter(|&n| self.cells[n].mine).count();
            self.cells[i].adjacent = count as u8;
        }
    }

    fn open(&mut self, index: usize, opened: &mut Vec<usize>) {
        let cell = &mut self.cells[index];
        cell.revealed = true;
        cell.flagged = false;
        self.revealed += 1;
        opened.push(index);
    }

    /// Reveal a cell. Returns the cells newly revealed; empty when the click
    /// is ignored (flagged, already revealed or game over).
    pub fn reveal(&mut self, index: usize) -> Result<Vec<usize>, GameError> {
        self.check_index(index)?;
        let cell = self.cells[index];
        if self.phase.is_over() || cell.revealed || cell.flagged {
            return Ok(Vec::new());
        }
        if !self.planted {
            self.plant(index);
        }
        if self.phase == GamePhase::Start {
            self.phase = GamePhase::Playing;
        }

        let mut opened = Vec::new();
        if self.cells[index].mine {
            for i in 0..self.cells.len() {
                if !self.cells[i].revealed {
                    self.open(i, &mut opened);
                }
            }
            self.phase = GamePhase::Lost;
            log::info!("Minesweeper: hit a mine at cell {}", index);
            return Ok(opened);
        }

        // Iterative flood fill; each cell is pushed at most once per reveal
        let mut stack = vec![index];
        self.open(index, &mut opened);
        while let Some(current) = stack.pop() {
            if self.cells[current].adjacent != 0 {
                continue;
            }
            let next: Vec<usize> = self
                .neighbors(current)
                .filter(|&n| !self.cells[n].revealed && !self.cells[n].mine)
                .collect();
            for n in next {
                self.open(n, &mut opened);
                stack.push(n);
            }
        }

        if self.revealed == self.cells.len() - self.mine_count {
            self.phase = GamePhase::Won;
            log::info!("Minesweeper: board cleared");
        }
        Ok(opened)
    }

    /// Toggle a flag on an unrevealed cell. Returns whether anything changed.
    pub fn toggle_flag(&mut self, index: usize) -> Result<bool, GameError> {
        self.check_index(index)?;
        if self.phase.is_over() || self.cells[index].revealed {
            return Ok(false);
        }
        let cell = &mut self.cells[index];
        cell.flagged = !cell.flagged;
        Ok(true)
    }

    /// Fresh unplanted board of the same size
    pub fn reset(&mut self) {
        self.cells = vec![Cell::default(); self.cells.len()];
        self.planted = false;
        self.revealed = 0;
        self.phase = GamePhase::Start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_is_safe() {
        for seed in 0..50 {
            let mut game = Minesweeper::new(seed);
            let opened = game.reveal(55).unwrap();
            assert!(!opened.is_empty());
            assert!(!game.cells[55].mine);
            assert_ne!(game.phase, GamePhase::Lost);
            assert_eq!(game.cells.iter().filter(|c| c.mine).count(), DEFAULT_MINES);
        }
    }

    #[test]
    fn test_flood_fill_opens_zero_region() {
        // 4x4 with a single mine in the bottom-right corner
        let mut game = Minesweeper::with_mines(4, 4, &[15]);
        let opened = game.reveal(0).unwrap();
        assert_eq!(opened.len(), 15);
        assert_eq!(game.phase, GamePhase::Won);
        assert!(!game.cells[15].revealed);
        assert_eq!(game.cells[10].adjacent, 1);
    }

    #[test]
    fn test_numbered_cell_reveals_only_itself() {
        let mut game = Minesweeper::with_mines(4, 4, &[15]);
        assert_eq!(game.reveal(10).unwrap(), vec![10]);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn test_flags_block_reveal_and_are_cleared_by_fill() {
        let mut game = Minesweeper::with_mines(4, 4, &[15]);
        assert!(game.toggle_flag(0).unwrap());
        assert!(game.reveal(0).unwrap().is_empty());
        assert!(game.toggle_flag(5).unwrap());
        assert!(game.toggle_flag(0).unwrap());

        game.reveal(0).unwrap();
        assert!(game.cells[5].revealed);
        assert!(!game.cells[5].flagged);
        assert_eq!(game.flags_remaining(), 1);
    }

    #[test]
    fn test_mine_reveals_everything() {
        let mut game = Minesweeper::with_mines(3, 3, &[4]);
        game.reveal(4).unwrap();
        assert_eq!(game.phase, GamePhase::Lost);
        assert!(game.cells.iter().all(|c| c.revealed));
        assert!(game.reveal(0).unwrap().is_empty());
        assert!(!game.toggle_flag(0).unwrap());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut game = Minesweeper::new(1);
        assert!(matches!(game.reveal(100), Err(GameError::OutOfBounds { .. })));
        assert!(matches!(game.toggle_flag(100), Err(GameError::OutOfBounds { .. })));
    }

    #[test]
    fn test_reset_replants() {
        let mut game = Minesweeper::new(3);
        game.reveal(0).unwrap();
        game.reset();
        assert_eq!(game.phase, GamePhase::Start);
        assert!(game.cells.iter().all(|c| !c.mine && !c.revealed));
        game.reveal(99).unwrap();
        assert!(!game.cells[99].mine);
    }
}
