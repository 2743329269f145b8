//! Turn-based grid games
//!
//! Every game here is a small state machine over a fixed board. Moves on an
//! occupied or finished board are ignored; indices outside the board are
//! rejected with `GameError::OutOfBounds`.

pub mod connect_four;
pub mod lines;
pub mod memory;
pub mod minesweeper;
pub mod tictactoe;

pub use connect_four::{ConnectFour, Disc};
pub use lines::{LineShape, Outcome};
pub use memory::{FlipOutcome, MISMATCH_DELAY_MS, MemoryMatch};
pub use minesweeper::Minesweeper;
pub use tictactoe::{Mark, TicTacToe};
