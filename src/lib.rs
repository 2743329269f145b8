//! Game Cave - a gallery of small arcade, board and word games
//!
//! Core modules:
//! - `sim`: Real-time arena games (Pong, Brick Breaker, Snake) and their frame loop
//! - `board`: Turn-based grid games (Tic-Tac-Toe, Connect Four, Minesweeper, Memory Match)
//! - `words`: Word and number games plus the optional hint service
//! - `catalog`: Registry of every game in the gallery
//! - `settings`: Data-driven game tuning

pub mod board;
pub mod catalog;
pub mod error;
pub mod settings;
pub mod sim;
pub mod words;

pub use catalog::{GameDescriptor, GameId};
pub use error::{ConfigError, GameError, HintError};
pub use settings::Settings;

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Game configuration constants
pub mod consts {
    /// Pong playfield (pixels)
    pub const PONG_WIDTH: f32 = 600.0;
    pub const PONG_HEIGHT: f32 = 400.0;
    pub const PONG_PADDLE_WIDTH: f32 = 12.0;
    pub const PONG_PADDLE_HEIGHT: f32 = 80.0;
    pub const PONG_BALL_SIZE: f32 = 12.0;
    /// Horizontal serve speed (pixels/frame)
    pub const PONG_SERVE_SPEED: f32 = 4.0;
    /// First side to reach this wins the match
    pub const PONG_WINNING_SCORE: u32 = 5;
    /// Speed multiplier applied on every paddle hit
    pub const PONG_PADDLE_BOOST: f32 = 1.05;
    /// AI paddle tracking speed (pixels/frame)
    pub const PONG_AI_SPEED: f32 = 3.0;
    /// Horizontal speed cap; never more than a paddle's thickness per frame
    pub const PONG_MAX_SPEED: f32 = 12.0;

    /// Brick Breaker playfield (pixels)
    pub const BREAKOUT_WIDTH: f32 = 600.0;
    pub const BREAKOUT_HEIGHT: f32 = 450.0;
    pub const BREAKOUT_PADDLE_WIDTH: f32 = 100.0;
    pub const BREAKOUT_PADDLE_HEIGHT: f32 = 15.0;
    pub const BREAKOUT_BALL_RADIUS: f32 = 8.0;
    pub const BREAKOUT_BALL_SPEED: f32 = 3.0;
    /// Ball spawns this far above the bottom edge
    pub const BREAKOUT_SERVE_OFFSET: f32 = 50.0;
    pub const BREAKOUT_LIVES: u8 = 3;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 4.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    /// Score for one destroyed brick
    pub const BRICK_REWARD: u32 = 10;

    /// Snake grid
    pub const SNAKE_GRID: i32 = 20;
    pub const SNAKE_START_INTERVAL_MS: u32 = 200;
    pub const SNAKE_MIN_INTERVAL_MS: u32 = 50;
    /// Interval multiplier applied each time food is eaten
    pub const SNAKE_SPEEDUP: f32 = 0.95;
}

/// Build the deterministic RNG used by every game for a given seed
#[inline]
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
