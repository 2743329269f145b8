//! Real-time arena simulation
//!
//! All per-frame gameplay lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only (no delta-time scaling)
//! - Seeded RNG only
//! - No rendering, timers or platform dependencies; the host drives every step

pub mod breakout;
pub mod collision;
pub mod frame;
pub mod geom;
pub mod input;
pub mod pong;
pub mod snake;
pub mod state;

pub use breakout::{BRICK_WIDTH, Brick, BrickBreaker, brick_grid};
pub use collision::{Walls, first_brick_hit, paddle_bounce, reflect_off_walls, reflect_velocity};
pub use frame::{ArenaGame, FrameLoop, IntervalTimer, MAX_CATCHUP_TICKS};
pub use geom::{Rect, clamp_span};
pub use input::{Direction, Heading, PointerTracker, TickInput};
pub use pong::Pong;
pub use snake::Snake;
pub use state::{Axis, Ball, GameEvent, GamePhase, Paddle, Side};
