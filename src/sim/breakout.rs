//! Brick Breaker: clear a fixed grid of bricks with a single ball
//!
//! The paddle slides along the bottom edge. Each step destroys at most one
//! brick. Losing the ball past the paddle costs a life; clearing the grid wins.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Walls, first_brick_hit, paddle_bounce, reflect_off_walls};
use super::frame::ArenaGame;
use super::geom::Rect;
use super::input::TickInput;
use super::state::{Axis, Ball, GameEvent, GamePhase, Paddle, Side};
use crate::consts::*;
use crate::seeded_rng;
use crate::settings::BreakoutTuning;

/// Width of one brick so the grid spans the field between the side offsets
pub const BRICK_WIDTH: f32 = (BREAKOUT_WIDTH
    - BRICK_OFFSET_LEFT * 2.0
    - BRICK_GAP * (BRICK_COLS as f32 - 1.0))
    / BRICK_COLS as f32;

/// A brick in the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Grid row, used by the renderer for coloring
    pub row: usize,
    pub alive: bool,
}

/// Build the full brick grid, row-major
pub fn brick_grid() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            bricks.push(Brick {
                rect: Rect::new(
                    BRICK_OFFSET_LEFT + col as f32 * (BRICK_WIDTH + BRICK_GAP),
                    BRICK_OFFSET_TOP + row as f32 * (BRICK_HEIGHT + BRICK_GAP),
                    BRICK_WIDTH,
                    BRICK_HEIGHT,
                ),
                row,
                alive: true,
            });
        }
    }
    bricks
}

/// Complete Brick Breaker state
#[derive(Debug, Clone, Serialize)]
pub struct BrickBreaker {
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub lives: u8,
    /// Frames simulated this session
    pub frame: u64,
    #[serde(skip)]
    tuning: BreakoutTuning,
    #[serde(skip)]
    rng: Pcg32,
}

impl BrickBreaker {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, BreakoutTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: BreakoutTuning) -> Self {
        let mut game = Self {
            phase: GamePhase::Start,
            ball: Ball::new(Vec2::ZERO, Vec2::ZERO, BREAKOUT_BALL_RADIUS * 2.0),
            paddle: Paddle::centered(
                Axis::Horizontal,
                BREAKOUT_HEIGHT - BREAKOUT_PADDLE_HEIGHT,
                BREAKOUT_PADDLE_WIDTH,
                BREAKOUT_PADDLE_HEIGHT,
                BREAKOUT_WIDTH,
            ),
            bricks: brick_grid(),
            score: 0,
            lives: tuning.lives,
            frame: 0,
            tuning,
            rng: seeded_rng(seed),
        };
        game.serve();
        game
    }

    pub fn field() -> Rect {
        Rect::new(0.0, 0.0, BREAKOUT_WIDTH, BREAKOUT_HEIGHT)
    }

    /// Put the ball back above the paddle, heading up at a random horizontal direction
    pub fn serve(&mut self) {
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed = self.tuning.ball_speed;
        self.paddle.recenter();
        self.ball.pos = Vec2::new(
            BREAKOUT_WIDTH / 2.0 - BREAKOUT_BALL_RADIUS,
            BREAKOUT_HEIGHT - BREAKOUT_SERVE_OFFSET,
        );
        self.ball.vel = Vec2::new(speed * sign, -speed);
    }

    /// Fresh level: full grid, zero score, full lives
    fn reset_level(&mut self) {
        self.bricks = brick_grid();
        self.score = 0;
        self.lives = self.tuning.lives;
        self.frame = 0;
        self.serve();
    }

    pub fn live_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    pub fn tuning(&self) -> &BreakoutTuning {
        &self.tuning
    }
}

impl ArenaGame for BrickBreaker {
    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn start(&mut self) {
        match self.phase {
            GamePhase::Playing => return,
            GamePhase::Start => {}
            GamePhase::Won | GamePhase::Lost => self.reset_level(),
        }
        self.phase = GamePhase::Playing;
        log::info!("Brick Breaker started ({} bricks)", self.live_bricks());
    }

    fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Playing {
            return events;
        }
        self.frame += 1;

        if let Some(offset) = input.paddle {
            self.paddle.set_offset(offset);
        }

        self.ball.integrate();

        if reflect_off_walls(&mut self.ball, &Self::field(), Walls::OPEN_BOTTOM) {
            events.push(GameEvent::WallBounce);
        }

        if paddle_bounce(&mut self.ball, &self.paddle.rect(), Vec2::NEG_Y) {
            events.push(GameEvent::PaddleHit(Side::Player));
        }

        let ball_box = self.ball.bounds();
        let hit = first_brick_hit(&ball_box, self.bricks.iter().map(|b| (&b.rect, b.alive)));
        if let Some(index) = hit {
            self.bricks[index].alive = false;
            self.ball.vel.y = -self.ball.vel.y;
            self.score += self.tuning.brick_reward;
            events.push(GameEvent::BrickDestroyed {
                index,
                reward: self.tuning.brick_reward,
            });
        }

        if self.live_bricks() == 0 {
            self.phase = GamePhase::Won;
            events.push(GameEvent::Won);
            log::info!("Brick Breaker cleared, score {}", self.score);
            return events;
        }

        if self.ball.pos.y > BREAKOUT_HEIGHT {
            self.lives = self.lives.saturating_sub(1);
            events.push(GameEvent::LifeLost {
                remaining: self.lives,
            });
            if self.lives == 0 {
                self.phase = GamePhase::Lost;
                events.push(GameEvent::Lost);
                log::info!("Brick Breaker lost, score {}", self.score);
            } else {
                log::debug!("Life lost, {} remaining", self.lives);
                self.serve();
            }
        }

        events
    }
}
