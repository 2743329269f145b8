//! Pong: player paddle on the left, tracking AI paddle on the right
//!
//! First side to the winning score ends the match. Each paddle hit speeds the
//! ball up slightly, so long rallies get harder.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::{Walls, paddle_bounce, reflect_off_walls};
use super::frame::ArenaGame;
use super::geom::Rect;
use super::input::TickInput;
use super::state::{Axis, Ball, GameEvent, GamePhase, Paddle, Side};
use crate::consts::*;
use crate::seeded_rng;
use crate::settings::PongTuning;

/// Complete Pong match state
#[derive(Debug, Clone, Serialize)]
pub struct Pong {
    pub phase: GamePhase,
    pub ball: Ball,
    /// Left paddle, follows the pointer
    pub player: Paddle,
    /// Right paddle, tracks the ball
    pub ai: Paddle,
    pub player_score: u32,
    pub ai_score: u32,
    /// Frames simulated this match
    pub frame: u64,
    #[serde(skip)]
    tuning: PongTuning,
    #[serde(skip)]
    rng: Pcg32,
}

impl Pong {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, PongTuning::default())
    }

    /// Serve speed is capped like paddle boosts and a match needs at least one point.
    pub fn with_tuning(seed: u64, mut tuning: PongTuning) -> Self {
        tuning.serve_speed = tuning.serve_speed.abs().min(PONG_MAX_SPEED);
        tuning.winning_score = tuning.winning_score.max(1);
        Self {
            phase: GamePhase::Start,
            ball: Ball::new(Self::center(), Vec2::ZERO, PONG_BALL_SIZE),
            player: Paddle::centered(
                Axis::Vertical,
                0.0,
                PONG_PADDLE_HEIGHT,
                PONG_PADDLE_WIDTH,
                PONG_HEIGHT,
            ),
            ai: Paddle::centered(
                Axis::Vertical,
                PONG_WIDTH - PONG_PADDLE_WIDTH,
                PONG_PADDLE_HEIGHT,
                PONG_PADDLE_WIDTH,
                PONG_HEIGHT,
            ),
            player_score: 0,
            ai_score: 0,
            frame: 0,
            tuning,
            rng: seeded_rng(seed),
        }
    }

    pub fn field() -> Rect {
        Rect::new(0.0, 0.0, PONG_WIDTH, PONG_HEIGHT)
    }

    fn center() -> Vec2 {
        Vec2::new(
            (PONG_WIDTH - PONG_BALL_SIZE) / 2.0,
            (PONG_HEIGHT - PONG_BALL_SIZE) / 2.0,
        )
    }

    /// Re-serve from the center. `direction` is +1 toward the AI, -1 toward the player.
    pub fn serve(&mut self, direction: f32) {
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dy = sign * self.rng.random_range(2.0..4.0);
        self.ball.pos = Self::center();
        self.ball.vel = Vec2::new(self.tuning.serve_speed * direction.signum(), dy);
    }

    /// Boost horizontal speed after a paddle hit, capped
    fn boost(&mut self) {
        let boosted = self.ball.vel.x * self.tuning.paddle_boost;
        self.ball.vel.x = boosted.clamp(-PONG_MAX_SPEED, PONG_MAX_SPEED);
    }

    fn award(&mut self, scorer: Side, events: &mut Vec<GameEvent>) {
        match scorer {
            Side::Player => {
                self.player_score += 1;
                self.serve(-1.0);
            }
            Side::Ai => {
                self.ai_score += 1;
                self.serve(1.0);
            }
        }
        log::debug!(
            "Point to {:?}: {} - {}",
            scorer,
            self.player_score,
            self.ai_score
        );
        events.push(GameEvent::PointScored {
            scorer,
            player: self.player_score,
            ai: self.ai_score,
        });
    }

    /// Winner so far, if the match is decided
    pub fn winner(&self) -> Option<Side> {
        if self.player_score >= self.tuning.winning_score {
            Some(Side::Player)
        } else if self.ai_score >= self.tuning.winning_score {
            Some(Side::Ai)
        } else {
            None
        }
    }

    pub fn tuning(&self) -> &PongTuning {
        &self.tuning
    }
}

impl ArenaGame for Pong {
    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn start(&mut self) {
        if self.phase == GamePhase::Playing {
            return;
        }
        self.player_score = 0;
        self.ai_score = 0;
        self.frame = 0;
        self.player.recenter();
        self.ai.recenter();
        self.serve(1.0);
        self.phase = GamePhase::Playing;
        log::info!("Pong match started");
    }

    fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Playing {
            return events;
        }
        self.frame += 1;

        if let Some(offset) = input.paddle {
            self.player.set_offset(offset);
        }

        self.ball.integrate();

        if reflect_off_walls(&mut self.ball, &Self::field(), Walls::HORIZONTAL) {
            events.push(GameEvent::WallBounce);
        }

        if paddle_bounce(&mut self.ball, &self.player.rect(), Vec2::X) {
            self.boost();
            events.push(GameEvent::PaddleHit(Side::Player));
        } else if paddle_bounce(&mut self.ball, &self.ai.rect(), Vec2::NEG_X) {
            self.boost();
            events.push(GameEvent::PaddleHit(Side::Ai));
        }

        if self.ball.pos.x < 0.0 {
            self.award(Side::Ai, &mut events);
        } else if self.ball.pos.x + self.ball.size > PONG_WIDTH {
            self.award(Side::Player, &mut events);
        }

        let target = self.ball.center().y;
        self.ai.move_toward(target, self.tuning.ai_speed);

        if let Some(winner) = self.winner() {
            let (phase, event) = match winner {
                Side::Player => (GamePhase::Won, GameEvent::Won),
                Side::Ai => (GamePhase::Lost, GameEvent::Lost),
            };
            self.phase = phase;
            events.push(event);
            log::info!(
                "Pong match over: {} - {} ({:?})",
                self.player_score,
                self.ai_score,
                winner
            );
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(seed: u64) -> Pong {
        let mut pong = Pong::new(seed);
        pong.start();
        pong
    }

    #[test]
    fn test_start_serves_toward_ai() {
        let pong = playing(7);
        assert_eq!(pong.phase, GamePhase::Playing);
        assert_eq!(pong.ball.vel.x, PONG_SERVE_SPEED);
        let dy = pong.ball.vel.y.abs();
        assert!((2.0..4.0).contains(&dy));
        assert_eq!(pong.ball.pos, Pong::center());
    }

    #[test]
    fn test_step_is_noop_before_start() {
        let mut pong = Pong::new(7);
        let before = pong.ball;
        assert!(pong.step(&TickInput::default()).is_empty());
        assert_eq!(pong.ball, before);
        assert_eq!(pong.frame, 0);
    }

    #[test]
    fn test_player_paddle_hit_speeds_up() {
        let mut pong = playing(1);
        pong.player.set_offset(100.0);
        pong.ball.pos = Vec2::new(14.0, 130.0);
        pong.ball.vel = Vec2::new(-4.0, 2.0);

        let events = pong.step(&TickInput::default());
        assert!(events.contains(&GameEvent::PaddleHit(Side::Player)));
        assert!((pong.ball.vel.x - 4.0 * PONG_PADDLE_BOOST).abs() < 1e-5);
        assert_eq!(pong.ball.pos.x, PONG_PADDLE_WIDTH);
    }

    #[test]
    fn test_speed_is_capped() {
        let mut pong = playing(1);
        pong.player.set_offset(100.0);
        pong.ball.pos = Vec2::new(20.0, 130.0);
        pong.ball.vel = Vec2::new(-PONG_MAX_SPEED, 0.0);
        pong.step(&TickInput::default());
        assert_eq!(pong.ball.vel.x, PONG_MAX_SPEED);
    }

    #[test]
    fn test_fast_serve_still_hits_paddle() {
        let tuning = PongTuning {
            serve_speed: 40.0,
            ..PongTuning::default()
        };
        let mut pong = Pong::with_tuning(9, tuning);
        pong.start();
        assert_eq!(pong.ball.vel.x, PONG_MAX_SPEED);

        pong.ai.set_offset(150.0);
        pong.ball.pos = Vec2::new(574.0, 180.0);
        pong.ball.vel.y = 0.0;
        let events = pong.step(&TickInput::default());
        assert!(events.contains(&GameEvent::PaddleHit(Side::Ai)));
        assert_eq!(pong.player_score, 0);
    }

    #[test]
    fn test_zero_winning_score_needs_a_point() {
        let tuning = PongTuning {
            winning_score: 0,
            ..PongTuning::default()
        };
        let mut pong = Pong::with_tuning(4, tuning);
        pong.start();
        assert_eq!(pong.tuning().winning_score, 1);
        pong.step(&TickInput::default());
        assert_eq!(pong.phase, GamePhase::Playing);
        assert_eq!(pong.winner(), None);
    }

    #[test]
    fn test_miss_awards_ai_and_reserves() {
        let mut pong = playing(3);
        pong.player.set_offset(0.0);
        pong.ball.pos = Vec2::new(2.0, 300.0);
        pong.ball.vel = Vec2::new(-4.0, 0.0);

        let events = pong.step(&TickInput::default());
        assert!(events.contains(&GameEvent::PointScored {
            scorer: Side::Ai,
            player: 0,
            ai: 1
        }));
        assert_eq!(pong.ball.vel.x, PONG_SERVE_SPEED);
        assert_eq!(pong.phase, GamePhase::Playing);
    }

    #[test]
    fn test_player_reaches_winning_score() {
        let mut pong = playing(3);
        pong.player_score = PONG_WINNING_SCORE - 1;
        pong.ai.set_offset(0.0);
        pong.ball.pos = Vec2::new(PONG_WIDTH - PONG_BALL_SIZE - 1.0, 300.0);
        pong.ball.vel = Vec2::new(4.0, 0.0);

        let events = pong.step(&TickInput::default());
        assert_eq!(events.last(), Some(&GameEvent::Won));
        assert_eq!(pong.phase, GamePhase::Won);
        assert_eq!(pong.winner(), Some(Side::Player));

        // Frozen until restarted
        let frame = pong.frame;
        assert!(pong.step(&TickInput::default()).is_empty());
        assert_eq!(pong.frame, frame);

        pong.start();
        assert_eq!(pong.player_score, 0);
        assert_eq!(pong.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ai_tracks_ball() {
        let mut pong = playing(5);
        pong.ai.set_offset(0.0);
        pong.ball.pos = Vec2::new(300.0, 300.0);
        pong.ball.vel = Vec2::new(1.0, 0.0);
        pong.step(&TickInput::default());
        assert_eq!(pong.ai.offset, PONG_AI_SPEED);
    }

    #[test]
    fn test_pointer_input_clamped() {
        let mut pong = playing(5);
        pong.step(&TickInput::paddle(-50.0));
        assert_eq!(pong.player.offset, 0.0);
        pong.step(&TickInput::paddle(1000.0));
        assert_eq!(pong.player.offset, PONG_HEIGHT - PONG_PADDLE_HEIGHT);
    }

    #[test]
    fn test_determinism() {
        // Two matches with same seed should produce identical results
        let mut a = playing(99999);
        let mut b = playing(99999);
        for i in 0..2000 {
            let input = TickInput::paddle((i % 320) as f32);
            assert_eq!(a.step(&input), b.step(&input));
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.player_score, b.player_score);
        assert_eq!(a.ai_score, b.ai_score);
    }
}
