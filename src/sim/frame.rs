//! Frame scheduling for real-time games
//!
//! The host calls [`FrameLoop::on_frame`] from its animation callback. The loop
//! is only scheduled while the game is playing and cancels itself as soon as
//! the phase changes, so no step ever runs against a finished session.

use serde::Serialize;

use super::input::TickInput;
use super::state::{GameEvent, GamePhase};

/// Maximum ticks an interval timer will catch up in one call
pub const MAX_CATCHUP_TICKS: u32 = 8;

/// A real-time game advanced one fixed step per frame
pub trait ArenaGame {
    fn phase(&self) -> GamePhase;

    /// Start or restart the session (explicit user action)
    fn start(&mut self);

    /// Advance exactly one frame. A no-op outside [`GamePhase::Playing`].
    fn step(&mut self, input: &TickInput) -> Vec<GameEvent>;

    /// JSON view of the entities for the host renderer
    fn snapshot_json(&self) -> String
    where
        Self: Serialize,
    {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Per-frame driver for an [`ArenaGame`]
#[derive(Debug)]
pub struct FrameLoop<G: ArenaGame> {
    game: G,
    scheduled: bool,
    frames: u64,
}

impl<G: ArenaGame> FrameLoop<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            scheduled: false,
            frames: 0,
        }
    }

    /// Start the game and schedule frames while it plays
    pub fn start(&mut self) {
        self.game.start();
        self.scheduled = self.game.phase() == GamePhase::Playing;
        if self.scheduled {
            log::debug!("Frame loop scheduled");
        }
    }

    /// Run one frame. Returns None when no frame is scheduled.
    pub fn on_frame(&mut self, input: &TickInput) -> Option<Vec<GameEvent>> {
        if !self.scheduled {
            return None;
        }
        let events = self.game.step(input);
        self.frames += 1;
        if self.game.phase() != GamePhase::Playing {
            self.cancel();
        }
        Some(events)
    }

    /// Stop requesting frames
    pub fn cancel(&mut self) {
        if self.scheduled {
            log::debug!("Frame loop cancelled after {} frames", self.frames);
        }
        self.scheduled = false;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Frames run since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Mutable access for input that arrives between frames
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }
}

impl<G: ArenaGame> Drop for FrameLoop<G> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Fixed-period tick accumulator fed with host elapsed time
#[derive(Debug, Clone, Serialize)]
pub struct IntervalTimer {
    period_ms: u32,
    accumulator_ms: u32,
}

impl IntervalTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Change the period; time already accumulated carries over
    pub fn set_period(&mut self, period_ms: u32) {
        self.period_ms = period_ms.max(1);
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }

    /// Feed elapsed time, returning how many ticks are due.
    ///
    /// At most [`MAX_CATCHUP_TICKS`] are returned; any backlog beyond that is
    /// dropped.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = self.accumulator_ms / self.period_ms;
        if due > MAX_CATCHUP_TICKS {
            self.accumulator_ms = 0;
            return MAX_CATCHUP_TICKS;
        }
        self.accumulator_ms -= due * self.period_ms;
        due
    }
}
