//! Shared simulation types: phase, ball, paddle and step events

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Rect, clamp_span};

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Session ended in the player's favor
    Won,
    /// Session ended against the player
    Lost,
}

impl GamePhase {
    /// Terminal phases only leave through an explicit restart
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Which side of a two-paddle match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Ai,
}

/// Discrete outcome produced by a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a playfield wall
    WallBounce,
    /// Ball reflected off a paddle
    PaddleHit(Side),
    /// A side scored a point; the ball was re-served
    PointScored { scorer: Side, player: u32, ai: u32 },
    /// Brick at `index` was destroyed and `reward` added to the score
    BrickDestroyed { index: usize, reward: u32 },
    /// Ball fell past the paddle
    LifeLost { remaining: u8 },
    /// Snake ate food
    FoodEaten { score: u32 },
    /// Snake ran into a wall or itself
    Crashed,
    Won,
    Lost,
}

/// The ball, stored as the top-left corner of its bounding square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Side length of the bounding square
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Explicit Euler step, one frame
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }
}

/// Axis a paddle slides along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Slides left/right (Brick Breaker)
    Horizontal,
    /// Slides up/down (Pong)
    Vertical,
}

/// A paddle: a fixed-size rectangle that only moves along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub axis: Axis,
    /// Position of the leading edge along `axis`
    pub offset: f32,
    /// Fixed position on the cross axis
    pub cross: f32,
    /// Extent along `axis`
    pub length: f32,
    /// Extent across `axis`
    pub thickness: f32,
    /// Playfield extent along `axis`
    pub travel: f32,
}

impl Paddle {
    /// Paddle centered on its travel range
    pub fn centered(axis: Axis, cross: f32, length: f32, thickness: f32, travel: f32) -> Self {
        Self {
            axis,
            offset: (travel - length) / 2.0,
            cross,
            length,
            thickness,
            travel,
        }
    }

    pub fn rect(&self) -> Rect {
        match self.axis {
            Axis::Horizontal => Rect::new(self.offset, self.cross, self.length, self.thickness),
            Axis::Vertical => Rect::new(self.cross, self.offset, self.thickness, self.length),
        }
    }

    /// Place the paddle, clamped to the playfield
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = clamp_span(offset, self.length, self.travel);
    }

    /// Return to the middle of the travel range
    pub fn recenter(&mut self) {
        self.offset = (self.travel - self.length) / 2.0;
    }

    pub fn center(&self) -> f32 {
        self.offset + self.length / 2.0
    }

    /// Step the paddle center toward `target` by at most `max_step`
    pub fn move_toward(&mut self, target: f32, max_step: f32) {
        let center = self.center();
        let delta = if center < target {
            max_step
        } else if center > target {
            -max_step
        } else {
            0.0
        };
        self.set_offset(self.offset + delta);
    }
}
