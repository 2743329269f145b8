//! Input tracking: pointer position to paddle offset, arrow keys to heading
//!
//! Both trackers are purely reactive. The host forwards raw events and reads
//! back the clamped paddle offset or the direction to apply on the next move.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geom::clamp_span;

/// Input commands for a single step (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Desired paddle offset along its axis (already clamped or not; the game clamps again)
    pub paddle: Option<f32>,
    /// Requested turn (grid games)
    pub turn: Option<Direction>,
}

impl TickInput {
    pub fn paddle(offset: f32) -> Self {
        Self {
            paddle: Some(offset),
            ..Default::default()
        }
    }

    pub fn turn(direction: Direction) -> Self {
        Self {
            turn: Some(direction),
            ..Default::default()
        }
    }
}

/// Maps a pointer coordinate to a paddle offset centered under the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    /// Playfield origin in the pointer's coordinate space (e.g. client rect left)
    pub origin: f32,
    /// Paddle length along the tracked axis
    pub paddle_len: f32,
    /// Playfield extent along the tracked axis
    pub extent: f32,
}

impl PointerTracker {
    pub fn new(origin: f32, paddle_len: f32, extent: f32) -> Self {
        Self {
            origin,
            paddle_len,
            extent,
        }
    }

    /// Paddle leading-edge offset for a pointer position, clamped to the field
    pub fn offset_for(&self, pointer: f32) -> f32 {
        clamp_span(pointer - self.origin - self.paddle_len / 2.0, self.paddle_len, self.extent)
    }
}

/// Grid direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// One-cell step in grid coordinates (y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// Parse a DOM-style key name (`ArrowUp`, ...)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Current heading plus the turn queued for the next move.
///
/// Reversal is judged against the heading of the last completed move, so two
/// quick turns between moves can never fold the snake back on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    moved: Direction,
    next: Direction,
}

impl Heading {
    pub fn new(direction: Direction) -> Self {
        Self {
            moved: direction,
            next: direction,
        }
    }

    /// Queue a turn. Returns false if it would reverse the last move.
    pub fn request(&mut self, direction: Direction) -> bool {
        if direction == self.moved.opposite() {
            return false;
        }
        self.next = direction;
        true
    }

    /// Direction the next move will take
    pub fn next(&self) -> Direction {
        self.next
    }

    /// Consume the queued turn for a move
    pub fn commit(&mut self) -> Direction {
        self.moved = self.next;
        self.moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_centers_and_clamps() {
        let tracker = PointerTracker::new(100.0, 80.0, 400.0);
        assert_eq!(tracker.offset_for(300.0), 160.0);
        assert_eq!(tracker.offset_for(0.0), 0.0);
        assert_eq!(tracker.offset_for(2000.0), 320.0);
    }

    #[test]
    fn test_reversal_forbidden() {
        let mut heading = Heading::new(Direction::Right);
        assert!(!heading.request(Direction::Left));
        assert_eq!(heading.next(), Direction::Right);
        assert!(heading.request(Direction::Up));
        assert_eq!(heading.commit(), Direction::Up);
        assert!(heading.request(Direction::Left));
    }

    #[test]
    fn test_two_turns_between_moves_cannot_reverse() {
        let mut heading = Heading::new(Direction::Right);
        assert!(heading.request(Direction::Up));
        // Still moving right until the next commit
        assert!(!heading.request(Direction::Left));
        assert_eq!(heading.commit(), Direction::Up);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("w"), None);
        assert_eq!(Direction::Left.delta(), IVec2::new(-1, 0));
    }
}
