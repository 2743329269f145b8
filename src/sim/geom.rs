//! Axis-aligned rectangle geometry for paddles, bricks and ball bounds
//!
//! Screen coordinates: origin at the top-left, y grows downward. A rectangle
//! is defined by its top-left corner and its size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square of side `size` at a top-left corner
    pub fn square(min: Vec2, size: f32) -> Self {
        Self {
            min,
            size: Vec2::splat(size),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Bounding-box overlap. Touching edges count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Whether `inner` lies entirely within this rectangle
    pub fn contains_rect(&self, inner: &Rect) -> bool {
        inner.left() >= self.left()
            && inner.right() <= self.right()
            && inner.top() >= self.top()
            && inner.bottom() <= self.bottom()
    }

    /// Clamp a top-left corner so a box of `size` stays inside this rectangle
    pub fn clamp_corner(&self, corner: Vec2, size: Vec2) -> Vec2 {
        let max = (self.max() - size).max(self.min);
        corner.clamp(self.min, max)
    }
}

/// Clamp a 1-D offset so a segment of `len` stays inside `[0, extent]`
#[inline]
pub fn clamp_span(offset: f32, len: f32, extent: f32) -> f32 {
    offset.clamp(0.0, (extent - len).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0))); // touching edge
        assert!(!a.overlaps(&Rect::new(10.5, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -6.0, 5.0, 5.0)));
    }

    #[test]
    fn test_clamp_corner() {
        let field = Rect::new(0.0, 0.0, 100.0, 50.0);
        let size = Vec2::splat(10.0);
        assert_eq!(field.clamp_corner(Vec2::new(-3.0, 60.0), size), Vec2::new(0.0, 40.0));
        assert_eq!(field.clamp_corner(Vec2::new(20.0, 20.0), size), Vec2::new(20.0, 20.0));
        assert!(field.contains_rect(&Rect::square(Vec2::new(90.0, 40.0), 10.0)));
    }

    #[test]
    fn test_clamp_span() {
        assert_eq!(clamp_span(-5.0, 80.0, 400.0), 0.0);
        assert_eq!(clamp_span(390.0, 80.0, 400.0), 320.0);
        assert_eq!(clamp_span(100.0, 80.0, 400.0), 100.0);
    }
}
