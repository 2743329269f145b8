//! Collision detection and response for axis-aligned arenas
//!
//! Walls, paddles and bricks are all rectangles, so every test is a
//! bounding-box overlap and every response negates one velocity component.

use glam::Vec2;

use super::geom::Rect;
use super::state::Ball;

/// Which playfield edges reflect the ball (the others are open goal lines)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Walls {
    /// Top and bottom only (Pong)
    pub const HORIZONTAL: Walls = Walls {
        left: false,
        right: false,
        top: true,
        bottom: true,
    };

    /// Everything but the bottom edge (Brick Breaker)
    pub const OPEN_BOTTOM: Walls = Walls {
        left: true,
        right: true,
        top: true,
        bottom: false,
    };
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflect the ball off any reflecting wall it has crossed.
///
/// The ball is moved back inside the field and the reflected component always
/// points inward afterwards. Returns true if any wall was hit.
pub fn reflect_off_walls(ball: &mut Ball, field: &Rect, walls: Walls) -> bool {
    let mut hit = false;

    if walls.left && ball.pos.x <= field.left() {
        ball.pos.x = field.left();
        ball.vel.x = ball.vel.x.abs();
        hit = true;
    } else if walls.right && ball.pos.x + ball.size >= field.right() {
        ball.pos.x = field.right() - ball.size;
        ball.vel.x = -ball.vel.x.abs();
        hit = true;
    }

    if walls.top && ball.pos.y <= field.top() {
        ball.pos.y = field.top();
        ball.vel.y = ball.vel.y.abs();
        hit = true;
    } else if walls.bottom && ball.pos.y + ball.size >= field.bottom() {
        ball.pos.y = field.bottom() - ball.size;
        ball.vel.y = -ball.vel.y.abs();
        hit = true;
    }

    hit
}

/// Bounce the ball off a paddle face.
///
/// `normal` is the unit normal of the paddle's playing face (pointing into
/// the field). The ball only bounces while moving against the normal, and is
/// snapped flush to the face so it cannot hit twice.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Rect, normal: Vec2) -> bool {
    if ball.vel.dot(normal) >= 0.0 || !ball.bounds().overlaps(paddle) {
        return false;
    }

    ball.vel = reflect_velocity(ball.vel, normal);

    if normal.x > 0.0 {
        ball.pos.x = paddle.right();
    } else if normal.x < 0.0 {
        ball.pos.x = paddle.left() - ball.size;
    } else if normal.y < 0.0 {
        ball.pos.y = paddle.top() - ball.size;
    } else {
        ball.pos.y = paddle.bottom();
    }
    true
}

/// Index of the first live brick overlapping the ball, in grid order
pub fn first_brick_hit<'a, I>(ball: &Rect, bricks: I) -> Option<usize>
where
    I: IntoIterator<Item = (&'a Rect, bool)>,
{
    bricks
        .into_iter()
        .position(|(rect, alive)| alive && ball.overlaps(rect))
}
