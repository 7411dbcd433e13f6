//! Collision detection and response for the rectangular field
//!
//! The one query that matters: a circular ball against an axis-aligned
//! rectangle, answered with a per-axis penetration result. The contact
//! normal lies on the axis with the smaller penetration; reflection negates
//! exactly the velocity component along that axis, preserving speed.

use glam::Vec2;

use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether an overlap exists
    pub hit: bool,
    /// Surface normal at contact (unit, axis-aligned, pointing toward the ball)
    pub normal: Vec2,
    /// Penetration depth along the normal (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between the ball and an axis-aligned rectangle
///
/// The rectangle is extended by the ball radius on each axis and the two
/// penetration depths are compared: the shallower axis is the contact axis.
/// Overlaps that only graze an edge (zero depth) count as misses.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    let delta = ball_pos - rect.center;
    let overlap_x = rect.half.x + ball_radius - delta.x.abs();
    let overlap_y = rect.half.y + ball_radius - delta.y.abs();

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return CollisionResult::miss();
    }

    if overlap_x < overlap_y {
        CollisionResult {
            hit: true,
            normal: Vec2::new(delta.x.signum(), 0.0),
            penetration: overlap_x,
        }
    } else {
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, delta.y.signum()),
            penetration: overlap_y,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n. With an axis-aligned unit normal
/// this negates exactly the component along the contact axis.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
