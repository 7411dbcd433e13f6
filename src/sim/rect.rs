//! Axis-aligned rectangle geometry for the paddle and bricks
//!
//! Everything in the field is either the circular ball or an axis-aligned
//! rectangle, so geometry queries reduce to center/half-extent arithmetic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle stored as center + half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center of the rectangle
    pub center: Vec2,
    /// Half extents on each axis
    pub half: Vec2,
}

impl Rect {
    pub fn from_center_size(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half.y * 2.0
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half.x && d.y <= self.half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let rect = Rect::from_center_size(Vec2::new(400.0, 550.0), 100.0, 20.0);
        assert_eq!(rect.min(), Vec2::new(350.0, 540.0));
        assert_eq!(rect.max(), Vec2::new(450.0, 560.0));
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 20.0);
    }

    #[test]
    fn test_rect_contains_point() {
        let rect = Rect::from_center_size(Vec2::new(100.0, 100.0), 70.0, 25.0);
        assert!(rect.contains_point(Vec2::new(100.0, 100.0)));
        assert!(rect.contains_point(Vec2::new(135.0, 112.5))); // corner is inclusive
        assert!(!rect.contains_point(Vec2::new(136.0, 100.0)));
        assert!(!rect.contains_point(Vec2::new(100.0, 113.0)));
    }
}
