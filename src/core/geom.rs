//! Axis-Aligned Rectangles
//!
//! Rectangle type shared by player bounds, platform tiles, lava tiles,
//! spike hitboxes, and the exit door. Intersection uses strict
//! inequalities, so rectangles that merely touch along an edge do not
//! collide.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::vec2::Vec2;

/// Error raised when constructing malformed geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Rectangle with zero or negative extent.
    #[error("degenerate rectangle: {width}x{height}")]
    DegenerateRect {
        /// Offending width
        width: f32,
        /// Offending height
        height: f32,
    },
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge (screen coordinates: +y points down)
    pub y: f32,
    /// Width, always > 0
    pub w: f32,
    /// Height, always > 0
    pub h: f32,
}

impl Rect {
    /// Create a rectangle, rejecting zero or negative extents.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Result<Self, GeometryError> {
        if w <= 0.0 || h <= 0.0 {
            return Err(GeometryError::DegenerateRect {
                width: w,
                height: h,
            });
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin(origin: Vec2, w: f32, h: f32) -> Result<Self, GeometryError> {
        Self::new(origin.x, origin.y, w, h)
    }

    /// Left edge.
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge.
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Vertical midline, the discriminator for collision side selection.
    #[inline]
    pub fn v_center(&self) -> f32 {
        (self.top() + self.bottom()) / 2.0
    }

    /// Strict overlap test. Shared edges do not count as intersection.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate() {
        assert!(matches!(
            Rect::new(0.0, 0.0, 0.0, 10.0),
            Err(GeometryError::DegenerateRect { .. })
        ));
        assert!(matches!(
            Rect::new(0.0, 0.0, 10.0, -1.0),
            Err(GeometryError::DegenerateRect { .. })
        ));
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0).unwrap();
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.v_center(), 40.0);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::new(5.0, 5.0, 10.0, 10.0).unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let right = Rect::new(10.0, 0.0, 10.0, 10.0).unwrap();
        let below = Rect::new(0.0, 10.0, 10.0, 10.0).unwrap();
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::new(100.0, 100.0, 5.0, 5.0).unwrap();
        assert!(!a.intersects(&b));
    }
}
