//! Square AABB collision tests
//!
//! Every entity occupies an `size` x `size` square whose top-left corner is its
//! position. Overlap tests are strict, so squares that only touch along an
//! edge do not collide.

use crate::ecs::components::Position;
use crate::foundation::math::Vec2;

/// A coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal
    X,
    /// Vertical
    Y,
}

/// Axis-Aligned Bounding Box in 2D
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec2,
    /// Maximum corner of the bounding box
    pub max: Vec2,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The square occupied by an entity at `position`
    pub fn square(position: Position, size: f32) -> Self {
        let min = position.to_vec();
        Self::new(min, min + Vec2::new(size, size))
    }

    /// Check if this AABB overlaps another with positive area
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x &&
        self.min.y < other.max.y && self.max.y > other.min.y
    }
}

/// Pick the axis along which `current` bounces off `other`.
///
/// Compares `current.x + size - other.x` against `current.y + size - other.y`
/// and bounces along X when the first is larger, otherwise along Y.
pub fn bounce_axis(current: Position, other: Position, size: f32) -> Axis {
    if current.x + size - other.x > current.y + size - other.y {
        Axis::X
    } else {
        Axis::Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 50.0;

    #[test]
    fn test_overlapping_squares_intersect() {
        let a = Aabb::square(Position::new(0.0, 0.0), SIZE);
        let b = Aabb::square(Position::new(49.0, 49.0), SIZE);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_squares_do_not_intersect() {
        let a = Aabb::square(Position::new(0.0, 0.0), SIZE);
        let right = Aabb::square(Position::new(50.0, 0.0), SIZE);
        let below = Aabb::square(Position::new(0.0, 50.0), SIZE);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = Aabb::square(Position::new(0.0, 0.0), SIZE);
        let far_below = Aabb::square(Position::new(10.0, 200.0), SIZE);
        assert!(!a.intersects(&far_below));
    }

    #[test]
    fn test_bounce_axis() {
        // Stacked vertically: x term is the full size, y term is small
        assert_eq!(
            bounce_axis(Position::new(100.0, 100.0), Position::new(100.0, 140.0), SIZE),
            Axis::X
        );
        // Side by side: y term is the full size
        assert_eq!(
            bounce_axis(Position::new(100.0, 100.0), Position::new(140.0, 100.0), SIZE),
            Axis::Y
        );
        // Equal terms fall through to Y
        assert_eq!(
            bounce_axis(Position::new(0.0, 0.0), Position::new(10.0, 10.0), SIZE),
            Axis::Y
        );
    }
}
