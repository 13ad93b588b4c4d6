//! Position component for entities placed in 2D world space
//!
//! Coordinates are in viewport pixels with the origin at the top-left corner,
//! matching the square's top-left vertex.

use crate::foundation::math::Vec2;

/// World-space location of an entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f32,

    /// Vertical coordinate
    pub y: f32,
}

impl Position {
    /// Create a position
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a position as a fraction of a viewport
    pub fn from_fraction(fx: f32, fy: f32, width: f32, height: f32) -> Self {
        Self::new(fx * width, fy * height)
    }

    /// Position as a vector
    pub fn to_vec(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
