//! Math utilities and types
//!
//! Provides the 2D math types used by components, physics and draw commands.

pub use nalgebra::{Vector2, Matrix3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3x3 matrix type (2D homogeneous transforms)
pub type Mat3 = Matrix3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Extension trait for Mat3 with 2D transform constructors
pub trait Mat3Ext {
    /// Create a 2D translation matrix
    fn translation(tx: f32, ty: f32) -> Mat3;
}

impl Mat3Ext for Mat3 {
    fn translation(tx: f32, ty: f32) -> Mat3 {
        Mat3::new_translation(&Vec2::new(tx, ty))
    }
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    ///
    /// Unlike `f32::clamp` this does not panic when `min > max`; `min` wins.
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value > max { max.max(min) } else if value < min { min } else { value }
    }
}
