//! Physics module
//!
//! Collision primitives for fixed-size squares: pairwise AABB overlap and
//! viewport edge checks. The movement system applies the responses.

pub mod collision;
pub mod bounds;

pub use collision::{Aabb, Axis, bounce_axis};
pub use bounds::{EdgePolicy, EdgeViolation, Viewport};
