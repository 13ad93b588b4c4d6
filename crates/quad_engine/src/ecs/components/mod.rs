//! ECS Components module
//!
//! Plain data records; behaviour lives in the systems.

pub mod transform;
pub mod movement;
pub mod renderable;

pub use transform::Position;
pub use movement::Velocity;
pub use renderable::{Color, Render};
