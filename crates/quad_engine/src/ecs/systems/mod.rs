//! ECS Systems module

pub mod movement_system;
pub mod rendering_system;

pub use movement_system::{MovementStats, MovementSystem};
pub use rendering_system::{DrawCommand, DrawList, RenderTarget, RenderingSystem};
