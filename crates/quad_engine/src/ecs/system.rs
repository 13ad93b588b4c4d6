//! System trait and implementations

use super::{EcsError, World};

/// System trait for processing entities and components
///
/// A system is called once per frame with the world and the frame's delta in
/// seconds. Calls never overlap, and mutations are visible to every system
/// that runs after this one in the same frame.
pub trait System {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Run the system for one frame
    fn update(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError>;
}
