//! System scheduling
//!
//! Systems run one after another, in the order they were added, on the
//! calling thread. There is no parallelism and no reordering: a system sees
//! every mutation made by the systems before it in the same frame.

use super::{EcsError, System, World};

/// Unique identifier for a registered system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemId(pub usize);

/// Ordered list of systems executed once per frame
#[derive(Default)]
pub struct Schedule {
    systems: Vec<Box<dyn System>>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a system; it runs after every system added before it
    pub fn add_system(&mut self, system: Box<dyn System>) -> SystemId {
        let id = SystemId(self.systems.len());
        log::debug!("Registered system '{}' as {:?}", system.name(), id);
        self.systems.push(system);
        id
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no systems are registered
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Names of the registered systems, in execution order
    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.systems.iter().map(|system| system.name())
    }

    /// Execute all systems for one frame.
    ///
    /// Stops at the first failing system; later systems do not run that frame.
    pub fn execute_frame(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError> {
        for system in &mut self.systems {
            system.update(world, delta_time).map_err(|e| {
                log::error!("System '{}' failed: {}", system.name(), e);
                e
            })?;
        }
        Ok(())
    }
}
