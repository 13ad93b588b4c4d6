//! Entity implementation

use std::fmt;

/// Entity identifier
///
/// Ids are handed out by a [`World`](super::World) in increasing order and
/// never reused within that world. Each entity also carries the id of the
/// world that created it, so an entity is only ever valid in its own world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    id: u32,
    world: u32,
}

impl Entity {
    /// Create a new entity with the given ID, owned by world `world`
    pub(super) fn new(world: u32, id: u32) -> Self {
        Self { id, world }
    }

    /// Get the entity ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Id of the world that created this entity
    pub(super) fn world(&self) -> u32 {
        self.world
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.id)
    }
}
