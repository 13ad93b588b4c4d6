//! Query system for component access

use super::{ComponentKind, ComponentMask, Entity, World};

/// A reusable filter selecting entities that carry a set of component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Query {
    mask: ComponentMask,
}

impl Query {
    /// Create a query for the given kinds. An empty list matches every entity.
    pub fn new(kinds: &[ComponentKind]) -> Self {
        Self {
            mask: ComponentMask::from_kinds(kinds),
        }
    }

    /// Add a required kind
    #[must_use]
    pub fn with(mut self, kind: ComponentKind) -> Self {
        self.mask |= kind.mask();
        self
    }

    /// The kinds this query requires
    pub fn mask(&self) -> ComponentMask {
        self.mask
    }

    /// Matching entities in creation order
    pub fn iter<'w>(&self, world: &'w World) -> impl Iterator<Item = Entity> + 'w {
        world.entities_matching(self.mask)
    }

    /// Collect matching entities, so the world can be mutated while walking them
    pub fn collect(&self, world: &World) -> Vec<Entity> {
        self.iter(world).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Position, Render, Velocity};

    #[test]
    fn test_builder_matches_list_form() {
        let built = Query::default()
            .with(ComponentKind::Position)
            .with(ComponentKind::Velocity);
        assert_eq!(built, Query::new(&[ComponentKind::Velocity, ComponentKind::Position]));
    }

    #[test]
    fn test_iter_filters_entities() {
        let mut world = World::new();
        let drawn = world.create_entity();
        world.add_component(drawn, Position::new(0.0, 0.0)).unwrap();
        world.add_component(drawn, Render::new()).unwrap();

        let moving = world.create_entity();
        world.add_component(moving, Position::new(0.0, 0.0)).unwrap();
        world.add_component(moving, Velocity::new(1.0, 0.0)).unwrap();

        let render_query = Query::new(&[ComponentKind::Render, ComponentKind::Position]);
        assert_eq!(render_query.collect(&world), vec![drawn]);

        let position_query = Query::new(&[ComponentKind::Position]);
        assert_eq!(position_query.iter(&world).count(), 2);
    }
}
