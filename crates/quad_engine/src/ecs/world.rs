//! ECS World implementation
//!
//! The world owns every entity and component. Entities are kept in creation
//! order and each one maps to a fixed array of component slots indexed by
//! [`ComponentKind`], alongside a mask of the occupied slots.

use super::component::{Component, ComponentKind, ComponentMask, ComponentType};
use super::Entity;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use thiserror::Error;

/// Errors raised by world operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcsError {
    /// The entity was never created by this world, or has been destroyed
    #[error("unknown entity: {0}")]
    UnknownEntity(Entity),
}

/// The components attached to one entity
#[derive(Debug, Clone, Default)]
struct ComponentSet {
    mask: ComponentMask,
    slots: [Option<Component>; ComponentKind::COUNT],
}

impl ComponentSet {
    fn insert(&mut self, component: Component) -> Option<Component> {
        let kind = component.kind();
        self.mask.insert(kind.mask());
        self.slots[kind.index()].replace(component)
    }

    fn remove(&mut self, kind: ComponentKind) -> Option<Component> {
        self.mask.remove(kind.mask());
        self.slots[kind.index()].take()
    }

    fn get(&self, kind: ComponentKind) -> Option<&Component> {
        self.slots[kind.index()].as_ref()
    }

    fn get_mut(&mut self, kind: ComponentKind) -> Option<&mut Component> {
        self.slots[kind.index()].as_mut()
    }
}

/// Source of world ids, so entities from different worlds never compare equal
static NEXT_WORLD_ID: AtomicU32 = AtomicU32::new(0);

/// ECS World containing all entities and components
#[derive(Debug)]
pub struct World {
    world_id: u32,
    next_entity_id: u32,
    entities: Vec<Entity>,
    components: HashMap<Entity, ComponentSet>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self {
            world_id: NEXT_WORLD_ID.fetch_add(1, Ordering::Relaxed),
            next_entity_id: 0,
            entities: Vec::new(),
            components: HashMap::new(),
        }
    }

    /// Create a new entity with no components
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::new(self.world_id, self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(entity);
        self.components.insert(entity, ComponentSet::default());
        entity
    }

    /// Destroy an entity and drop all of its components.
    ///
    /// The id is not handed out again by this world.
    pub fn destroy_entity(&mut self, entity: Entity) -> Result<(), EcsError> {
        self.components
            .remove(&entity)
            .ok_or(EcsError::UnknownEntity(entity))?;
        self.entities.retain(|&e| e != entity);
        Ok(())
    }

    /// Whether the entity is alive in this world
    pub fn contains(&self, entity: Entity) -> bool {
        self.components.contains_key(&entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Attach a component, replacing any component of the same kind.
    ///
    /// Returns the replaced component, if there was one.
    pub fn add_component<C: Into<Component>>(
        &mut self,
        entity: Entity,
        component: C,
    ) -> Result<Option<Component>, EcsError> {
        Ok(self.set_mut(entity)?.insert(component.into()))
    }

    /// Detach the component of the given kind, returning it if it was present
    pub fn remove_component(
        &mut self,
        entity: Entity,
        kind: ComponentKind,
    ) -> Result<Option<Component>, EcsError> {
        Ok(self.set_mut(entity)?.remove(kind))
    }

    /// Get a component from an entity
    ///
    /// `Ok(None)` means the entity exists but has no component of type `T`.
    pub fn get_component<T: ComponentType>(&self, entity: Entity) -> Result<Option<&T>, EcsError> {
        Ok(self.set(entity)?.get(T::KIND).and_then(T::from_component))
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: ComponentType>(
        &mut self,
        entity: Entity,
    ) -> Result<Option<&mut T>, EcsError> {
        Ok(self.set_mut(entity)?.get_mut(T::KIND).and_then(T::from_component_mut))
    }

    /// Get a component by kind, without naming its type
    pub fn component(&self, entity: Entity, kind: ComponentKind) -> Result<Option<&Component>, EcsError> {
        Ok(self.set(entity)?.get(kind))
    }

    /// Whether the entity carries every kind in `mask`
    pub fn has_components(&self, entity: Entity, mask: ComponentMask) -> Result<bool, EcsError> {
        Ok(self.set(entity)?.mask.contains(mask))
    }

    /// Entities holding every listed component kind, in creation order.
    ///
    /// An empty list matches every entity.
    pub fn entities_with_components(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        self.entities_matching(ComponentMask::from_kinds(kinds))
            .collect()
    }

    /// Lazily iterate entities whose components contain `mask`, in creation order
    pub fn entities_matching(&self, mask: ComponentMask) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied().filter(move |entity| {
            self.components
                .get(entity)
                .is_some_and(|set| set.mask.contains(mask))
        })
    }

    /// Get an iterator over all entities, in creation order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    fn owns(&self, entity: Entity) -> Result<(), EcsError> {
        if entity.world() == self.world_id {
            Ok(())
        } else {
            Err(EcsError::UnknownEntity(entity))
        }
    }

    fn set(&self, entity: Entity) -> Result<&ComponentSet, EcsError> {
        self.owns(entity)?;
        self.components.get(&entity).ok_or(EcsError::UnknownEntity(entity))
    }

    fn set_mut(&mut self, entity: Entity) -> Result<&mut ComponentSet, EcsError> {
        self.owns(entity)?;
        self.components.get_mut(&entity).ok_or(EcsError::UnknownEntity(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Color, Position, Render, Velocity};

    #[test]
    fn test_entity_ids_are_monotonic() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let c = world.create_entity();

        assert!(a.id() < b.id() && b.id() < c.id());
        assert_eq!(world.entity_count(), 3);
    }

    #[test]
    fn test_empty_query_returns_every_entity_once() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        world.add_component(b, Position::new(0.0, 0.0)).unwrap();
        let c = world.create_entity();

        assert_eq!(world.entities_with_components(&[]), vec![a, b, c]);
    }

    #[test]
    fn test_query_requires_all_kinds() {
        let mut world = World::new();
        let moving = world.create_entity();
        world.add_component(moving, Position::new(0.0, 0.0)).unwrap();
        world.add_component(moving, Velocity::new(1.0, 0.0)).unwrap();

        let still = world.create_entity();
        world.add_component(still, Position::new(5.0, 5.0)).unwrap();

        let query = [ComponentKind::Position, ComponentKind::Velocity];
        assert_eq!(world.entities_with_components(&query), vec![moving]);

        world.remove_component(moving, ComponentKind::Velocity).unwrap();
        assert!(world.entities_with_components(&query).is_empty());
    }

    #[test]
    fn test_query_order_follows_creation_not_insertion() {
        let mut world = World::new();
        let first = world.create_entity();
        let second = world.create_entity();
        let third = world.create_entity();

        for entity in [third, first, second] {
            world.add_component(entity, Velocity::new(1.0, 1.0)).unwrap();
            world.add_component(entity, Position::new(0.0, 0.0)).unwrap();
        }

        let query = [ComponentKind::Velocity, ComponentKind::Position];
        assert_eq!(world.entities_with_components(&query), vec![first, second, third]);
    }

    #[test]
    fn test_add_component_last_write_wins() {
        let mut world = World::new();
        let entity = world.create_entity();

        assert_eq!(world.add_component(entity, Position::new(1.0, 2.0)).unwrap(), None);
        let replaced = world.add_component(entity, Position::new(3.0, 4.0)).unwrap();

        assert_eq!(replaced, Some(Component::Position(Position::new(1.0, 2.0))));
        assert_eq!(
            world.get_component::<Position>(entity).unwrap(),
            Some(&Position::new(3.0, 4.0))
        );
        assert_eq!(
            world.entities_with_components(&[ComponentKind::Position]),
            vec![entity]
        );
    }

    #[test]
    fn test_missing_component_is_absent_not_error() {
        let mut world = World::new();
        let entity = world.create_entity();

        assert_eq!(world.get_component::<Velocity>(entity), Ok(None));
        assert_eq!(world.component(entity, ComponentKind::Render), Ok(None));
    }

    #[test]
    fn test_unknown_entity_is_an_error() {
        let mut world = World::new();
        let mut other = World::new();
        other.create_entity();
        let foreign = other.create_entity();

        assert_eq!(
            world.add_component(foreign, Position::new(0.0, 0.0)),
            Err(EcsError::UnknownEntity(foreign))
        );
        assert_eq!(world.get_component::<Position>(foreign), Err(EcsError::UnknownEntity(foreign)));
        assert!(world.get_component_mut::<Position>(foreign).is_err());
        assert!(world.remove_component(foreign, ComponentKind::Position).is_err());
    }

    #[test]
    fn test_same_id_from_another_world_is_rejected() {
        let mut home = World::new();
        let mut away = World::new();
        let local = home.create_entity();
        let foreign = away.create_entity();

        assert_eq!(local.id(), foreign.id());
        assert_ne!(local, foreign);
        assert!(!home.contains(foreign));
        assert_eq!(
            home.add_component(foreign, Position::new(1.0, 1.0)),
            Err(EcsError::UnknownEntity(foreign))
        );
        assert_eq!(home.get_component::<Position>(foreign), Err(EcsError::UnknownEntity(foreign)));
        assert_eq!(home.destroy_entity(foreign), Err(EcsError::UnknownEntity(foreign)));

        // The local entity with the same id is untouched
        assert_eq!(home.get_component::<Position>(local), Ok(None));
        assert_eq!(home.entity_count(), 1);
    }

    #[test]
    fn test_mutation_in_place() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Velocity::new(1.0, 1.0)).unwrap();

        if let Some(velocity) = world.get_component_mut::<Velocity>(entity).unwrap() {
            velocity.flip_x();
        }

        assert_eq!(
            world.get_component::<Velocity>(entity).unwrap(),
            Some(&Velocity::new(-1.0, 1.0))
        );
    }

    #[test]
    fn test_destroy_entity() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        world.add_component(a, Render::with_color(Color::BLACK)).unwrap();

        world.destroy_entity(a).unwrap();

        assert!(!world.contains(a));
        assert_eq!(world.entities().copied().collect::<Vec<_>>(), vec![b]);
        assert_eq!(world.get_component::<Render>(a), Err(EcsError::UnknownEntity(a)));
        assert_eq!(world.destroy_entity(a), Err(EcsError::UnknownEntity(a)));

        // Ids are not recycled
        let c = world.create_entity();
        assert_ne!(c, a);
        assert!(c.id() > b.id());
    }

    #[test]
    fn test_has_components() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Position::new(0.0, 0.0)).unwrap();

        assert_eq!(world.has_components(entity, ComponentMask::POSITION), Ok(true));
        assert_eq!(
            world.has_components(entity, ComponentMask::POSITION | ComponentMask::RENDER),
            Ok(false)
        );
        assert_eq!(world.has_components(entity, ComponentMask::empty()), Ok(true));
    }
}
