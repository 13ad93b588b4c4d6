//! Movement system with viewport bounce and pairwise square collisions
//!
//! Each tick, every entity with a `Position` and a `Velocity` is processed in
//! creation order:
//!
//! 1. Its position advances by `velocity * speed * delta_time`.
//! 2. Violated viewport edges are resolved according to the [`EdgePolicy`]:
//!    the step on that axis is undone, the velocity sign on that axis flips,
//!    and the axis is clamped back inside the viewport.
//! 3. It is tested against every other moving entity. On overlap the step on
//!    the chosen axis is undone for this entity only, the axis is clamped back
//!    inside the viewport, and both entities flip their velocity on that axis.
//!
//! Undo subtracts `delta_time * speed * velocity` using the velocity as it is
//! at that moment, so a velocity that was already flipped earlier in the tick
//! moves the entity on instead of back.
//!
//! Pair checks are O(n²), which is fine for a handful of squares.

use crate::core::config::WorldConfig;
use crate::core::tuning::Tunable;
use crate::ecs::components::{Position, Velocity};
use crate::ecs::{ComponentKind, EcsError, Entity, Query, System, World};
use crate::physics::{bounce_axis, Aabb, Axis, EdgePolicy, Viewport};

/// Counters from the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementStats {
    /// Entities integrated
    pub moved: usize,
    /// Edge resolutions applied
    pub edge_bounces: usize,
    /// Pair bounces applied
    pub pair_bounces: usize,
}

/// Moves entities and bounces them off the viewport edges and each other
#[derive(Debug)]
pub struct MovementSystem {
    viewport: Viewport,
    entity_size: f32,
    edge_policy: EdgePolicy,
    speed: Tunable,
    query: Query,
    last_stats: MovementStats,
}

impl MovementSystem {
    /// Create a movement system for squares of side `entity_size`
    pub fn new(viewport: Viewport, entity_size: f32, speed: Tunable) -> Self {
        Self {
            viewport,
            entity_size,
            edge_policy: EdgePolicy::default(),
            speed,
            query: Query::new(&[ComponentKind::Position, ComponentKind::Velocity]),
            last_stats: MovementStats::default(),
        }
    }

    /// Create a movement system from world configuration
    pub fn from_config(config: &WorldConfig, speed: Tunable) -> Self {
        Self::new(config.viewport(), config.entity_size, speed).with_edge_policy(config.edge_policy)
    }

    /// Set the edge policy
    #[must_use]
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Resize the viewport, e.g. after the canvas changed
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The move speed handle read every tick
    pub fn speed(&self) -> &Tunable {
        &self.speed
    }

    /// Counters from the most recent tick
    pub fn last_stats(&self) -> MovementStats {
        self.last_stats
    }

    fn resolve_edges(
        &self,
        position: &mut Position,
        velocity: &mut Velocity,
        step: f32,
        stats: &mut MovementStats,
    ) {
        let violation = self.viewport.violations(*position, self.entity_size);
        for axis in self.edge_policy.axes(violation) {
            undo_and_flip(position, velocity, step, axis);
            self.viewport.clamp_axis(position, self.entity_size, axis);
            stats.edge_bounces += 1;
        }
    }

    fn resolve_pairs(
        &self,
        world: &mut World,
        entity: Entity,
        candidates: &[Entity],
        position: &mut Position,
        velocity: &mut Velocity,
        step: f32,
        stats: &mut MovementStats,
    ) -> Result<(), EcsError> {
        for &other in candidates {
            if other == entity {
                continue;
            }
            let Some(other_position) = world.get_component::<Position>(other)?.copied() else {
                continue;
            };

            let bounds = Aabb::square(*position, self.entity_size);
            if !bounds.intersects(&Aabb::square(other_position, self.entity_size)) {
                continue;
            }

            let axis = bounce_axis(*position, other_position, self.entity_size);
            undo_and_flip(position, velocity, step, axis);
            // An undo after an edge flip moves outward on that axis
            self.viewport.clamp_axis(position, self.entity_size, axis);
            if let Some(other_velocity) = world.get_component_mut::<Velocity>(other)? {
                flip(other_velocity, axis);
            }
            stats.pair_bounces += 1;
        }
        Ok(())
    }
}

impl System for MovementSystem {
    fn name(&self) -> &str {
        "movement"
    }

    fn update(&mut self, world: &mut World, delta_time: f32) -> Result<(), EcsError> {
        let speed = self.speed.get();
        let step = delta_time * speed;
        let entities = self.query.collect(world);
        let mut stats = MovementStats::default();

        for &entity in &entities {
            let (Some(mut position), Some(mut velocity)) = (
                world.get_component::<Position>(entity)?.copied(),
                world.get_component::<Velocity>(entity)?.copied(),
            ) else {
                continue;
            };

            // Move first, then resolve collisions against the moved square
            let (dx, dy) = velocity.displacement(speed, delta_time);
            position.x += dx;
            position.y += dy;
            stats.moved += 1;

            self.resolve_edges(&mut position, &mut velocity, step, &mut stats);
            self.resolve_pairs(world, entity, &entities, &mut position, &mut velocity, step, &mut stats)?;

            if let Some(stored) = world.get_component_mut::<Position>(entity)? {
                *stored = position;
            }
            if let Some(stored) = world.get_component_mut::<Velocity>(entity)? {
                *stored = velocity;
            }
        }

        if stats.edge_bounces + stats.pair_bounces > 0 {
            log::trace!(
                "Movement tick: {} moved, {} edge bounces, {} pair bounces",
                stats.moved,
                stats.edge_bounces,
                stats.pair_bounces
            );
        }
        self.last_stats = stats;
        Ok(())
    }
}

fn flip(velocity: &mut Velocity, axis: Axis) {
    match axis {
        Axis::X => velocity.flip_x(),
        Axis::Y => velocity.flip_y(),
    }
}

fn undo_and_flip(position: &mut Position, velocity: &mut Velocity, step: f32, axis: Axis) {
    match axis {
        Axis::X => position.x -= step * velocity.dx,
        Axis::Y => position.y -= step * velocity.dy,
    }
    flip(velocity, axis);
}
