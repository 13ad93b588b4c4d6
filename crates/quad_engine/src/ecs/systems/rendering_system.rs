//! # Rendering System
//!
//! Collects every entity that has both a `Render` and a `Position` component
//! and hands one [`DrawCommand`] per entity to a [`RenderTarget`]. The system
//! never mutates the world, so it can run before or after movement.

use crate::core::config::DEFAULT_COLORS;
use crate::ecs::components::{Color, Position, Render};
use crate::ecs::{ComponentKind, EcsError, Entity, Query, System, World};
use crate::foundation::math::{Mat3, Mat3Ext, Point2};

/// A single square to draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Entity this command was built from
    pub entity: Entity,

    /// Translation to the square's top-left corner
    pub transform: Mat3,

    /// Side length in pixels
    pub size: f32,

    /// Fill color
    pub color: Color,
}

impl DrawCommand {
    /// Top-left corner of the square in viewport pixels
    pub fn origin(&self) -> Point2 {
        self.transform.transform_point(&Point2::origin())
    }
}

/// Backend that accepts draw commands
///
/// `begin_frame` and `end_frame` bracket every frame, `draw` is called in
/// entity creation order between them.
pub trait RenderTarget {
    /// Start a frame, clearing to `clear_color`
    fn begin_frame(&mut self, clear_color: Color);

    /// Draw one square
    fn draw(&mut self, command: &DrawCommand);

    /// Finish a frame
    fn end_frame(&mut self) {}
}

/// In-memory render target that records the last frame
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    clear_color: Option<Color>,
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear color of the last frame, if any frame started
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// Commands of the last frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of completed frames
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderTarget for DrawList {
    fn begin_frame(&mut self, clear_color: Color) {
        self.clear_color = Some(clear_color);
        self.commands.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

/// System responsible for turning renderable entities into draw commands
#[derive(Debug)]
pub struct RenderingSystem<T: RenderTarget> {
    target: T,
    entity_size: f32,
    clear_color: Color,
    palette: Vec<Color>,
    query: Query,
}

impl<T: RenderTarget> RenderingSystem<T> {
    /// Create a rendering system drawing squares of side `entity_size`
    pub fn new(target: T, entity_size: f32) -> Self {
        Self {
            target,
            entity_size,
            clear_color: Color::BLACK,
            palette: DEFAULT_COLORS
                .iter()
                .map(|&[r, g, b]| Color::from_rgb8(r, g, b))
                .collect(),
            query: Query::new(&[ComponentKind::Render, ComponentKind::Position]),
        }
    }

    /// Set the color each frame is cleared to
    #[must_use]
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Replace the fallback palette used for entities without a color
    ///
    /// With an empty palette uncolored entities are drawn white.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// The render target
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the render target
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consume the system and return its target
    pub fn into_target(self) -> T {
        self.target
    }

    fn fallback_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            Color::new(1.0, 1.0, 1.0, 1.0)
        } else {
            self.palette[index % self.palette.len()]
        }
    }

    /// Draw one frame, returning the number of commands submitted
    pub fn render(&mut self, world: &World) -> Result<usize, EcsError> {
        self.target.begin_frame(self.clear_color);

        let mut drawn = 0;
        for entity in self.query.collect(world) {
            let (Some(position), Some(render)) = (
                world.get_component::<Position>(entity)?,
                world.get_component::<Render>(entity)?,
            ) else {
                continue;
            };

            let command = DrawCommand {
                entity,
                transform: Mat3::translation(position.x, position.y),
                size: self.entity_size,
                color: render.color.unwrap_or_else(|| self.fallback_color(drawn)),
            };
            self.target.draw(&command);
            drawn += 1;
        }

        self.target.end_frame();
        Ok(drawn)
    }
}

impl<T: RenderTarget> System for RenderingSystem<T> {
    fn name(&self) -> &str {
        "rendering"
    }

    fn update(&mut self, world: &mut World, _delta_time: f32) -> Result<(), EcsError> {
        let drawn = self.render(world)?;
        log::trace!("Rendered {drawn} entities");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Velocity;
    use approx::assert_relative_eq;

    fn renderable(world: &mut World, x: f32, y: f32, color: Option<Color>) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, Position::new(x, y)).unwrap();
        world.add_component(entity, Render { color }).unwrap();
        entity
    }

    #[test]
    fn test_draws_renderable_entities_in_creation_order() {
        let mut world = World::new();
        let red = Color::from_rgb8(255, 0, 0);
        let first = renderable(&mut world, 10.0, 20.0, Some(red));
        let second = renderable(&mut world, 30.0, 40.0, None);

        let mut system = RenderingSystem::new(DrawList::new(), 50.0);
        system.update(&mut world, 0.016).unwrap();

        let commands = system.target().commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].entity, first);
        assert_eq!(commands[0].color, red);
        assert_eq!(commands[1].entity, second);
        assert_relative_eq!(commands[1].size, 50.0);

        let origin = commands[1].origin();
        assert_relative_eq!(origin.x, 30.0);
        assert_relative_eq!(origin.y, 40.0);
    }

    #[test]
    fn test_palette_fallback_wraps() {
        let mut world = World::new();
        for i in 0..3 {
            renderable(&mut world, i as f32, 0.0, None);
        }

        let a = Color::from_rgb8(1, 2, 3);
        let b = Color::from_rgb8(4, 5, 6);
        let mut system = RenderingSystem::new(DrawList::new(), 10.0).with_palette(vec![a, b]);
        system.render(&world).unwrap();

        let colors: Vec<Color> = system.target().commands().iter().map(|c| c.color).collect();
        assert_eq!(colors, vec![a, b, a]);
    }

    #[test]
    fn test_skips_entities_missing_render_or_position() {
        let mut world = World::new();
        let hidden = world.create_entity();
        world.add_component(hidden, Position::new(0.0, 0.0)).unwrap();
        let unplaced = world.create_entity();
        world.add_component(unplaced, Render::new()).unwrap();
        let shown = renderable(&mut world, 5.0, 5.0, None);

        let mut system = RenderingSystem::new(DrawList::new(), 50.0);
        assert_eq!(system.render(&world).unwrap(), 1);
        assert_eq!(system.target().commands()[0].entity, shown);
    }

    #[test]
    fn test_frame_bracketing_and_clear_color() {
        let mut world = World::new();
        renderable(&mut world, 0.0, 0.0, None);

        let white = Color::new(1.0, 1.0, 1.0, 1.0);
        let mut system = RenderingSystem::new(DrawList::new(), 50.0).with_clear_color(white);
        system.render(&world).unwrap();
        system.render(&world).unwrap();

        let target = system.into_target();
        assert_eq!(target.frames(), 2);
        assert_eq!(target.clear_color(), Some(white));
        // Each frame starts from an empty list
        assert_eq!(target.commands().len(), 1);
    }

    #[test]
    fn test_does_not_touch_the_world() {
        let mut world = World::new();
        let entity = renderable(&mut world, 12.0, 34.0, None);
        world.add_component(entity, Velocity::new(1.0, -1.0)).unwrap();

        let mut system = RenderingSystem::new(DrawList::new(), 50.0);
        system.update(&mut world, 1.0).unwrap();

        assert_eq!(*world.get_component::<Position>(entity).unwrap().unwrap(), Position::new(12.0, 34.0));
        assert_eq!(*world.get_component::<Velocity>(entity).unwrap().unwrap(), Velocity::new(1.0, -1.0));
    }
}
