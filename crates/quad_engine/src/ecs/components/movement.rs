//! Velocity component for entities that move across the viewport
//!
//! The velocity is a signed direction; the movement system multiplies it by the
//! shared move speed. Components are usually `-1`, `0` or `1`.

/// Movement direction of an entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// Horizontal direction
    pub dx: f32,

    /// Vertical direction
    pub dy: f32,
}

impl Velocity {
    /// Create a velocity
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Reverse the horizontal direction
    pub fn flip_x(&mut self) {
        self.dx = -self.dx;
    }

    /// Reverse the vertical direction
    pub fn flip_y(&mut self) {
        self.dy = -self.dy;
    }

    /// Displacement for one step at `speed` over `delta_time` seconds
    pub fn displacement(&self, speed: f32, delta_time: f32) -> (f32, f32) {
        (delta_time * speed * self.dx, delta_time * speed * self.dy)
    }
}
