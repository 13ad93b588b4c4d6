//! Viewport edge tests
//!
//! An entity violates an edge when its square reaches past the right/bottom
//! boundary or its position drops below zero on that axis.

use super::collision::Axis;
use crate::ecs::components::Position;
use crate::foundation::math::utils::clamp;
use serde::{Deserialize, Serialize};

/// How many violated edges are resolved per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Resolve the horizontal edge if it is violated, otherwise the vertical one.
    /// A square crossing a corner only bounces on X that tick.
    #[default]
    FirstAxis,
    /// Resolve each violated axis independently
    BothAxes,
}

/// The area entities bounce inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

/// Which axes of a position are outside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeViolation {
    /// Left or right edge crossed
    pub x: bool,
    /// Top or bottom edge crossed
    pub y: bool,
}

impl Viewport {
    /// Create a viewport
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check a square of side `size` at `position` against the edges
    pub fn violations(&self, position: Position, size: f32) -> EdgeViolation {
        EdgeViolation {
            x: position.x + size > self.width || position.x < 0.0,
            y: position.y + size > self.height || position.y < 0.0,
        }
    }

    /// Clamp one axis of `position` so the square fits inside the viewport
    pub fn clamp_axis(&self, position: &mut Position, size: f32, axis: Axis) {
        match axis {
            Axis::X => position.x = clamp(position.x, 0.0, self.width - size),
            Axis::Y => position.y = clamp(position.y, 0.0, self.height - size),
        }
    }
}

impl EdgeViolation {
    /// Whether any edge is crossed
    pub const fn any(self) -> bool {
        self.x || self.y
    }
}

impl EdgePolicy {
    /// The axes to resolve for a violation, in resolution order
    pub fn axes(self, violation: EdgeViolation) -> impl Iterator<Item = Axis> {
        let (x, y) = match self {
            Self::FirstAxis => (violation.x, violation.y && !violation.x),
            Self::BothAxes => (violation.x, violation.y),
        };
        [(x, Axis::X), (y, Axis::Y)]
            .into_iter()
            .filter_map(|(hit, axis)| hit.then_some(axis))
    }
}
