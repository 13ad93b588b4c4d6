//! Render component for entities that should be drawn
//!
//! The component is a marker; its optional color is metadata for the
//! rendering system, which falls back to a palette when none is set.

use serde::{Deserialize, Serialize};

/// RGBA color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from float channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Channels as an array, in RGBA order
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Marks an entity as renderable
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Render {
    /// Fill color; `None` lets the rendering system pick one
    pub color: Option<Color>,
}

impl Render {
    /// A render marker without a color
    pub const fn new() -> Self {
        Self { color: None }
    }

    /// A render marker with a fixed color
    pub const fn with_color(color: Color) -> Self {
        Self { color: Some(color) }
    }
}
