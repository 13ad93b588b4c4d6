//! # Simulation Configuration
//!
//! Configuration tree for the engine loop, the simulated world and the initial
//! scene. Every section has defaults, so a file only needs the values it
//! overrides.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: Logging and frame pacing
//! - **World Config**: Viewport, square size, move speed, edge policy
//! - **Scene Config**: The squares spawned at startup

use serde::{Serialize, Deserialize};

use crate::ecs::components::{Color, Position, Velocity};
use crate::physics::{EdgePolicy, Viewport};

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// Side length of every square, in pixels
pub const DEFAULT_ENTITY_SIZE: f32 = 50.0;

/// Default move speed, in pixels per second
pub const DEFAULT_MOVE_SPEED: f32 = 100.0;

/// Fill colors of the default scene, also the fallback render palette
pub const DEFAULT_COLORS: [[u8; 3]; 9] = [
    [8, 65, 215],
    [226, 57, 223],
    [23, 140, 141],
    [215, 76, 20],
    [98, 85, 200],
    [145, 241, 212],
    [45, 3, 146],
    [236, 76, 24],
    [254, 221, 157],
];

const DEFAULT_LOCATIONS: [[f32; 2]; 9] = [
    [0.1, 0.7],
    [0.8, 0.3],
    [0.2, 0.8],
    [0.1, 0.1],
    [0.8, 0.8],
    [0.3, 0.4],
    [0.45, 0.5],
    [0.7, 0.3],
    [0.2, 0.6],
];

/// # Engine Configuration
///
/// Logging and main-loop pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
    /// Target FPS for frame rate limiting; `None` runs unpaced
    pub target_fps: Option<u32>,
    /// Stop after this many frames; `None` runs until the application stops
    pub max_frames: Option<u64>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            target_fps: Some(60),
            max_frames: None,
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set target FPS, or disable pacing with `None`
    #[must_use]
    pub fn with_target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }

    /// Set the frame limit
    #[must_use]
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log level cannot be empty".to_string()));
        }
        if self.target_fps == Some(0) {
            return Err(ConfigError::Invalid("target fps must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # World Configuration
///
/// Geometry and movement tuning of the simulated area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Viewport width in pixels
    pub viewport_width: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,
    /// Side length of every square, in pixels
    pub entity_size: f32,
    /// Initial move speed, in pixels per second
    pub move_speed: f32,
    /// Edge resolution policy
    pub edge_policy: EdgePolicy,
}

impl WorldConfig {
    /// Create a new world configuration
    pub fn new() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            entity_size: DEFAULT_ENTITY_SIZE,
            move_speed: DEFAULT_MOVE_SPEED,
            edge_policy: EdgePolicy::default(),
        }
    }

    /// Set viewport size
    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set move speed
    #[must_use]
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set edge policy
    #[must_use]
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// The configured viewport
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if !(self.entity_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "entity size must be positive, got {}",
                self.entity_size
            )));
        }
        if self.entity_size > self.viewport_width || self.entity_size > self.viewport_height {
            return Err(ConfigError::Invalid(
                "entity size cannot exceed the viewport".to_string(),
            ));
        }
        if !(self.move_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "move speed cannot be negative, got {}",
                self.move_speed
            )));
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One square spawned at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Top-left corner as a fraction of the viewport, each in `0.0..=1.0`
    pub location: [f32; 2],
    /// Initial direction
    pub velocity: [f32; 2],
    /// Fill color; `None` leaves it to the rendering palette
    #[serde(default)]
    pub color: Option<[u8; 3]>,
}

impl SpawnConfig {
    /// Pixel position inside `viewport`
    pub fn position(&self, viewport: Viewport) -> Position {
        Position::from_fraction(self.location[0], self.location[1], viewport.width, viewport.height)
    }

    /// Initial velocity component
    pub fn velocity(&self) -> Velocity {
        Velocity::new(self.velocity[0], self.velocity[1])
    }

    /// Render color, if one was configured
    pub fn color(&self) -> Option<Color> {
        self.color.map(|[r, g, b]| Color::from_rgb8(r, g, b))
    }
}

/// # Scene Configuration
///
/// The squares spawned when the simulation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Squares, in spawn order
    pub spawns: Vec<SpawnConfig>,
}

impl SceneConfig {
    /// The nine-square bouncing scene
    pub fn bouncing_squares() -> Self {
        let spawns = DEFAULT_LOCATIONS
            .iter()
            .zip(DEFAULT_COLORS.iter())
            .enumerate()
            .map(|(i, (location, color))| SpawnConfig {
                location: *location,
                velocity: [1.0, if i % 2 == 0 { 1.0 } else { -1.0 }],
                color: Some(*color),
            })
            .collect();
        Self { spawns }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, spawn) in self.spawns.iter().enumerate() {
            if spawn.location.iter().any(|f| !(0.0..=1.0).contains(f)) {
                return Err(ConfigError::Invalid(format!(
                    "spawn {i} location {:?} is outside 0..=1",
                    spawn.location
                )));
            }
            if spawn.velocity.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "spawn {i} velocity {:?} is not finite",
                    spawn.velocity
                )));
            }
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::bouncing_squares()
    }
}

/// # Complete Simulation Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// World configuration
    pub world: WorldConfig,
    /// Initial scene
    pub scene: SceneConfig,
}

impl SimulationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.world.validate()?;
        self.scene.validate()?;
        Ok(())
    }
}

impl Config for SimulationConfig {}
