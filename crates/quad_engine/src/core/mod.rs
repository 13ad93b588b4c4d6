//! # Core Engine Module
//!
//! Shared configuration and runtime tuning used by the systems and the
//! engine loop.
//!
//! ## Organization
//!
//! - **Config**: Configuration tree for engine, world and scene
//! - **Tuning**: Values that can be changed while the simulation runs

pub mod config;
pub mod tuning;

// Re-export commonly used config types
pub use config::{
    SimulationConfig,
    EngineConfig,
    WorldConfig,
    SceneConfig,
    SpawnConfig,
    Config,
    ConfigError,
};
pub use tuning::Tunable;
