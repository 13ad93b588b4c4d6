//! # Quad Engine
//!
//! A small 2D engine built around a minimal Entity-Component-System.
//!
//! ## Features
//!
//! - **ECS Architecture**: Entity store with a closed set of component kinds
//! - **Bounce Physics**: Viewport edge and pairwise AABB bounces for fixed-size squares
//! - **Pluggable Rendering**: Draw commands handed to any [`ecs::systems::RenderTarget`]
//! - **File Configuration**: TOML or RON configuration with validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quad_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let entity = engine.world.create_entity();
//!         engine.world.add_component(entity, Position::new(10.0, 10.0))?;
//!         engine.world.add_component(entity, Velocity::new(1.0, 1.0))?;
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SimulationConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod physics;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineError,
        foundation::{
            math::{Vec2, Mat3},
            time::{Timer, FrameClock},
        },
        ecs::{World, Entity, Component, ComponentKind, System, Query, Schedule, EcsError},
        ecs::components::{Position, Velocity, Render, Color},
        ecs::systems::{MovementSystem, RenderingSystem, RenderTarget, DrawCommand, DrawList},
        physics::EdgePolicy,
        core::config::{SimulationConfig, EngineConfig, WorldConfig, SceneConfig, SpawnConfig},
        core::tuning::Tunable,
        config::{Config, ConfigError},
    };
}
