//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::ecs::EcsError;
use crate::engine::{Engine, EngineError};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a simulation with [`Engine::run`].
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the engine is created. Use this to spawn the initial
    /// entities and register systems.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame after the engine's systems have run.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the main loop ends, whether it stopped normally or on
    /// an error.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Store precondition violated while setting up or updating
    #[error("ECS error: {0}")]
    Ecs(#[from] EcsError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
