//! Core engine implementation

use std::time::{Duration, Instant};

use crate::{
    application::Application,
    config::ConfigError,
    core::{config::SimulationConfig, tuning::Tunable},
    ecs::{
        components::Render,
        EcsError, Entity, Schedule, System, SystemId, World,
    },
    foundation::time::{FrameClock, Timer},
};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns the world and the system schedule and drives frames,
/// either one at a time through [`Engine::tick`] / [`Engine::step`] or in
/// real time through [`Engine::run`].
pub struct Engine {
    /// ECS world containing all entities and components
    pub world: World,

    /// Systems run every frame, in registration order
    schedule: Schedule,

    /// Turns frame timestamps into deltas
    clock: FrameClock,

    /// Shared move speed, seeded from the world configuration
    speed: Tunable,

    /// Configuration the engine was created with
    config: SimulationConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: SimulationConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing engine ({}x{} viewport)...",
            config.world.viewport_width,
            config.world.viewport_height
        );

        Ok(Self {
            world: World::new(),
            schedule: Schedule::new(),
            clock: FrameClock::new(),
            speed: Tunable::new(config.world.move_speed),
            config,
            running: true,
        })
    }

    /// Register a system; systems run in the order they were added
    pub fn add_system(&mut self, system: impl System + 'static) -> SystemId {
        self.schedule.add_system(Box::new(system))
    }

    /// Spawn every entity described by the configured scene
    ///
    /// Each spawn gets a position, a velocity and a render marker.
    pub fn spawn_scene(&mut self) -> Result<Vec<Entity>, EcsError> {
        let viewport = self.config.world.viewport();
        let mut spawned = Vec::with_capacity(self.config.scene.spawns.len());

        for spawn in &self.config.scene.spawns {
            let entity = self.world.create_entity();
            self.world.add_component(entity, spawn.position(viewport))?;
            self.world.add_component(entity, spawn.velocity())?;
            self.world.add_component(
                entity,
                spawn.color().map_or_else(Render::new, Render::with_color),
            )?;
            spawned.push(entity);
        }

        log::info!("Scene spawned with {} entities", spawned.len());
        Ok(spawned)
    }

    /// Run one frame at an animation-frame style timestamp in milliseconds
    ///
    /// Returns the delta, in seconds, the systems were given.
    pub fn tick(&mut self, timestamp_ms: f64) -> Result<f32, EngineError> {
        let delta_time = self.clock.advance(timestamp_ms);
        self.step(delta_time)?;
        Ok(delta_time)
    }

    /// Run one frame with an explicit delta in seconds
    pub fn step(&mut self, delta_time: f32) -> Result<(), EngineError> {
        self.schedule.execute_frame(&mut self.world, delta_time)?;
        Ok(())
    }

    /// Run the engine main loop with the given application
    ///
    /// Stops when the application calls [`Engine::request_stop`] or after
    /// `engine.max_frames` frames. With `engine.target_fps` set, each frame is
    /// padded with sleep up to the frame budget.
    pub fn run<T: Application>(config: SimulationConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;

        // Initialize application
        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        let frame_budget = engine
            .config
            .engine
            .target_fps
            .map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps)));
        let max_frames = engine.config.engine.max_frames;
        let mut timer = Timer::new();

        log::info!("Starting main loop...");

        let result = loop {
            if !engine.running || max_frames.is_some_and(|max| engine.frame_count() >= max) {
                break Ok(());
            }
            let frame_start = Instant::now();

            timer.update();
            let delta_time = match engine.tick(timer.timestamp_ms()) {
                Ok(delta_time) => delta_time,
                Err(e) => break Err(e),
            };

            // Update application
            if let Err(e) = app.update(&mut engine, delta_time) {
                break Err(EngineError::ApplicationError(format!("App update: {e}")));
            }

            if let Some(budget) = frame_budget {
                let elapsed = frame_start.elapsed();
                if elapsed < budget {
                    std::thread::sleep(budget - elapsed);
                }
            }
        };

        log::debug!(
            "Ran {} frames in {:.2}s ({:.1} fps average)",
            timer.frame_count(),
            timer.total_time(),
            timer.average_fps()
        );

        // Cleanup
        app.cleanup(&mut engine);

        log::info!("Engine shutdown complete");
        result
    }

    /// Request engine shutdown after the current frame
    pub fn request_stop(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop keeps running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Handle to the shared move speed
    pub fn speed(&self) -> &Tunable {
        &self.speed
    }

    /// Names of the registered systems, in execution order
    pub fn system_names(&self) -> Vec<&str> {
        self.schedule.system_names().collect()
    }

    /// The configuration the engine was created with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Configuration rejected at startup
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A system failed during a frame
    #[error("System error: {0}")]
    System(#[from] EcsError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}
