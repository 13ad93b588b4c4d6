//! Bouncing squares demo application
//!
//! Spawns nine colored squares that bounce off the viewport edges and off each
//! other, and runs the frame loop headless. Draw commands go to a logging
//! render target; run with `RUST_LOG=trace` to see them.

mod log_target;

use std::path::PathBuf;

use clap::Parser;
use quad_engine::foundation::logging;
use quad_engine::prelude::*;
use thiserror::Error;

use crate::log_target::LogTarget;

/// Frames run when no configuration file is given
const DEFAULT_FRAMES: u64 = 600;

/// Headless bouncing squares simulation
#[derive(Parser, Debug)]
#[command(name = "bouncing_squares", version)]
struct Cli {
    /// Simulation configuration (`.toml` or `.ron`); defaults to the nine-square scene
    config: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to load {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

struct BouncingApp {
    entities: Vec<Entity>,
}

impl BouncingApp {
    fn new() -> Self {
        Self { entities: Vec::new() }
    }
}

impl Application for BouncingApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        self.entities = engine.spawn_scene()?;

        let world_config = engine.config().world.clone();
        let rendering = RenderingSystem::new(LogTarget::default(), world_config.entity_size);
        let movement = MovementSystem::from_config(&world_config, engine.speed().clone());

        // Draw the current state before moving it
        engine.add_system(rendering);
        engine.add_system(movement);

        log::info!(
            "Bouncing {} squares at {} px/s ({:?} edge policy)",
            self.entities.len(),
            world_config.move_speed,
            world_config.edge_policy
        );
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!("Stopped after {} frames", engine.frame_count());
        for &entity in &self.entities {
            if let Ok(Some(position)) = engine.world.get_component::<Position>(entity) {
                log::debug!("{entity} final position ({:.1}, {:.1})", position.x, position.y);
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<SimulationConfig, CliError> {
    match &cli.config {
        Some(path) => SimulationConfig::load_from_file(path).map_err(|source| CliError::Config {
            path: path.clone(),
            source,
        }),
        None => {
            let mut config = SimulationConfig::default();
            config.engine = config.engine.with_max_frames(DEFAULT_FRAMES);
            Ok(config)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    logging::init_with_level(&config.engine.log_level);

    let mut app = BouncingApp::new();
    Engine::run(config, &mut app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_path_is_optional() {
        let cli = Cli::try_parse_from(["bouncing_squares"]).unwrap();
        assert!(cli.config.is_none());

        let config = load_config(&cli).unwrap();
        assert_eq!(config.engine.max_frames, Some(DEFAULT_FRAMES));
        assert_eq!(config.scene.spawns.len(), 9);
    }

    #[test]
    fn test_config_path_and_extra_arguments() {
        let cli = Cli::try_parse_from(["bouncing_squares", "scene.ron"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("scene.ron")));

        assert!(Cli::try_parse_from(["bouncing_squares", "a.toml", "b.toml"]).is_err());
    }

    #[test]
    fn test_missing_config_file_names_the_path() {
        let cli = Cli::try_parse_from(["bouncing_squares", "does/not/exist.toml"]).unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
