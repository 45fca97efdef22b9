//! Config domain: RON tuning loader with defaults fallback.

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::player::ControllerTuning;

const TUNING_PATH: &str = "assets/config/controller.ron";

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for hand-edited files.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn load_tuning_file(path: &Path) -> Result<ControllerTuning, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ConfigLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_controller_tuning);
    }
}

/// Replace the default tuning with the on-disk file when present and valid.
/// A broken config file must never abort the app.
fn load_controller_tuning(mut commands: Commands) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            info!("Loaded controller tuning from {}", TUNING_PATH);
            commands.insert_resource(loaded);
        }
        Err(e) => {
            warn!("{}; using default tuning", e);
            commands.insert_resource(ControllerTuning::default());
        }
    }
}
