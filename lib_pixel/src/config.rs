use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::color::Color;
use crate::constants::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Initial state of a new canvas.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub grid_size: u32,
    pub background: Color,
    pub initial_color: Color,
    pub grid_lines_visible: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            background: Color::WHITE,
            initial_color: Color::BLACK,
            grid_lines_visible: true,
        }
    }
}

impl CanvasConfig {
    /// Parses a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.grid_size = clamp_grid_size(config.grid_size);
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Clamps a requested side length to the range the size control offers.
pub fn clamp_grid_size(size: u32) -> u32 {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}
