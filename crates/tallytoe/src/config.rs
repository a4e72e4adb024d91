//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tallytoe_engine::BoardSize;
use tracing::{debug, info, instrument};

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: BoardSize,
}

fn default_board_size() -> BoardSize {
    BoardSize::CLASSIC
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = %config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// The size override wins over the file, and the file wins over defaults.
    #[instrument]
    pub fn resolve(path: Option<&Path>, size_override: Option<usize>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(size) = size_override {
            debug!(size, "Overriding board size");
            config.board_size = BoardSize::new(size)
                .map_err(|e| ConfigError::new(format!("Invalid --size {}: {}", size, e)))?;
        }

        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
