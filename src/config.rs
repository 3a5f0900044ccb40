//! Game configuration loaded from TOML.

use crate::games::tictactoe::Mark;
use crate::search::SearchMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Search mode used by the computer.
    #[serde(default)]
    search_mode: SearchMode,

    /// Which side moves first.
    #[serde(default = "default_first_player")]
    first_player: Mark,
}

fn default_first_player() -> Mark {
    Mark::Human
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(search_mode: SearchMode, first_player: Mark) -> Self {
        Self {
            search_mode,
            first_player,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            search_mode = %config.search_mode,
            first_player = %config.first_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Overrides the search mode when `Some`.
    pub fn with_search_mode(mut self, mode: Option<SearchMode>) -> Self {
        if let Some(mode) = mode {
            self.search_mode = mode;
        }
        self
    }

    /// Overrides the first player when `Some`.
    pub fn with_first_player(mut self, first: Option<Mark>) -> Self {
        if let Some(first) = first {
            self.first_player = first;
        }
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(SearchMode::default(), default_first_player())
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
