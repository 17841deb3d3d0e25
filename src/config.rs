//! Game configuration loaded from TOML.

use crate::games::tictactoe::Players;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player labels.
    players: PlayerNames,
    /// End-of-game notifications.
    messages: Messages,
    /// Log destination for the terminal UI.
    logging: LoggingConfig,
}

/// Display labels for the two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct PlayerNames {
    /// Label of the player who opens each game (mark X).
    first: String,
    /// Label of the second player (mark O).
    second: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            first: "Player 1".to_string(),
            second: "Player 2".to_string(),
        }
    }
}

/// Text shown when a game ends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown on a win, followed by the winner.
    win: String,
    /// Shown when the board fills without a winner.
    draw: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            win: "WINNER WINNER, CHICKEN DINNER!".to_string(),
            draw: "Nobody wins this one.".to_string(),
        }
    }
}

/// Where the terminal UI sends its logs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path.
    file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first = %config.players.first, second = %config.players.second, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds the player pair from the configured labels.
    pub fn build_players(&self) -> Players {
        Players::new(self.players.first.clone(), self.players.second.clone())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
