//! Session configuration.

use crate::games::tictactoe::{Difficulty, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings fixed for the lifetime of a game session.
///
/// Changing any of them goes through
/// [`GameSession::configure`](crate::GameSession::configure), which resets the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SessionConfig {
    /// Mark that moves first after a reset.
    starting_mark: Player,

    /// Strength of the computer opponent.
    difficulty: Difficulty,

    /// Mark played by the computer, `None` for two human players.
    computer: Option<Player>,

    /// Seed for the random presets.
    seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_mark: Player::X,
            difficulty: Difficulty::default(),
            computer: Some(Player::O),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with a computer opponent playing O.
    #[instrument]
    pub fn new(starting_mark: Player, difficulty: Difficulty) -> Self {
        Self {
            starting_mark,
            difficulty,
            ..Self::default()
        }
    }

    /// True when `mark` is played by the computer.
    pub fn is_computer(&self, mark: Player) -> bool {
        self.computer == Some(mark)
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            starting_mark = %config.starting_mark,
            difficulty = %config.difficulty,
            computer = ?config.computer,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_setup() {
        let config = SessionConfig::default();
        assert_eq!(*config.starting_mark(), Player::X);
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert!(config.is_computer(Player::O));
        assert!(!config.is_computer(Player::X));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SessionConfig::from_toml_str("difficulty = \"Hard\"\n").unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.starting_mark(), Player::X);
        assert_eq!(*config.computer(), Some(Player::O));
    }

    #[test]
    fn test_setters_chain() {
        let config = SessionConfig::default()
            .with_starting_mark(Player::O)
            .with_computer(None)
            .with_seed(Some(3));
        assert_eq!(*config.starting_mark(), Player::O);
        assert_eq!(*config.computer(), None);
        assert_eq!(*config.seed(), Some(3));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = SessionConfig::from_toml_str("difficulty = \"Brutal\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
