//! Host configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use mega_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for saves, autosave and board symbols.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory holding save files.
    #[serde(default = "default_saves_dir")]
    saves_dir: PathBuf,

    /// Autosave after every this many accepted moves (0 disables).
    #[serde(default = "default_autosave_every")]
    autosave_every: u32,

    /// Save name used by autosave.
    #[serde(default = "default_autosave_name")]
    autosave_name: String,

    /// Symbol drawn for Player 1.
    #[serde(default = "default_player1_symbol")]
    player1_symbol: char,

    /// Symbol drawn for Player 2.
    #[serde(default = "default_player2_symbol")]
    player2_symbol: char,
}

fn default_saves_dir() -> PathBuf {
    PathBuf::from("saves")
}

fn default_autosave_every() -> u32 {
    5
}

fn default_autosave_name() -> String {
    "autosave".to_string()
}

fn default_player1_symbol() -> char {
    'O'
}

fn default_player2_symbol() -> char {
    'X'
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            saves_dir: default_saves_dir(),
            autosave_every: default_autosave_every(),
            autosave_name: default_autosave_name(),
            player1_symbol: default_player1_symbol(),
            player2_symbol: default_player2_symbol(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed,
    /// or if both players are given the same symbol.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.player1_symbol == config.player2_symbol {
            return Err(ConfigError::new(format!(
                "Both players use the symbol '{}'",
                config.player1_symbol
            )));
        }

        info!(saves_dir = %config.saves_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the saves directory.
    pub fn with_saves_dir(mut self, saves_dir: impl Into<PathBuf>) -> Self {
        self.saves_dir = saves_dir.into();
        self
    }

    /// Overrides the autosave interval.
    pub fn with_autosave_every(mut self, autosave_every: u32) -> Self {
        self.autosave_every = autosave_every;
        self
    }

    /// Symbol drawn for `player`.
    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::Player1 => self.player1_symbol,
            Player::Player2 => self.player2_symbol,
        }
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
    fn test_missing_file_uses_defaults() {
        let config = GameConfig::load("definitely/not/here.toml").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.autosave_every(), 5);
        assert_eq!(config.symbol(Player::Player1), 'O');
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: GameConfig = toml::from_str("autosave_every = 2\nplayer2_symbol = \"*\"").unwrap();
        assert_eq!(*config.autosave_every(), 2);
        assert_eq!(config.symbol(Player::Player2), '*');
        assert_eq!(config.saves_dir(), &PathBuf::from("saves"));
    }
}
