use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/anyscp/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("anyscp").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The scp and ssh program names are non-empty
    /// - The byte-count command has at least one word
    /// - A configured cwd is not the empty string
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("scp", &self.programs.scp), ("ssh", &self.programs.ssh)] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("programs.{} must not be empty", key),
                });
            }
        }

        if self.programs.wc_words().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "programs.wc must name a command".to_string(),
            });
        }

        if self.defaults.cwd.as_deref() == Some("") {
            return Err(ConfigError::ValidationError {
                message: "defaults.cwd must not be empty (use \"/\" for the root)".to_string(),
            });
        }

        Ok(())
    }
}
