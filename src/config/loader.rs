use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Range accepted for `display.tick_rate_ms`.
pub const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 10..=5000;

/// Levels accepted for `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

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
    /// Uses `~/.config/nomad-site/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("nomad-site").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

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
    /// - The tick rate is within [`TICK_RATE_RANGE_MS`]
    /// - The narrow breakpoint is non-zero
    /// - The log level is one of [`LOG_LEVELS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.display.tick_rate_ms;
        if !TICK_RATE_RANGE_MS.contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "display.tick_rate_ms must be between {} and {}, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    tick
                ),
            });
        }

        if self.display.narrow_breakpoint == 0 {
            return Err(ConfigError::ValidationError {
                message: "display.narrow_breakpoint must be greater than 0".to_string(),
            });
        }

        let level = self.logging.level.as_str();
        if !LOG_LEVELS.contains(&level) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "logging.level '{}' is not one of: {}",
                    level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}
