use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::config::types::Config;

const APP_DIR: &str = "mvi-queue";

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
    /// Directory holding the config and settings files.
    ///
    /// `~/.config/mvi-queue` on Linux, the platform equivalent elsewhere via
    /// `dirs::config_dir()`, or the current directory as a last resort.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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
    /// - The catalogue URL is an http(s) URL
    /// - The request timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.products.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("products.base_url '{}' is not an http(s) URL", base_url),
            });
        }

        if self.products.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "products.timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Settings file location, explicit or derived.
    pub fn settings_path(&self) -> PathBuf {
        self.settings
            .path
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("settings.toml"))
    }

    pub fn cache_lifetime(&self) -> Duration {
        Duration::from_secs(self.products.cache_lifetime_seconds)
    }
}
