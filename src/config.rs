//! Configuration System
//!
//! The client has no environment and no local storage to read from, so its
//! configuration is a TOML file bundled into the binary at build time.
//! Every field has a default; a missing section means "use the defaults".

use serde::Deserialize;
use std::time::Duration;

/// Configuration bundled from `config/client.toml`
pub const BUNDLED_CONFIG: &str = include_str!("../config/client.toml");

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Activities service location
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Base URL prepended to every request path. Empty means same origin.
    #[serde(default)]
    pub base_url: String,
}

/// Feedback banner behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_ms: u64,
}

fn default_dismiss_after() -> u64 {
    5000
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ClientConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the configuration bundled into the binary
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUNDLED_CONFIG)
    }

    /// How long feedback stays visible
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.feedback.dismiss_after_ms)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse client config: {0}")]
    Parse(String),
}
