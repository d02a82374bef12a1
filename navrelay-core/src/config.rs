//! Configuration for the relay pipeline

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Package identifier of the only recognized source application
pub const DEFAULT_SOURCE_PACKAGE: &str = "com.google.android.apps.maps";

/// Top-level relay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Notifications from any other package are discarded
    #[serde(default = "default_source_package")]
    pub source_package: String,

    /// Carry-forward distance before the first source event supplies one
    #[serde(default = "default_initial_distance")]
    pub initial_distance: String,

    /// Relay bus channel capacity
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Re-posted notification settings
    #[serde(default)]
    pub notification: NotificationConfig,
}

/// Settings for the re-posted local notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether re-posting is enabled (the log is always appended)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Fixed marker appended to the notification body
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Auto-dismiss timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_source_package() -> String {
    DEFAULT_SOURCE_PACKAGE.to_string()
}

fn default_initial_distance() -> String {
    crate::normalize::INITIAL_DISTANCE.to_string()
}

fn default_channel_capacity() -> usize {
    64
}

fn default_true() -> bool {
    true
}

fn default_suffix() -> String {
    "🗺️".to_string()
}

fn default_timeout_ms() -> u64 {
    60_000
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            source_package: default_source_package(),
            initial_distance: default_initial_distance(),
            channel_capacity: default_channel_capacity(),
            notification: NotificationConfig::default(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            suffix: default_suffix(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}
