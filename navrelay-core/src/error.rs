//! Error types for navrelay-core
//!
//! The pipeline itself has no fatal conditions; missing fields, wrong-source
//! posts, and absent subscribers all degrade to "do nothing". Errors exist
//! only at the seams: the platform source hooks and config loading.

use thiserror::Error;

/// Top-level error type for navrelay-core
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from the platform notification source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to start observing: {0}")]
    StartFailed(String),

    #[error("Failed to stop observing: {0}")]
    StopFailed(String),
}

/// Errors loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_start_failed_displays_correctly() {
        let error = SourceError::StartFailed("listener unavailable".to_string());
        assert!(error.to_string().contains("Failed to start observing"));
        assert!(error.to_string().contains("listener unavailable"));
    }

    #[test]
    fn source_error_stop_failed_displays_correctly() {
        let error = SourceError::StopFailed("already stopped".to_string());
        assert!(error.to_string().contains("Failed to stop observing"));
    }

    #[test]
    fn config_error_read_displays_correctly() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = ConfigError::Read(io_error);
        assert!(error.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn relay_error_converts_from_source_error() {
        let source_error = SourceError::StartFailed("boom".to_string());
        let relay_error: RelayError = source_error.into();
        assert!(matches!(relay_error, RelayError::Source(_)));
        assert!(relay_error.to_string().contains("Source error"));
    }

    #[test]
    fn relay_error_converts_from_config_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let relay_error: RelayError = ConfigError::Read(io_error).into();
        assert!(matches!(relay_error, RelayError::Config(_)));
        assert!(relay_error.to_string().contains("Config error"));
    }
}
