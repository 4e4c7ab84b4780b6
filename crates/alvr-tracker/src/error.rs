//! Error types for the tracker adapter.

use thiserror::Error;

/// Errors raised while configuring a tracker.
///
/// Pose updates and queries never fail. Activation reports
/// [`alvr_driver_abi::HostInitError`] straight to the host; only
/// construction through the builder and config loading use this type.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration text is not valid JSON for [`crate::TrackerConfig`].
    #[error("Failed to parse tracker configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("Failed to read tracker configuration from {path}: {source}")]
    ConfigIo {
        /// File that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl TrackerError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    /// Create a config I/O error for `path`.
    #[must_use]
    pub fn config_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

/// Result type for tracker operations.
pub type TrackerResult<T> = std::result::Result<T, TrackerError>;
