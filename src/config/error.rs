//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::logger::ParseSeverityError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The polling interval is zero, negative, or not a usable number.
    #[error("Invalid argument: interval must be positive (got {value})")]
    InvalidInterval {
        /// The rejected number of seconds
        value: f64,
    },

    /// The directory that should hold the log file does not exist.
    #[error("Invalid argument: log directory does not exist: '{}'", directory.display())]
    LogDirectoryMissing {
        /// The missing directory
        directory: PathBuf,
    },

    /// The log file path could not be made absolute.
    #[error("Invalid argument: cannot resolve log file path '{}': {source}", path.display())]
    InvalidLogPath {
        /// The path as given
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The log level from the config file is not a known severity.
    #[error("Invalid argument: {0}")]
    InvalidLevel(#[from] ParseSeverityError),
}

impl ConfigError {
    /// Returns true for errors caused by a bad option value, as opposed to
    /// a config file that could not be read, parsed, or written.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidInterval { .. }
                | Self::LogDirectoryMissing { .. }
                | Self::InvalidLogPath { .. }
                | Self::InvalidLevel(_)
        )
    }
}
