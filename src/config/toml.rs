//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Log sink configuration section
    #[serde(default)]
    pub log: LogSection,

    /// Monitoring configuration section
    #[serde(default)]
    pub monitor: MonitorSection,
}

/// Log sink configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Path to the log file
    pub file: Option<PathBuf>,

    /// Minimum severity: DEBUG, INFO, WARNING, ERROR, or CRITICAL
    pub level: Option<String>,
}

/// Monitoring configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Seconds between clipboard checks
    pub interval: Option<f64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Clipboard Monitor Configuration File
# Command-line flags override every value set here.

[log]
# Log file path; relative paths resolve against the working directory.
# Its directory must already exist. (default: clipboard_monitor.log)
file = "clipboard_monitor.log"

# Minimum severity written to the log file (default: INFO)
# Accepted values: DEBUG, INFO, WARNING, ERROR, CRITICAL
level = "INFO"

[monitor]
# Seconds between clipboard checks; fractions allowed (default: 1)
interval = 1.0
"#
    .to_string()
}
