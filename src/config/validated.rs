//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::logger::Severity;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    /// Absolute path of the log file; its parent directory exists
    pub log_file: PathBuf,

    /// Minimum severity written to the log file
    pub log_level: Severity,

    /// Pause between clipboard checks, always non-zero
    pub interval: Duration,

    /// Verbose diagnostics enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ log_file: {}, log_level: {}, interval: {:?}, verbose: {} }}",
            self.log_file.display(),
            self.log_level,
            self.interval,
            self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The interval is not a positive, finite number of seconds
    /// - The log file's directory does not exist
    /// - The TOML log level is not a known severity
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let interval = Self::resolve_interval(cli, toml)?;
        let log_file = Self::resolve_log_file(cli, toml)?;
        let log_level = Self::resolve_log_level(cli, toml)?;

        Ok(Self {
            log_file,
            log_level,
            interval,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_interval(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .interval
            .or_else(|| toml.and_then(|t| t.monitor.interval))
            .unwrap_or(defaults::INTERVAL_SECS);

        if !(seconds.is_finite() && seconds > 0.0) {
            return Err(ConfigError::InvalidInterval { value: seconds });
        }

        // Values too small to survive nanosecond rounding are not positive either.
        match Duration::try_from_secs_f64(seconds) {
            Ok(interval) if !interval.is_zero() => Ok(interval),
            _ => Err(ConfigError::InvalidInterval { value: seconds }),
        }
    }

    fn resolve_log_file(cli: &Cli, toml: Option<&TomlConfig>) -> Result<PathBuf, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let path = cli
            .log_file
            .as_deref()
            .or_else(|| toml.and_then(|t| t.log.file.as_deref()))
            .unwrap_or_else(|| Path::new(defaults::LOG_FILE));

        let absolute = std::path::absolute(path).map_err(|e| ConfigError::InvalidLogPath {
            path: path.to_path_buf(),
            source: e,
        })?;

        // A bare file name resolves to the working directory.
        let Some(directory) = absolute.parent() else {
            return Err(ConfigError::LogDirectoryMissing {
                directory: absolute,
            });
        };
        if !directory.is_dir() {
            return Err(ConfigError::LogDirectoryMissing {
                directory: directory.to_path_buf(),
            });
        }

        Ok(absolute)
    }

    fn resolve_log_level(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Severity, ConfigError> {
        // CLI takes precedence
        if let Some(level) = cli.log_level {
            return Ok(level.into());
        }

        // Fall back to TOML
        if let Some(level) = toml.and_then(|t| t.log.level.as_deref()) {
            return level.parse::<Severity>().map_err(ConfigError::from);
        }

        Ok(defaults::LOG_LEVEL)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
