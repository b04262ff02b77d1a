//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::defaults;
use crate::logger::Severity;

/// Clipboard Monitor
///
/// Polls the system clipboard and appends every change to a log file.
#[derive(Debug, Parser)]
#[command(name = "clipboard-monitor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the log file [default: clipboard_monitor.log]
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Minimum severity written to the log file [default: INFO]
    #[arg(long = "log-level", value_enum, ignore_case = true)]
    pub log_level: Option<LevelArg>,

    /// Seconds between clipboard checks, fractions allowed [default: 1]
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub interval: Option<f64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for clipboard-monitor
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_TEMPLATE_FILE)]
        output: PathBuf,
    },
}

/// Log level argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    /// Everything, including per-run configuration details
    #[value(name = "DEBUG")]
    Debug,
    /// Clipboard changes and start/stop notices
    #[value(name = "INFO")]
    Info,
    /// Warnings and above
    #[value(name = "WARNING")]
    Warning,
    /// Clipboard read failures and above
    #[value(name = "ERROR")]
    Error,
    /// Only failures that stop the monitor
    #[value(name = "CRITICAL")]
    Critical,
}

impl From<LevelArg> for Severity {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Debug => Self::Debug,
            LevelArg::Info => Self::Info,
            LevelArg::Warning => Self::Warning,
            LevelArg::Error => Self::Error,
            LevelArg::Critical => Self::Critical,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error instead
    /// of exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or malformed values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
