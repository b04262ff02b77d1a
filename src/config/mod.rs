//! Configuration layer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Each setting is resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--log-file`, `--log-level`, `--interval`
//! 2. **TOML config file** - `[log]` and `[monitor]` sections of `--config`
//! 3. **Built-in defaults** - `clipboard_monitor.log`, `INFO`, `1` second
//!
//! # Validation
//!
//! Validation runs before the log file is opened, so a rejected configuration
//! never creates or touches the log file. The interval must be a positive,
//! finite number of seconds and the directory that will hold the log file
//! must already exist. A bare file name lives in the current directory.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, LevelArg};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
