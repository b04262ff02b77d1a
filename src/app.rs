//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use clipboard_monitor::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0), including shutdown by signal.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid interval, missing log directory, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - log sink failure, runtime or signal setup failure.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::InvalidInterval { .. } => {
            eprintln!("\nUse a positive number of seconds, for example '--interval 0.5'.");
        }
        ConfigError::LogDirectoryMissing { .. } => {
            eprintln!("\nCreate the directory first or choose another '--log-file'.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'clipboard-monitor init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for stderr diagnostics.
///
/// These diagnostics are separate from the clipboard log file.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
