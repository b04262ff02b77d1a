//! Application execution logic.
//!
//! This module opens the log sink, wires OS shutdown signals to the
//! monitor, and runs the clipboard polling loop.

use std::fs::File;
use std::future::Future;

use thiserror::Error;

use clipboard_monitor::clipboard::SystemClipboard;
use clipboard_monitor::config::ValidatedConfig;
use clipboard_monitor::logger::{LogError, Logger};
use clipboard_monitor::monitor::{Monitor, MonitorError, message};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the async runtime.
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// Failed to install an OS signal handler.
    #[error("Failed to install {signal} handler: {source}")]
    Signal {
        /// Name of the signal
        signal: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to open the log sink.
    #[error("Failed to open log sink: {0}")]
    OpenLog(#[source] LogError),

    /// The monitor stopped because of a failure.
    #[error("Monitoring failed: {0}")]
    Monitor(#[from] MonitorError),
}

impl RunError {
    /// Returns true if the failure happened before monitoring began.
    #[must_use]
    pub const fn is_setup(&self) -> bool {
        !matches!(self, Self::Monitor(_))
    }
}

/// Executes the main application loop.
///
/// This function:
/// 1. Installs the shutdown signal handlers
/// 2. Opens the log file and records the startup lines
/// 3. Polls the system clipboard until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if:
/// - A signal handler cannot be installed
/// - The log file cannot be opened
/// - The log file stops accepting writes
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires:
/// - A real clipboard service
/// - Real async runtime with signal handling
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let shutdown = shutdown_signal()?;
    let logger = open_log(&config)?;

    tracing::info!(
        "Monitoring clipboard every {:?}, logging to {}",
        config.interval,
        config.log_file.display()
    );

    let mut monitor = Monitor::new(SystemClipboard::new(), logger, config.interval);
    monitor.run(shutdown).await?;

    tracing::info!("Clipboard monitoring stopped");
    Ok(())
}

/// Opens the log sink and writes the startup lines.
fn open_log(config: &ValidatedConfig) -> Result<Logger<File>, RunError> {
    let mut logger =
        Logger::open(&config.log_file, config.log_level).map_err(RunError::OpenLog)?;

    logger
        .info(message::STARTED)
        .map_err(MonitorError::from)?;
    logger
        .debug(format_args!("Configuration: {config}"))
        .map_err(MonitorError::from)?;

    Ok(logger)
}

/// Installs Ctrl+C and SIGTERM handlers.
///
/// Handlers are registered before the loop starts, so a signal arriving
/// mid-tick is still seen at the next sleep. The returned future completes
/// when the first signal arrives.
#[cfg(unix)]
fn shutdown_signal() -> Result<impl Future<Output = ()>, RunError> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt()).map_err(|source| RunError::Signal {
        signal: "SIGINT",
        source,
    })?;
    let mut terminate = signal(SignalKind::terminate()).map_err(|source| RunError::Signal {
        signal: "SIGTERM",
        source,
    })?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => tracing::debug!("Received SIGINT"),
            _ = terminate.recv() => tracing::debug!("Received SIGTERM"),
        }
    })
}

/// Installs the Ctrl+C handler.
#[cfg(not(unix))]
fn shutdown_signal() -> Result<impl Future<Output = ()>, RunError> {
    Ok(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    })
}
