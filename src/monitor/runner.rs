//! The clipboard polling loop.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use super::{ChangeDetector, MonitorError};
use crate::clipboard::{ClipboardError, ClipboardReader};
use crate::logger::Logger;
use crate::time::{Clock, SystemClock};

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

/// Fixed messages written to the log sink.
pub mod message {
    /// Written once the sink is open, before the first tick.
    pub const STARTED: &str = "Clipboard monitoring started.";
    /// Written when the loop stops on a shutdown signal.
    pub const STOPPED: &str = "Clipboard monitoring stopped.";
    /// Prefix for a newly observed clipboard value.
    pub const CHANGED: &str = "Clipboard changed:";
    /// Prefix for clipboard access failures.
    pub const ACCESS_ERROR: &str = "Error accessing clipboard:";
    /// Prefix for other clipboard read failures.
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred:";
    /// Prefix for failures that stop the loop.
    pub const FATAL_ERROR: &str = "An unrecoverable error occurred:";
}

/// What a single tick observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clipboard held a new value, which was logged and recorded.
    Changed,
    /// The clipboard matched the last recorded value.
    Unchanged,
    /// The clipboard could not be read; the failure was logged.
    ReadFailed,
}

/// Polls a clipboard on a fixed interval and logs every change.
///
/// The monitor owns its reader, its logger and the last seen value, so the
/// whole loop runs on one task with no shared state.
///
/// # Type Parameters
///
/// * `R` - The [`ClipboardReader`] to poll
/// * `W` - The log sink
/// * `C` - The [`Clock`] used for log timestamps (defaults to [`SystemClock`])
///
/// # Example
///
/// ```ignore
/// use clipboard_monitor::clipboard::SystemClipboard;
/// use clipboard_monitor::logger::{Logger, Severity};
/// use clipboard_monitor::monitor::Monitor;
/// use std::time::Duration;
///
/// let logger = Logger::open("clipboard_monitor.log".as_ref(), Severity::Info)?;
/// let mut monitor = Monitor::new(SystemClipboard::new(), logger, Duration::from_secs(1));
///
/// monitor.run(async { tokio::signal::ctrl_c().await.ok(); }).await?;
/// ```
#[derive(Debug)]
pub struct Monitor<R, W, C = SystemClock> {
    reader: R,
    logger: Logger<W, C>,
    detector: ChangeDetector,
    interval: Duration,
}

impl<R, W, C> Monitor<R, W, C>
where
    R: ClipboardReader,
    W: Write,
    C: Clock,
{
    /// Creates a monitor with an idle change detector.
    ///
    /// # Arguments
    ///
    /// * `reader` - The clipboard to poll
    /// * `logger` - Where changes and failures are recorded
    /// * `interval` - The pause between ticks
    #[must_use]
    pub const fn new(reader: R, logger: Logger<W, C>, interval: Duration) -> Self {
        Self {
            reader,
            logger,
            detector: ChangeDetector::new(),
            interval,
        }
    }

    /// Returns the configured polling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the change detector.
    #[must_use]
    pub const fn detector(&self) -> &ChangeDetector {
        &self.detector
    }

    /// Returns the logger.
    #[must_use]
    pub const fn logger(&self) -> &Logger<W, C> {
        &self.logger
    }

    /// Consumes the monitor, returning its logger.
    #[must_use]
    pub fn into_logger(self) -> Logger<W, C> {
        self.logger
    }

    /// Performs one read and compare step without sleeping.
    ///
    /// A read failure is logged at ERROR and leaves the last seen value
    /// untouched. A new value is logged at INFO before it is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Sink`] if the logger cannot write.
    pub fn tick(&mut self) -> Result<TickOutcome, MonitorError> {
        match self.reader.read() {
            Ok(current) => {
                if !self.detector.is_change(&current) {
                    return Ok(TickOutcome::Unchanged);
                }
                self.logger
                    .info(format_args!("{} {current}", message::CHANGED))?;
                self.detector.commit(current);
                Ok(TickOutcome::Changed)
            }
            Err(e) => {
                let prefix = match e {
                    ClipboardError::Access { .. } => message::ACCESS_ERROR,
                    ClipboardError::Unexpected { .. } => message::UNEXPECTED_ERROR,
                };
                self.logger.error(format_args!("{prefix} {e}"))?;
                Ok(TickOutcome::ReadFailed)
            }
        }
    }

    /// Runs the loop until `shutdown` completes.
    ///
    /// Shutdown is observed between ticks, while the monitor sleeps. On
    /// shutdown a final INFO stop line is written. If the loop fails, a
    /// CRITICAL line is attempted before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Sink`] if the logger cannot write.
    pub async fn run<S>(&mut self, shutdown: S) -> Result<(), MonitorError>
    where
        S: Future<Output = ()>,
    {
        match self.watch(shutdown).await {
            Ok(()) => {
                self.logger.info(message::STOPPED)?;
                Ok(())
            }
            Err(e) => {
                if let Err(log_err) = self
                    .logger
                    .critical(format_args!("{} {e}", message::FATAL_ERROR))
                {
                    tracing::error!("Failed to record fatal error: {log_err}");
                }
                Err(e)
            }
        }
    }

    async fn watch<S>(&mut self, shutdown: S) -> Result<(), MonitorError>
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let outcome = self.tick()?;
            tracing::trace!(?outcome, "Tick complete");

            tokio::select! {
                biased;

                () = &mut shutdown => {
                    tracing::debug!("Shutdown requested, leaving monitor loop");
                    return Ok(());
                }

                () = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
