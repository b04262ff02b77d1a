//! Leveled line logger.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::{LogError, Severity};
use crate::time::{Clock, SystemClock, format_timestamp};

/// Appends `<timestamp> - <LEVEL> - <message>` lines to a writer.
///
/// A logger is built once at startup and handed to whatever needs to record
/// events; there is no global logging state. Records below the configured
/// minimum severity are dropped without touching the sink. Every emitted line
/// is flushed before the call returns.
///
/// # Type Parameters
///
/// * `W` - The sink, a [`File`] in production
/// * `C` - The [`Clock`] used for timestamps (defaults to [`SystemClock`])
///
/// # Example
///
/// ```
/// use clipboard_monitor::logger::{Logger, Severity};
///
/// let mut logger = Logger::new(Vec::new(), Severity::Info);
/// logger.debug("hidden").unwrap();
/// logger.info("shown").unwrap();
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert!(output.ends_with(" - INFO - shown\n"));
/// assert!(!output.contains("hidden"));
/// ```
#[derive(Debug)]
pub struct Logger<W, C = SystemClock> {
    sink: W,
    clock: C,
    level: Severity,
}

impl Logger<File, SystemClock> {
    /// Opens `path` for appending, creating it if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened.
    pub fn open(path: &Path, level: Severity) -> Result<Self, LogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(file, level))
    }
}

impl<W: Write> Logger<W, SystemClock> {
    /// Creates a logger over an arbitrary writer using the system clock.
    #[must_use]
    pub const fn new(sink: W, level: Severity) -> Self {
        Self::with_clock(sink, SystemClock, level)
    }
}

impl<W: Write, C: Clock> Logger<W, C> {
    /// Creates a logger with a custom clock.
    ///
    /// This constructor allows injecting a fixed clock for testing.
    #[must_use]
    pub const fn with_clock(sink: W, clock: C, level: Severity) -> Self {
        Self { sink, clock, level }
    }

    /// Returns the minimum severity that is written.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// Returns true if a record of `severity` would be written.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// Writes one record at `severity`, or nothing if it is filtered out.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Write`] if the line cannot be written or flushed.
    pub fn log(&mut self, severity: Severity, message: impl Display) -> Result<(), LogError> {
        if !self.enabled(severity) {
            return Ok(());
        }

        let timestamp = format_timestamp(self.clock.now());
        writeln!(self.sink, "{timestamp} - {severity} - {message}")?;
        self.sink.flush()?;
        Ok(())
    }

    /// Writes a [`Severity::Debug`] record.
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn debug(&mut self, message: impl Display) -> Result<(), LogError> {
        self.log(Severity::Debug, message)
    }

    /// Writes a [`Severity::Info`] record.
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn info(&mut self, message: impl Display) -> Result<(), LogError> {
        self.log(Severity::Info, message)
    }

    /// Writes a [`Severity::Warning`] record.
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn warning(&mut self, message: impl Display) -> Result<(), LogError> {
        self.log(Severity::Warning, message)
    }

    /// Writes a [`Severity::Error`] record.
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn error(&mut self, message: impl Display) -> Result<(), LogError> {
        self.log(Severity::Error, message)
    }

    /// Writes a [`Severity::Critical`] record.
    ///
    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn critical(&mut self, message: impl Display) -> Result<(), LogError> {
        self.log(Severity::Critical, message)
    }

    /// Returns a reference to the underlying sink.
    #[must_use]
    pub const fn sink(&self) -> &W {
        &self.sink
    }

    /// Consumes the logger, returning the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink
    }
}
