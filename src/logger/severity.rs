//! Severity levels for log records.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Importance of a log record, ordered from least to most severe.
///
/// The derived ordering follows declaration order, so
/// `Debug < Info < Warning < Error < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Detailed diagnostic output
    Debug,
    /// Normal operational events, such as a clipboard change
    #[default]
    Info,
    /// Something unusual that does not affect operation
    Warning,
    /// A failed operation that the monitor recovered from
    Error,
    /// A failure that stops the monitor
    Critical,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the upper-case name written on log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a severity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid log level '{value}': expected DEBUG, INFO, WARNING, ERROR, or CRITICAL")]
pub struct ParseSeverityError {
    /// The rejected input
    pub value: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a level name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSeverityError {
                value: s.to_string(),
            })
    }
}
