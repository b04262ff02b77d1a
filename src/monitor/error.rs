//! Error types for the monitor layer.

use crate::logger::LogError;
use thiserror::Error;

/// Error type for monitor operations.
///
/// Clipboard read failures never appear here; the monitor records them and
/// keeps going. Only failures that make further monitoring pointless are
/// returned to the caller.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The log sink stopped accepting records.
    #[error("Log sink failed: {0}")]
    Sink(#[from] LogError),
}
