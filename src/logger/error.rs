//! Error types for the log sink.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for log sink operations.
///
/// Any of these means the sink can no longer be trusted to record events.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened for appending.
    #[error("Failed to open log file '{}': {source}", path.display())]
    Open {
        /// Path of the log file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing a line failed.
    #[error("Failed to write log line: {0}")]
    Write(#[from] std::io::Error),
}
