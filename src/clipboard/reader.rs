//! Clipboard reading trait and error types.

use thiserror::Error;

/// Error type for clipboard reads.
///
/// Both variants are recoverable: the monitor logs them and tries again on
/// the next tick. The display form is the bare detail so callers can prefix
/// their own context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The platform clipboard service is unavailable or refused access.
    #[error("{context}")]
    Access {
        /// What the platform reported.
        context: String,
    },

    /// Any other failure while reading, such as undecodable content.
    #[error("{message}")]
    Unexpected {
        /// Error message describing the failure.
        message: String,
    },
}

impl ClipboardError {
    /// Creates an [`ClipboardError::Access`] error.
    #[must_use]
    pub fn access(context: impl Into<String>) -> Self {
        Self::Access {
            context: context.into(),
        }
    }

    /// Creates an [`ClipboardError::Unexpected`] error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

/// Trait for reading the current text content of a clipboard.
///
/// # Design
///
/// - The OS clipboard is the only external dependency of the monitor, so it
///   sits behind this trait
/// - Enables dependency injection for testing with scripted readers
/// - Reads never modify the clipboard
///
/// # Example
///
/// ```
/// use clipboard_monitor::clipboard::{ClipboardError, ClipboardReader};
/// use std::collections::VecDeque;
///
/// struct Scripted(VecDeque<Result<String, ClipboardError>>);
///
/// impl ClipboardReader for Scripted {
///     fn read(&mut self) -> Result<String, ClipboardError> {
///         self.0.pop_front().unwrap_or_else(|| Ok(String::new()))
///     }
/// }
///
/// let mut reader = Scripted(VecDeque::from([Ok("a".to_string())]));
/// assert_eq!(reader.read().unwrap(), "a");
/// ```
pub trait ClipboardReader {
    /// Returns the clipboard's current text.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Access`] when the clipboard service cannot be
    /// reached and [`ClipboardError::Unexpected`] for any other failure.
    fn read(&mut self) -> Result<String, ClipboardError>;
}
