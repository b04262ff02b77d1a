//! Host clipboard access through `arboard`.

use arboard::Clipboard;

use super::{ClipboardError, ClipboardReader};

/// Reads the operating system clipboard.
///
/// The platform handle is opened on the first read rather than at
/// construction. If opening fails the read reports an access error and the
/// next read tries again, so a clipboard service that is missing at startup
/// (for example no display server yet) does not stop the monitor.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    /// Creates a reader with no platform handle open yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.handle.is_none() {
            let clipboard = Clipboard::new().map_err(|e| ClipboardError::access(e.to_string()))?;
            tracing::debug!("Opened system clipboard handle");
            self.handle = Some(clipboard);
        }

        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError::access("clipboard handle unavailable"))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl ClipboardReader for SystemClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        let result = self.handle()?.get_text();
        classify(result)
    }
}

/// Maps an `arboard` text read onto the monitor's error kinds.
///
/// An empty clipboard, or one holding only non-text data, reads as empty
/// text rather than an error.
fn classify(result: Result<String, arboard::Error>) -> Result<String, ClipboardError> {
    match result {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(e @ (arboard::Error::ClipboardNotSupported | arboard::Error::ClipboardOccupied)) => {
            Err(ClipboardError::access(e.to_string()))
        }
        Err(e) => Err(ClipboardError::unexpected(e.to_string())),
    }
}
