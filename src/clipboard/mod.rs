//! Clipboard access layer.
//!
//! This module provides:
//! - The read-only clipboard capability ([`ClipboardReader`])
//! - Failure classification ([`ClipboardError`])
//! - The `arboard`-backed implementation for the host OS ([`SystemClipboard`])

mod reader;
mod system;

pub use reader::{ClipboardError, ClipboardReader};
pub use system::SystemClipboard;
