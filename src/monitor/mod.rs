//! Monitor layer for detecting clipboard changes.
//!
//! This module provides types and functions for:
//! - Remembering the last clipboard value and spotting changes ([`ChangeDetector`])
//! - The poll, compare, log loop ([`Monitor`])
//! - Per-tick results ([`TickOutcome`])
//! - Error handling ([`MonitorError`])

mod detector;
mod error;
mod runner;

pub use detector::{ChangeDetector, DetectorState};
pub use error::MonitorError;
pub use runner::{Monitor, TickOutcome, message};
