//! Audit log sink.
//!
//! This module provides:
//! - The five-level severity scale ([`Severity`])
//! - A leveled, timestamped line logger over any writer ([`Logger`])
//! - Error handling for sink failures ([`LogError`])
//!
//! Each emitted record becomes exactly one line:
//!
//! ```text
//! 2024-05-01 13:37:00,042 - INFO - Clipboard changed: hello
//! ```

mod error;
mod severity;
mod sink;


pub use error::LogError;
pub use severity::{ParseSeverityError, Severity};
pub use sink::Logger;
