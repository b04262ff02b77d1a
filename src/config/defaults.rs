//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use std::time::Duration;

use crate::logger::Severity;

/// Default log file, relative to the current directory.
pub const LOG_FILE: &str = "clipboard_monitor.log";

/// Default minimum severity written to the log file.
pub const LOG_LEVEL: Severity = Severity::Info;

/// Default polling interval in seconds.
pub const INTERVAL_SECS: f64 = 1.0;

/// Default output path for `init`.
pub const CONFIG_TEMPLATE_FILE: &str = "clipboard-monitor.toml";

/// Default polling interval as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_secs(1)
}
