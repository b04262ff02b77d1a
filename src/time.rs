//! Time abstraction for log timestamps.
//!
//! The [`Clock`] trait lets tests pin the timestamp written on each log line
//! while the binary uses the real system clock.

use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Timestamp layout used on every log line, e.g. `2024-05-01 13:37:00,042`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Abstraction over system time for testability.
///
/// # Example
///
/// ```
/// use clipboard_monitor::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock delegating to [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Renders `time` in local time using [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
