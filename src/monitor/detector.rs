//! Change detection against the last observed clipboard value.

/// Whether a detector has seen any clipboard value yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    /// No value observed yet; the next read is always a change.
    Idle,
    /// A previous value is held for comparison.
    Tracking,
}

/// Holds the most recent clipboard value and compares new reads against it.
///
/// Comparison is full-content string equality. Checking and recording are
/// separate steps so that callers can record a change only after it has been
/// logged:
///
/// ```
/// use clipboard_monitor::monitor::{ChangeDetector, DetectorState};
///
/// let mut detector = ChangeDetector::new();
/// assert!(detector.is_change(""));
///
/// detector.commit("hello".to_string());
/// assert_eq!(detector.state(), DetectorState::Tracking);
/// assert!(!detector.is_change("hello"));
/// assert!(detector.is_change("world"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeDetector {
    last_seen: Option<String>,
}

impl ChangeDetector {
    /// Creates a detector in the [`DetectorState::Idle`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_seen: None }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> DetectorState {
        if self.last_seen.is_some() {
            DetectorState::Tracking
        } else {
            DetectorState::Idle
        }
    }

    /// Returns the last committed value, if any.
    #[must_use]
    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    /// Returns true if `current` differs from the last committed value.
    ///
    /// An idle detector reports every value as a change, including empty text.
    #[must_use]
    pub fn is_change(&self, current: &str) -> bool {
        self.last_seen.as_deref() != Some(current)
    }

    /// Records `current` as the last seen value.
    pub fn commit(&mut self, current: String) {
        self.last_seen = Some(current);
    }
}
