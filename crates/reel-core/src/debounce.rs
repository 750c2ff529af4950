//! Resize debouncing.
//!
//! Resize signals arrive in storms; the debouncer collapses a burst into a
//! single deferred settle pass. The pending deadline doubles as the busy
//! flag: further signals while one is pending are absorbed, and the settle
//! pass that eventually runs reads the final geometry, so the last resize
//! in a burst always wins.

use web_time::{Duration, Instant};

/// Default settle time after the first resize signal of a burst.
pub const RESIZE_SETTLE: Duration = Duration::from_millis(500);

/// Collapses bursts of resize signals into one deferred settle pass.
#[derive(Debug)]
pub struct ResizeDebouncer {
    settle: Duration,
    deadline: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new() -> Self {
        Self::with_settle(RESIZE_SETTLE)
    }

    pub fn with_settle(settle: Duration) -> Self {
        Self {
            settle,
            deadline: None,
        }
    }

    /// Records a resize signal. Absorbed if a settle pass is already
    /// pending.
    pub fn signal(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.settle);
        }
    }

    /// Returns true exactly once per burst, when the settle deadline has
    /// passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a settle pass is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending settle pass. Used on detach so no callback fires
    /// against a destroyed container.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
