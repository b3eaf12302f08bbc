//! Rate-limiting primitives: a replace-on-next-event debouncer and a
//! single-slot per-frame request.
//!
//! Neither owns a timer. The controller feeds them the current time and
//! polls them from its tick.

use std::time::Duration;

/// Collapses a burst of triggers into one firing after a quiet period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an event at `now`, replacing any pending deadline.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether a firing is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Single pending per-frame callback.
///
/// A new request replaces the pending one, so rapid pointer moves between
/// two frames collapse into the latest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T: Copy> FrameSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, value: T) {
        self.pending = Some(value);
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<T> {
        self.pending
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
