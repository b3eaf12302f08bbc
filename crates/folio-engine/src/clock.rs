//! Time sources for the controller.
//!
//! The controller never reads wall-clock time directly. Production hosts
//! use [`SystemClock`]; tests drive a [`ManualClock`] by hand so debounce
//! windows and animation steps can be checked without sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Monotonic clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced explicitly.
///
/// Clones share the same time, so a test can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move time forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Jump to an absolute time.
    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
