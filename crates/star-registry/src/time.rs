//! Time sources.
//!
//! The registry reads wall-clock time in exactly two places: stamping
//! appended blocks and checking ownership message expiry. Both go through
//! [`TimeSource`] so tests can pin the clock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current unix time in whole seconds.
    fn now(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    secs: AtomicI64,
}

impl ManualTimeSource {
    pub fn new(initial: i64) -> Self {
        Self {
            secs: AtomicI64::new(initial),
        }
    }

    pub fn set(&self, secs: i64) {
        self.secs.store(secs, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> i64 {
        self.secs.load(Ordering::SeqCst)
    }
}
