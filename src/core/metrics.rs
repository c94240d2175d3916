//! Per-entry counters for internal diagnostics
//!
//! Rate-limit suppression is a deliberate silent drop; these counters are
//! the only place it is observable.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct EntryMetrics {
    /// Records written to at least one sink
    emitted: AtomicU64,

    /// Calls dropped by the rate limiter
    suppressed: AtomicU64,

    /// Individual sink write/open failures
    sink_failures: AtomicU64,
}

impl EntryMetrics {
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_suppressed(&self) {
        self.suppressed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_sink_failure(&self) {
        self.sink_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> EntryMetricsSnapshot {
        EntryMetricsSnapshot {
            emitted: self.emitted(),
            suppressed: self.suppressed(),
            sink_failures: self.sink_failures(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetricsSnapshot {
    pub emitted: u64,
    pub suppressed: u64,
    pub sink_failures: u64,
}
