//! Internal diagnostic channel
//!
//! Self-reporting for the logging subsystem itself. Usable before a logger
//! is initialized and after teardown, and never routed through the sinks
//! it may be reporting about.

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

static SELF_ERRORS: AtomicU64 = AtomicU64::new(0);

/// Report a subsystem-internal failure to stderr.
pub fn report(component: &str, error: &dyn Display) {
    SELF_ERRORS.fetch_add(1, Ordering::Relaxed);
    eprintln!("[AUDIT-LOG ERROR] {}: {}", component, error);
}

/// Report a degraded (non-fatal) condition.
pub fn warn(component: &str, message: &dyn Display) {
    eprintln!("[AUDIT-LOG WARNING] {}: {}", component, message);
}

/// Total internal errors reported since process start.
pub fn error_count() -> u64 {
    SELF_ERRORS.load(Ordering::Relaxed)
}
