//! Logging macros for ergonomic record formatting.
//!
//! Thin wrappers over [`LoggerEntry::log`](crate::core::LoggerEntry::log)
//! with `format!`-style arguments.
//!
//! # Examples
//!
//! ```no_run
//! use audit_log_system::prelude::*;
//! use audit_log_system::{audit_log, audit_warning};
//!
//! let config = AuditConfig::default();
//! let registry = LoggerRegistry::new(&config).unwrap();
//! registry.init_all();
//!
//! let alarm = registry.get(LoggerCategory::Alarm);
//! let ctx = RequestContext::capture("req-1");
//!
//! audit_log!(alarm, Severity::Error, Some(&ctx), "blocked {} attempt", "sqli");
//! audit_warning!(alarm, Some(&ctx), "suspicious path traversal from {}", "10.0.0.9");
//! ```

/// Log a free-text record at an explicit severity.
#[macro_export]
macro_rules! audit_log {
    ($entry:expr, $severity:expr, $ctx:expr, $($arg:tt)+) => {
        $entry.log($severity, &format!($($arg)+), $ctx)
    };
}

/// Log an error-severity record.
#[macro_export]
macro_rules! audit_error {
    ($entry:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::audit_log!($entry, $crate::core::Severity::Error, $ctx, $($arg)+)
    };
}

/// Log a warning-severity record.
#[macro_export]
macro_rules! audit_warning {
    ($entry:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::audit_log!($entry, $crate::core::Severity::Warning, $ctx, $($arg)+)
    };
}

/// Log an info-severity record.
#[macro_export]
macro_rules! audit_info {
    ($entry:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::audit_log!($entry, $crate::core::Severity::Info, $ctx, $($arg)+)
    };
}

/// Log a debug-severity record.
#[macro_export]
macro_rules! audit_debug {
    ($entry:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::audit_log!($entry, $crate::core::Severity::Debug, $ctx, $($arg)+)
    };
}
