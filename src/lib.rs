//! # Audit Log System
//!
//! Embedded audit-logging subsystem for a runtime security agent: a set of
//! named, independently configured loggers that emit structured security
//! and operational events to rotating files, syslog and generic streams,
//! with a per-logger rate limit to survive event floods. A companion
//! bounded LRU cache supplies memoization and recency tracking for other
//! agent subsystems.
//!
//! ## Design points
//!
//! - **Per-category isolation**: one [`core::LoggerEntry`] per category
//!   (alarm, policy, plugin, rasp), each behind its own lock.
//! - **Flood protection**: a whole-second token bucket bounds worst-case
//!   volume per category; suppression is silent and counted.
//! - **Lazy everything**: sinks open on demand, file targets rotate on the
//!   first call after a day change, syslog reconnects are interval-gated.
//! - **Failure absorption**: sink errors degrade output but never reach
//!   the caller; the subsystem self-reports through [`core::diagnostics`].

pub mod appenders;
pub mod cache;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{DatedFileAppender, StreamAppender, SyslogAppender};
    pub use crate::cache::BoundedLruCache;
    pub use crate::core::{
        AppenderKind, AppenderSet, AppenderSink, AuditConfig, AuditError, LogOptions,
        LoggerCategory, LoggerEntry, LoggerRegistry, RequestContext, Result, Severity,
        SyslogConfig,
    };
}

pub use crate::appenders::{DatedFileAppender, StreamAppender, SyslogAppender};
pub use crate::cache::BoundedLruCache;
pub use crate::core::{
    AppenderKind, AppenderSet, AppenderSink, AuditConfig, AuditError, EntryMetricsSnapshot,
    LogOptions, LoggerCategory, LoggerEntry, LoggerRegistry, RequestContext, Result, Severity,
    SyslogConfig,
};
