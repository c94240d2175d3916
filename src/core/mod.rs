//! Core audit logger types

pub mod appender;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod rate_limit;
pub mod record;
pub mod registry;
pub mod rotation;
pub mod severity;

pub use appender::{AppenderKind, AppenderSet, AppenderSink};
pub use config::{AuditConfig, SyslogConfig};
pub use context::RequestContext;
pub use error::{AuditError, Result};
pub use logger::LoggerEntry;
pub use metrics::{EntryMetrics, EntryMetricsSnapshot};
pub use rate_limit::RateLimiter;
pub use record::LogOptions;
pub use registry::{LoggerCategory, LoggerRegistry};
pub use rotation::DateRotationPolicy;
pub use severity::Severity;
