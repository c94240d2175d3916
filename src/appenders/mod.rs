//! Sink implementations

pub mod file;
pub mod stream;
pub mod syslog;

pub use file::DatedFileAppender;
pub use stream::StreamAppender;
pub use syslog::SyslogAppender;

// Re-export the contract for convenience
pub use crate::core::AppenderSink;
