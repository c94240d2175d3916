//! Error types for the audit-logging subsystem

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Sink is not open or no longer writable
    #[error("Sink unavailable ({kind}): {message}")]
    SinkUnavailable { kind: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File sink error with path
    #[error("File sink error for '{path}': {message}")]
    FileSinkError { path: String, message: String },

    /// Logger used before initialization
    #[error("Logger '{0}' is not initialized")]
    NotInitialized(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl AuditError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        AuditError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a sink unavailable error
    pub fn sink_unavailable(kind: impl Into<String>, message: impl Into<String>) -> Self {
        AuditError::SinkUnavailable {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        AuditError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file sink error
    pub fn file_sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        AuditError::FileSinkError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AuditError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = AuditError::config("SyslogConfig", "empty address");
        assert!(matches!(err, AuditError::InvalidConfiguration { .. }));

        let err = AuditError::file_sink("/var/log/rasp/alarm.log", "Permission denied");
        assert!(matches!(err, AuditError::FileSinkError { .. }));

        let err = AuditError::sink_unavailable("syslog", "not connected");
        assert!(matches!(err, AuditError::SinkUnavailable { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = AuditError::file_sink("/logs/alarm/alarm.log.2026-01-01", "disk full");
        assert_eq!(
            err.to_string(),
            "File sink error for '/logs/alarm/alarm.log.2026-01-01': disk full"
        );

        let err = AuditError::NotInitialized("policy".to_string());
        assert_eq!(err.to_string(), "Logger 'policy' is not initialized");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = AuditError::io_operation("opening log file", "cannot open alarm log", io_err);

        assert!(matches!(err, AuditError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open alarm log"));
    }
}
