//! Generic stream sink
//!
//! Wraps any host-supplied writable stream. A consumed writer cannot be
//! reopened here; after a write failure the owner replaces the sink.

use std::io::Write;

use crate::core::{AppenderKind, AppenderSink, AuditError, Result};

pub struct StreamAppender {
    writer: Option<Box<dyn Write + Send>>,
}

impl StreamAppender {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }
}

impl AppenderSink for StreamAppender {
    fn open(&mut self) -> Result<()> {
        if self.writer.is_some() {
            Ok(())
        } else {
            Err(AuditError::sink_unavailable(
                "stream",
                "writer was closed and cannot be reopened",
            ))
        }
    }

    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| AuditError::sink_unavailable("stream", "writer closed"))?;

        let result = writer
            .write_all(record)
            .and_then(|()| writer.flush())
            .map_err(AuditError::from);
        if result.is_err() {
            self.writer = None;
        }
        result
    }

    fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }

    fn is_usable(&self) -> bool {
        self.writer.is_some()
    }

    fn kind(&self) -> AppenderKind {
        AppenderKind::Stream
    }
}
