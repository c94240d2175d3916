//! Dated file sink
//!
//! The logical path embeds the rotation suffix:
//! `<dir>/<stem>.log.<suffix>`. The owning logger entry pushes a new
//! suffix when the day changes; that closes the handle so the next write
//! reopens against the rotated name. Opening is on demand, never eager.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::{AppenderKind, AppenderSink, AuditError, Result};

pub struct DatedFileAppender {
    dir: PathBuf,
    stem: String,
    suffix: String,
    writer: Option<BufWriter<File>>,
}

impl DatedFileAppender {
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
            suffix: suffix.into(),
            writer: None,
        }
    }

    /// Path of the current rotation target.
    pub fn current_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log.{}", self.stem, self.suffix))
    }

    /// Update the rotation suffix. A change closes the open handle so the
    /// next write reopens against the new name.
    pub fn set_suffix(&mut self, suffix: &str) {
        if suffix != self.suffix {
            self.close();
            self.suffix = suffix.to_string();
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl AppenderSink for DatedFileAppender {
    fn open(&mut self) -> Result<()> {
        if self.writer.is_some() {
            return Ok(());
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            AuditError::io_operation(
                "create log directory",
                format!("Failed to create directory '{}'", self.dir.display()),
                e,
            )
        })?;

        let path = self.current_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                AuditError::file_sink(path.display().to_string(), format!("Failed to open: {}", e))
            })?;

        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        let path = self.current_path();
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| AuditError::sink_unavailable("file", "sink not open"))?;

        let result = writer
            .write_all(record)
            .and_then(|()| writer.flush())
            .map_err(|e| {
                AuditError::file_sink(
                    path.display().to_string(),
                    format!("Failed to write record: {}", e),
                )
            });

        if result.is_err() {
            // force a reopen on the next write
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
        AppenderKind::File
    }
}

impl Drop for DatedFileAppender {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("alarm");
        let mut sink = DatedFileAppender::new(&log_dir, "alarm", "2026-03-09");

        assert!(!sink.is_usable());
        sink.open().unwrap();
        assert!(sink.is_usable());

        sink.write_record(b"record one\n").unwrap();
        let content = fs::read_to_string(log_dir.join("alarm.log.2026-03-09")).unwrap();
        assert_eq!(content, "record one\n");
    }

    #[test]
    fn test_write_without_open_fails() {
        let dir = tempdir().unwrap();
        let mut sink = DatedFileAppender::new(dir.path(), "policy", "2026-03-09");
        assert!(sink.write_record(b"x").is_err());
    }

    #[test]
    fn test_suffix_change_closes_handle() {
        let dir = tempdir().unwrap();
        let mut sink = DatedFileAppender::new(dir.path(), "alarm", "2026-03-09");
        sink.open().unwrap();
        sink.write_record(b"day one\n").unwrap();

        sink.set_suffix("2026-03-10");
        assert!(!sink.is_usable());

        sink.open().unwrap();
        sink.write_record(b"day two\n").unwrap();

        let first = fs::read_to_string(dir.path().join("alarm.log.2026-03-09")).unwrap();
        let second = fs::read_to_string(dir.path().join("alarm.log.2026-03-10")).unwrap();
        assert_eq!(first, "day one\n");
        assert_eq!(second, "day two\n");
    }

    #[test]
    fn test_same_suffix_keeps_handle() {
        let dir = tempdir().unwrap();
        let mut sink = DatedFileAppender::new(dir.path(), "alarm", "2026-03-09");
        sink.open().unwrap();
        sink.set_suffix("2026-03-09");
        assert!(sink.is_usable());
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut sink = DatedFileAppender::new(dir.path(), "rasp", "2026-03-09");
        sink.open().unwrap();
        sink.open().unwrap();
        assert!(sink.is_usable());
    }
}
