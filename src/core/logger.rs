//! Per-category logger entry
//!
//! A `LoggerEntry` owns the sinks selected by its appender mask, a token
//! bucket, and the date-rotation state for its file target. One entry
//! exists per category for the lifetime of the process; it is not
//! cloneable and is constructed only by the registry.
//!
//! All mutable state sits behind a single mutex per entry, so concurrent
//! request threads logging to the same category are serialized while
//! categories never block each other.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::time::Duration;

use crate::appenders::{DatedFileAppender, StreamAppender, SyslogAppender};

use super::appender::{AppenderKind, AppenderSet, AppenderSink};
use super::config::AuditConfig;
use super::context::RequestContext;
use super::diagnostics;
use super::metrics::{EntryMetrics, EntryMetricsSnapshot};
use super::rate_limit::RateLimiter;
use super::record::{self, LogOptions};
use super::rotation::DateRotationPolicy;
use super::severity::Severity;

pub struct LoggerEntry {
    name: &'static str,
    metrics: EntryMetrics,
    state: Mutex<EntryState>,
}

struct EntryState {
    initialized: bool,
    accessible: bool,
    threshold: Severity,
    /// Globally configured appender kinds
    enabled: AppenderSet,
    /// Kinds this entry actually honors; always a subset of `enabled`
    mask: AppenderSet,
    rotation: DateRotationPolicy,
    limiter: RateLimiter,
    reconnect_interval: Duration,
    log_dir: PathBuf,
    syslog_address: Option<(String, Duration)>,
    file_sink: Option<DatedFileAppender>,
    syslog_sink: Option<SyslogAppender>,
    stream_sink: Option<StreamAppender>,
}

enum RecordBody<'a> {
    Text {
        message: &'a str,
        opts: LogOptions,
    },
    Structured(Map<String, Value>),
}

impl LoggerEntry {
    pub(crate) fn new(name: &'static str, log_dir: PathBuf, config: &AuditConfig) -> Self {
        let syslog_address = config.syslog.as_ref().map(|s| {
            (
                s.address.clone(),
                Duration::from_millis(s.connect_timeout_ms),
            )
        });
        let reconnect_interval = Duration::from_secs(
            config
                .syslog
                .as_ref()
                .map(|s| s.reconnect_interval_secs)
                .unwrap_or(super::config::DEFAULT_SYSLOG_RECONNECT_SECS),
        );

        Self {
            name,
            metrics: EntryMetrics::new(),
            state: Mutex::new(EntryState {
                initialized: false,
                accessible: false,
                threshold: config.default_severity,
                enabled: config.enabled_appenders,
                mask: AppenderSet::empty(),
                rotation: DateRotationPolicy::new(config.time_offset_secs, Utc::now()),
                limiter: RateLimiter::new(config.rate_burst),
                reconnect_interval,
                log_dir,
                syslog_address,
                file_sink: None,
                syslog_sink: None,
                stream_sink: None,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Prepare the entry's sinks for the requested appender kinds.
    ///
    /// Idempotent. The effective mask is the intersection of `requested`
    /// with the globally enabled set. A kind whose prerequisites fail is
    /// reported through the diagnostics channel and skipped; the entry
    /// becomes accessible as long as at least one kind is viable.
    pub fn init(&self, requested: AppenderSet) {
        let mut state = self.state.lock();
        if state.initialized {
            return;
        }

        state.mask = requested.intersect(&state.enabled);
        let mut viable = AppenderSet::empty();

        if state.mask.contains(AppenderKind::File) {
            match std::fs::create_dir_all(&state.log_dir) {
                Ok(()) => {
                    let suffix = state.rotation.suffix().to_string();
                    state.file_sink = Some(DatedFileAppender::new(
                        state.log_dir.clone(),
                        self.name,
                        suffix,
                    ));
                    viable.insert(AppenderKind::File);
                }
                Err(e) => diagnostics::report(self.name, &e),
            }
        }

        if state.mask.contains(AppenderKind::Syslog) {
            match &state.syslog_address {
                Some((address, timeout)) => {
                    // connection itself is deferred to the first log call
                    state.syslog_sink = Some(SyslogAppender::new(address.clone(), *timeout));
                    viable.insert(AppenderKind::Syslog);
                }
                None => diagnostics::warn(self.name, &"syslog requested but not configured"),
            }
        }

        if state.mask.contains(AppenderKind::Stream) && state.stream_sink.is_some() {
            viable.insert(AppenderKind::Stream);
        }

        state.initialized = true;
        state.accessible = !viable.is_empty();
    }

    /// Supply the generic stream sink. The Stream kind is honored only
    /// while one is attached.
    pub fn attach_stream(&self, sink: StreamAppender) {
        let mut state = self.state.lock();
        state.stream_sink = Some(sink);
        if state.initialized && state.mask.contains(AppenderKind::Stream) {
            state.accessible = true;
        }
    }

    /// Update the severity threshold; effective from the next log call.
    pub fn set_level(&self, level: Severity) {
        self.state.lock().threshold = level;
    }

    pub fn level(&self) -> Severity {
        self.state.lock().threshold
    }

    pub fn is_accessible(&self) -> bool {
        self.state.lock().accessible
    }

    /// Log a free-text message with default options.
    pub fn log(&self, severity: Severity, message: &str, ctx: Option<&RequestContext>) -> bool {
        self.log_text_at(Utc::now(), severity, message, LogOptions::default(), ctx)
    }

    /// Log a free-text message with explicit detail/framing options.
    pub fn log_with(
        &self,
        severity: Severity,
        message: &str,
        opts: LogOptions,
        ctx: Option<&RequestContext>,
    ) -> bool {
        self.log_text_at(Utc::now(), severity, message, opts, ctx)
    }

    /// Log a structured payload as one JSON record.
    pub fn log_payload(
        &self,
        severity: Severity,
        payload: Map<String, Value>,
        ctx: Option<&RequestContext>,
    ) -> bool {
        self.log_payload_at(Utc::now(), severity, payload, ctx)
    }

    pub(crate) fn log_text_at(
        &self,
        now: DateTime<Utc>,
        severity: Severity,
        message: &str,
        opts: LogOptions,
        ctx: Option<&RequestContext>,
    ) -> bool {
        self.log_record_at(now, severity, RecordBody::Text { message, opts }, ctx)
    }

    pub(crate) fn log_payload_at(
        &self,
        now: DateTime<Utc>,
        severity: Severity,
        payload: Map<String, Value>,
        ctx: Option<&RequestContext>,
    ) -> bool {
        self.log_record_at(now, severity, RecordBody::Structured(payload), ctx)
    }

    fn log_record_at(
        &self,
        now: DateTime<Utc>,
        severity: Severity,
        body: RecordBody<'_>,
        ctx: Option<&RequestContext>,
    ) -> bool {
        let mut state = self.state.lock();

        if !state.accessible {
            return false;
        }
        // filtered calls consume no token and touch no sink
        if !severity.passes(state.threshold) {
            return false;
        }
        if !state.limiter.try_consume(now.timestamp()) {
            self.metrics.record_suppressed();
            return false;
        }

        if state.rotation.needs_refresh(now) {
            state.rotation.refresh(now);
            if state.mask.contains(AppenderKind::File) {
                let suffix = state.rotation.suffix().to_string();
                if let Some(file) = state.file_sink.as_mut() {
                    file.set_suffix(&suffix);
                }
            }
        }

        state.ensure_sinks(now.timestamp(), self.name, &self.metrics);

        let timestamp = now.with_timezone(&state.rotation.offset());
        let rendered = match body {
            RecordBody::Text { message, opts } => {
                record::render_text(timestamp, severity, message, ctx, opts)
            }
            RecordBody::Structured(payload) => {
                match record::render_structured(timestamp, severity, payload, ctx) {
                    Ok(line) => line,
                    Err(e) => {
                        diagnostics::report(self.name, &e);
                        return false;
                    }
                }
            }
        };

        state.fan_out(&rendered, self.name, &self.metrics);
        self.metrics.record_emitted();
        true
    }

    /// Release all open sinks. Called at request/process teardown; the
    /// entry stays constructed and can be re-initialized by the host.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        if let Some(sink) = state.file_sink.as_mut() {
            sink.close();
        }
        if let Some(sink) = state.syslog_sink.as_mut() {
            sink.close();
        }
        if let Some(sink) = state.stream_sink.as_mut() {
            sink.close();
        }
        state.file_sink = None;
        state.syslog_sink = None;
        state.stream_sink = None;
        state.initialized = false;
        state.accessible = false;
    }

    pub fn metrics(&self) -> EntryMetricsSnapshot {
        self.metrics.snapshot()
    }

    #[cfg(test)]
    pub(crate) fn syslog_last_attempt(&self) -> Option<i64> {
        self.state
            .lock()
            .syslog_sink
            .as_ref()
            .map(|s| s.last_connect_attempt())
    }

    #[cfg(test)]
    pub(crate) fn current_file_path(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .file_sink
            .as_ref()
            .map(|s| s.current_path())
    }
}

impl EntryState {
    /// Open-on-demand pass over the masked sinks. Syslog reconnects are
    /// spaced by `reconnect_interval`; other sinks reopen immediately.
    fn ensure_sinks(&mut self, now_sec: i64, name: &str, metrics: &EntryMetrics) {
        if self.mask.contains(AppenderKind::File) {
            if let Some(sink) = self.file_sink.as_mut() {
                if !sink.is_usable() {
                    if let Err(e) = sink.open() {
                        metrics.record_sink_failure();
                        diagnostics::report(name, &e);
                    }
                }
            }
        }

        if self.mask.contains(AppenderKind::Syslog) {
            if let Some(sink) = self.syslog_sink.as_mut() {
                if !sink.is_usable()
                    && now_sec - sink.last_connect_attempt()
                        >= self.reconnect_interval.as_secs() as i64
                {
                    if let Err(e) = sink.open_at(now_sec) {
                        metrics.record_sink_failure();
                        diagnostics::report(name, &e);
                    }
                }
            }
        }

        if self.mask.contains(AppenderKind::Stream)
            && self.stream_sink.as_ref().is_some_and(|s| !s.is_usable())
        {
            // a consumed stream cannot come back; drop it
            self.stream_sink = None;
        }
    }

    /// Write one record to every open, masked sink. A failure on one sink
    /// never prevents writes to the others.
    fn fan_out(&mut self, rendered: &[u8], name: &str, metrics: &EntryMetrics) {
        let mask = self.mask;
        let mut sinks: [Option<&mut dyn AppenderSink>; 3] = [
            self.file_sink
                .as_mut()
                .map(|s| s as &mut dyn AppenderSink),
            self.syslog_sink
                .as_mut()
                .map(|s| s as &mut dyn AppenderSink),
            self.stream_sink
                .as_mut()
                .map(|s| s as &mut dyn AppenderSink),
        ];

        for sink in sinks.iter_mut().flatten() {
            if !mask.contains(sink.kind()) || !sink.is_usable() {
                continue;
            }
            if let Err(e) = sink.write_record(rendered) {
                metrics.record_sink_failure();
                diagnostics::report(name, &e);
            }
        }
    }
}
