//! Syslog sink over TCP
//!
//! The sink only moves bytes; the syslog wire format above the stream is
//! owned by the caller. Every connect attempt, successful or not, stamps
//! `last_connect_attempt` so the owning entry can space reconnects by the
//! configured interval instead of re-dialing a dead collector per record.

use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use chrono::Utc;

use crate::core::{AppenderKind, AppenderSink, AuditError, Result};

pub struct SyslogAppender {
    address: String,
    connect_timeout: Duration,
    stream: Option<TcpStream>,
    /// Unix seconds of the most recent connect attempt, 0 = never tried
    last_connect_attempt: i64,
}

impl SyslogAppender {
    pub fn new(address: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            address: address.into(),
            connect_timeout,
            stream: None,
            last_connect_attempt: 0,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Unix seconds of the most recent connect attempt.
    pub fn last_connect_attempt(&self) -> i64 {
        self.last_connect_attempt
    }

    /// Connect, stamping `now_sec` as the attempt time whatever the
    /// outcome. The owning entry supplies its own clock so the stamp and
    /// the reconnect-interval gate share one time source.
    pub fn open_at(&mut self, now_sec: i64) -> Result<()> {
        self.last_connect_attempt = now_sec;
        match self.connect() {
            Ok(stream) => {
                self.stream = Some(stream);
                Ok(())
            }
            Err(e) => {
                self.stream = None;
                Err(e)
            }
        }
    }

    fn connect(&self) -> Result<TcpStream> {
        let addr = self
            .address
            .to_socket_addrs()
            .map_err(|e| {
                AuditError::io_operation(
                    "resolve syslog address",
                    format!("Failed to resolve '{}'", self.address),
                    e,
                )
            })?
            .next()
            .ok_or_else(|| {
                AuditError::sink_unavailable(
                    "syslog",
                    format!("'{}' resolved to no addresses", self.address),
                )
            })?;

        let stream = TcpStream::connect_timeout(&addr, self.connect_timeout).map_err(|e| {
            AuditError::io_operation(
                "connect to syslog",
                format!("Failed to connect '{}'", self.address),
                e,
            )
        })?;
        stream.set_write_timeout(Some(Duration::from_secs(5)))?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }
}

impl AppenderSink for SyslogAppender {
    fn open(&mut self) -> Result<()> {
        self.open_at(Utc::now().timestamp())
    }

    fn write_record(&mut self, record: &[u8]) -> Result<()> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| AuditError::sink_unavailable("syslog", "not connected"))?;

        if let Err(e) = stream.write_all(record) {
            // connection lost; the entry decides when to reconnect
            self.stream = None;
            return Err(AuditError::io_operation(
                "write to syslog",
                format!("Connection to '{}' lost", self.address),
                e,
            ));
        }
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.flush();
        }
    }

    fn is_usable(&self) -> bool {
        self.stream.is_some()
    }

    fn kind(&self) -> AppenderKind {
        AppenderKind::Syslog
    }
}
