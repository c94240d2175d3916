//! Configuration surface consumed at init

use serde::Deserialize;
use std::path::PathBuf;

use super::appender::{AppenderKind, AppenderSet};
use super::error::{AuditError, Result};
use super::severity::Severity;

pub const DEFAULT_RATE_BURST: u32 = 1000;
pub const DEFAULT_SYSLOG_RECONNECT_SECS: u64 = 300;
pub const DEFAULT_SYSLOG_CONNECT_TIMEOUT_MS: u64 = 50;

/// Syslog transport settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SyslogConfig {
    /// host:port of the syslog collector
    pub address: String,

    /// Minimum spacing between reconnect attempts
    #[serde(default = "default_reconnect_secs")]
    pub reconnect_interval_secs: u64,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_reconnect_secs() -> u64 {
    DEFAULT_SYSLOG_RECONNECT_SECS
}

fn default_connect_timeout_ms() -> u64 {
    DEFAULT_SYSLOG_CONNECT_TIMEOUT_MS
}

/// Subsystem-wide settings supplied by the host at module init.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Root directory holding the per-category log subdirectories
    pub base_dir: PathBuf,

    /// Globally enabled appender kinds; entries may be restricted below
    /// this set but never extended beyond it
    #[serde(default = "default_enabled")]
    pub enabled_appenders: AppenderSet,

    #[serde(default)]
    pub default_severity: Severity,

    /// Token-bucket capacity per category per wall-clock second
    #[serde(default = "default_rate_burst")]
    pub rate_burst: u32,

    /// Rotation boundary offset, seconds east of UTC
    #[serde(default)]
    pub time_offset_secs: i32,

    #[serde(default)]
    pub syslog: Option<SyslogConfig>,
}

fn default_enabled() -> AppenderSet {
    AppenderSet::of(&[AppenderKind::File])
}

fn default_rate_burst() -> u32 {
    DEFAULT_RATE_BURST
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("logs"),
            enabled_appenders: default_enabled(),
            default_severity: Severity::default(),
            rate_burst: DEFAULT_RATE_BURST,
            time_offset_secs: 0,
            syslog: None,
        }
    }
}

impl AuditConfig {
    /// Check settings that would otherwise fail lazily at the first write.
    pub fn validate(&self) -> Result<()> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(AuditError::config("AuditConfig", "base_dir is empty"));
        }
        if self.enabled_appenders.contains(AppenderKind::Syslog) {
            match &self.syslog {
                None => {
                    return Err(AuditError::config(
                        "SyslogConfig",
                        "syslog appender enabled but no syslog section given",
                    ))
                }
                Some(cfg) if cfg.address.is_empty() => {
                    return Err(AuditError::config("SyslogConfig", "address is empty"))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
