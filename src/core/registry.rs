//! Process-wide table of the fixed logger categories
//!
//! The registry owns one entry per category for the lifetime of the
//! process and is itself an explicit value owned by the host application
//! context, injected into request handling rather than reached through
//! globals.

use super::appender::{AppenderKind, AppenderSet};
use super::config::AuditConfig;
use super::error::Result;
use super::logger::LoggerEntry;
use super::severity::Severity;

/// The fixed audit categories. There is no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoggerCategory {
    /// Attack detections
    Alarm,
    /// Security baseline findings
    Policy,
    /// Detection plugin output
    Plugin,
    /// The agent's own operational log
    Rasp,
}

impl LoggerCategory {
    pub const ALL: [LoggerCategory; 4] = [
        LoggerCategory::Alarm,
        LoggerCategory::Policy,
        LoggerCategory::Plugin,
        LoggerCategory::Rasp,
    ];

    /// Conventional subdirectory name under the log base directory.
    pub fn dir_name(&self) -> &'static str {
        match self {
            LoggerCategory::Alarm => "alarm",
            LoggerCategory::Policy => "policy",
            LoggerCategory::Plugin => "plugin",
            LoggerCategory::Rasp => "rasp",
        }
    }

    /// Appender kinds this category is eligible for. Only alarm records
    /// are forwarded to syslog; the rest stay local.
    pub fn default_appenders(&self) -> AppenderSet {
        match self {
            LoggerCategory::Alarm => AppenderSet::all(),
            _ => AppenderSet::of(&[AppenderKind::File, AppenderKind::Stream]),
        }
    }
}

pub struct LoggerRegistry {
    alarm: LoggerEntry,
    policy: LoggerEntry,
    plugin: LoggerEntry,
    rasp: LoggerEntry,
}

impl LoggerRegistry {
    /// Build the four entries from the host configuration. Sinks stay
    /// closed until `init_all` and the first log calls.
    pub fn new(config: &AuditConfig) -> Result<Self> {
        config.validate()?;
        let entry = |category: LoggerCategory| {
            LoggerEntry::new(
                category.dir_name(),
                config.base_dir.join(category.dir_name()),
                config,
            )
        };
        Ok(Self {
            alarm: entry(LoggerCategory::Alarm),
            policy: entry(LoggerCategory::Policy),
            plugin: entry(LoggerCategory::Plugin),
            rasp: entry(LoggerCategory::Rasp),
        })
    }

    pub fn get(&self, category: LoggerCategory) -> &LoggerEntry {
        match category {
            LoggerCategory::Alarm => &self.alarm,
            LoggerCategory::Policy => &self.policy,
            LoggerCategory::Plugin => &self.plugin,
            LoggerCategory::Rasp => &self.rasp,
        }
    }

    pub fn entries(&self) -> [&LoggerEntry; 4] {
        [&self.alarm, &self.policy, &self.plugin, &self.rasp]
    }

    /// Host module-init hook: prepare every category with its default
    /// appender eligibility.
    pub fn init_all(&self) {
        for category in LoggerCategory::ALL {
            self.get(category).init(category.default_appenders());
        }
    }

    /// Host teardown hook: release every category's sinks.
    pub fn clear_all(&self) {
        for entry in self.entries() {
            entry.clear();
        }
    }

    pub fn set_level_all(&self, level: Severity) {
        for entry in self.entries() {
            entry.set_level(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_category_dir_names() {
        let names: Vec<_> = LoggerCategory::ALL.iter().map(|c| c.dir_name()).collect();
        assert_eq!(names, vec!["alarm", "policy", "plugin", "rasp"]);
    }

    #[test]
    fn test_only_alarm_is_syslog_eligible() {
        assert!(LoggerCategory::Alarm
            .default_appenders()
            .contains(AppenderKind::Syslog));
        for category in [
            LoggerCategory::Policy,
            LoggerCategory::Plugin,
            LoggerCategory::Rasp,
        ] {
            assert!(!category.default_appenders().contains(AppenderKind::Syslog));
        }
    }

    #[test]
    fn test_init_all_and_clear_all() {
        let dir = tempdir().unwrap();
        let config = AuditConfig {
            base_dir: dir.path().to_path_buf(),
            ..AuditConfig::default()
        };
        let registry = LoggerRegistry::new(&config).unwrap();

        registry.init_all();
        for entry in registry.entries() {
            assert!(entry.is_accessible());
        }
        // directories are prepared at init
        for category in LoggerCategory::ALL {
            assert!(dir.path().join(category.dir_name()).is_dir());
        }

        registry.clear_all();
        for entry in registry.entries() {
            assert!(!entry.is_accessible());
        }
    }

    #[test]
    fn test_set_level_all() {
        let dir = tempdir().unwrap();
        let config = AuditConfig {
            base_dir: dir.path().to_path_buf(),
            ..AuditConfig::default()
        };
        let registry = LoggerRegistry::new(&config).unwrap();
        registry.set_level_all(Severity::Error);
        assert_eq!(registry.get(LoggerCategory::Plugin).level(), Severity::Error);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AuditConfig {
            enabled_appenders: AppenderSet::of(&[AppenderKind::Syslog]),
            ..AuditConfig::default()
        };
        assert!(LoggerRegistry::new(&config).is_err());
    }
}
