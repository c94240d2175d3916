//! Appender kinds, the enabled-set abstraction, and the sink contract

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Output destination kind for audit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppenderKind {
    File,
    Syslog,
    Stream,
}

impl AppenderKind {
    pub const ALL: [AppenderKind; 3] = [
        AppenderKind::File,
        AppenderKind::Syslog,
        AppenderKind::Stream,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppenderKind::File => "file",
            AppenderKind::Syslog => "syslog",
            AppenderKind::Stream => "stream",
        }
    }
}

/// A set of appender kinds.
///
/// An entry's effective set is always the intersection of its requested
/// set with the globally enabled one; it is restricted below the global
/// set, never extended beyond it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppenderSet {
    file: bool,
    syslog: bool,
    stream: bool,
}

impl AppenderSet {
    pub const fn empty() -> Self {
        Self {
            file: false,
            syslog: false,
            stream: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            file: true,
            syslog: true,
            stream: true,
        }
    }

    pub fn of(kinds: &[AppenderKind]) -> Self {
        let mut set = Self::empty();
        for kind in kinds {
            set.insert(*kind);
        }
        set
    }

    pub fn insert(&mut self, kind: AppenderKind) {
        match kind {
            AppenderKind::File => self.file = true,
            AppenderKind::Syslog => self.syslog = true,
            AppenderKind::Stream => self.stream = true,
        }
    }

    pub fn contains(&self, kind: AppenderKind) -> bool {
        match kind {
            AppenderKind::File => self.file,
            AppenderKind::Syslog => self.syslog,
            AppenderKind::Stream => self.stream,
        }
    }

    /// Kinds present in both sets.
    #[must_use]
    pub fn intersect(&self, other: &AppenderSet) -> AppenderSet {
        AppenderSet {
            file: self.file && other.file,
            syslog: self.syslog && other.syslog,
            stream: self.stream && other.stream,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.file || self.syslog || self.stream)
    }

    pub fn iter(&self) -> impl Iterator<Item = AppenderKind> + '_ {
        AppenderKind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.contains(*kind))
    }
}

/// Contract for an open, writable, closeable record sink.
///
/// Sinks are opened on demand by the owning logger entry, never eagerly.
/// `write_record` receives one fully rendered record.
pub trait AppenderSink: Send {
    /// Open (or reopen) the underlying resource.
    fn open(&mut self) -> Result<()>;

    /// Write one rendered record. The caller treats failures as
    /// per-sink and isolates them from other sinks.
    fn write_record(&mut self, record: &[u8]) -> Result<()>;

    /// Release the underlying resource. Safe to call when closed.
    fn close(&mut self);

    /// Whether the sink currently holds a writable resource.
    fn is_usable(&self) -> bool;

    fn kind(&self) -> AppenderKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_all() {
        assert!(AppenderSet::empty().is_empty());
        let all = AppenderSet::all();
        for kind in AppenderKind::ALL {
            assert!(all.contains(kind));
        }
    }

    #[test]
    fn test_of_and_iter() {
        let set = AppenderSet::of(&[AppenderKind::File, AppenderKind::Syslog]);
        assert!(set.contains(AppenderKind::File));
        assert!(set.contains(AppenderKind::Syslog));
        assert!(!set.contains(AppenderKind::Stream));

        let kinds: Vec<_> = set.iter().collect();
        assert_eq!(kinds, vec![AppenderKind::File, AppenderKind::Syslog]);
    }

    #[test]
    fn test_intersect_never_extends() {
        let global = AppenderSet::of(&[AppenderKind::File]);
        let requested = AppenderSet::all();
        let effective = requested.intersect(&global);

        assert!(effective.contains(AppenderKind::File));
        assert!(!effective.contains(AppenderKind::Syslog));
        assert!(!effective.contains(AppenderKind::Stream));
    }

    #[test]
    fn test_serde_kind() {
        let json = serde_json::to_string(&AppenderKind::Syslog).unwrap();
        assert_eq!(json, "\"syslog\"");
    }
}
