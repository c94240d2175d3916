//! Severity levels with syslog ordering
//!
//! Numerically lower values are more severe (0 = emergency, 7 = debug).
//! A message passes the filter only when its level value is less than or
//! equal to the configured threshold value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    #[default]
    Info = 6,
    Debug = 7,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "EMERG",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRIT",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Numeric syslog value of this level.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// True when a message at this level passes a filter set to `threshold`.
    #[inline]
    pub fn passes(&self, threshold: Severity) -> bool {
        self.value() <= threshold.value()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMERG" | "EMERGENCY" => Ok(Severity::Emergency),
            "ALERT" => Ok(Severity::Alert),
            "CRIT" | "CRITICAL" => Ok(Severity::Critical),
            "ERR" | "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syslog_ordering() {
        assert_eq!(Severity::Emergency.value(), 0);
        assert_eq!(Severity::Debug.value(), 7);
        assert!(Severity::Emergency.value() < Severity::Error.value());
    }

    #[test]
    fn test_passes_threshold() {
        // threshold WARNING: warnings and worse pass, info does not
        assert!(Severity::Warning.passes(Severity::Warning));
        assert!(Severity::Error.passes(Severity::Warning));
        assert!(Severity::Emergency.passes(Severity::Warning));
        assert!(!Severity::Info.passes(Severity::Warning));
        assert!(!Severity::Debug.passes(Severity::Warning));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("ERR".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("emergency".parse::<Severity>().unwrap(), Severity::Emergency);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Critical.to_string(), "CRIT");
        assert_eq!(Severity::Info.to_string(), "INFO");
    }
}
