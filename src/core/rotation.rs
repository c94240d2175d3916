//! Date-based rotation suffix for file sinks
//!
//! The rotation suffix identifies the current day's file target and is
//! recomputed only when the calendar day, under the configured offset,
//! changes. Rotation is lazy: it is driven by log calls, so the filename
//! transition happens on the first call after midnight, not at midnight.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

pub const DATE_SUFFIX_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug)]
pub struct DateRotationPolicy {
    offset: FixedOffset,
    current_day: NaiveDate,
    suffix: String,
}

impl DateRotationPolicy {
    /// `offset_secs` is the configured rotation boundary offset in seconds
    /// east of UTC. Out-of-range values fall back to UTC.
    pub fn new(offset_secs: i32, now: DateTime<Utc>) -> Self {
        let offset =
            FixedOffset::east_opt(offset_secs).unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
        let day = now.with_timezone(&offset).date_naive();
        Self {
            offset,
            current_day: day,
            suffix: day.format(DATE_SUFFIX_FORMAT).to_string(),
        }
    }

    /// True when the calendar day has changed since the suffix was computed.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        now.with_timezone(&self.offset).date_naive() != self.current_day
    }

    /// Recompute the cached day and suffix.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        let day = now.with_timezone(&self.offset).date_naive();
        if day != self.current_day {
            self.current_day = day;
            self.suffix = day.format(DATE_SUFFIX_FORMAT).to_string();
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}
