//! Time ranges and the time-range filter.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::entry::MoodEntry;

/// Look-back window for analytics.
///
/// Ranges have a fixed length counted back from "now": a month is always 30
/// days and a year 365, regardless of the calendar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    /// Length of the range in days.
    pub fn days(self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 365,
        }
    }

    /// Number of entries a daily journaler would write in this range.
    pub fn expected_entries(self) -> usize {
        self.days() as usize
    }

    /// Earliest instant still inside the range.
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }

    /// Whether `timestamp` lies in `[cutoff, now]`.
    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        timestamp >= self.cutoff(now) && timestamp <= now
    }
}

/// Returns the entries whose timestamp falls in `[now - range, now]`.
///
/// Both bounds are inclusive; entries stamped after `now` are left out.
/// Input order is preserved.
pub fn filter(entries: &[MoodEntry], range: TimeRange, now: DateTime<Utc>) -> Vec<MoodEntry> {
    entries
        .iter()
        .filter(|entry| range.contains(entry.timestamp, now))
        .cloned()
        .collect()
}
