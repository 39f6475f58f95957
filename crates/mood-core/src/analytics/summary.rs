//! One-shot summary for a progress screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{
    ActivityCount, average_intensity, completion_rate, days_tracked, most_frequent_emotion,
    top_activities,
};
use super::range::{TimeRange, filter};
use super::trend::{Trend, classify_trend_with};
use crate::catalog::Emotion;
use crate::config::AnalyticsConfig;
use crate::entry::MoodEntry;

/// Everything the analytics view shows for one time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub range: TimeRange,
    pub entry_count: usize,
    pub average_intensity: f64,
    pub most_frequent_emotion: Option<Emotion>,
    pub top_activities: Vec<ActivityCount>,
    pub trend: Trend,
    pub completion_rate: f64,
    pub days_tracked: usize,
}

impl AnalyticsSummary {
    /// Filters `entries` to `range` and computes every statistic over what is
    /// left.
    pub fn compute(
        entries: &[MoodEntry],
        range: TimeRange,
        now: DateTime<Utc>,
        config: &AnalyticsConfig,
    ) -> Self {
        let in_range = filter(entries, range, now);
        Self {
            range,
            entry_count: in_range.len(),
            average_intensity: average_intensity(&in_range),
            most_frequent_emotion: most_frequent_emotion(&in_range),
            top_activities: top_activities(&in_range, config.top_activities_limit),
            trend: classify_trend_with(&in_range, &config.trend_config()),
            completion_rate: completion_rate(&in_range, range),
            days_tracked: days_tracked(&in_range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}
