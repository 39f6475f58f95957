//! Mood analytics.
//!
//! Pure, synchronous functions over a slice of entries already held in
//! memory. None of them fail: an empty slice always has a defined result.
//!
//! # Module Structure
//!
//! - `range`: `TimeRange` and the time-range filter
//! - `aggregate`: averages, frequency rankings, completion rate
//! - `trend`: recent-versus-prior trend classification
//! - `insights`: per-day, per-activity and time-of-day breakdowns
//! - `summary`: `AnalyticsSummary`, everything a progress screen shows

mod aggregate;
mod insights;
mod range;
mod summary;
mod trend;

pub use aggregate::{
    ActivityCount, average_intensity, completion_rate, days_tracked, most_frequent_emotion,
    top_activities,
};
pub use insights::{
    ActivityCorrelation, DailyMood, TimeOfDay, TimeOfDayMood, activity_correlations,
    best_time_of_day, daily_trends, time_of_day_breakdown,
};
pub use range::{TimeRange, filter};
pub use summary::AnalyticsSummary;
pub use trend::{Trend, TrendComparison, TrendConfig, classify_trend, classify_trend_with, compare_windows};
