//! Trend classification: are recent check-ins better or worse than the ones
//! just before them?

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::aggregate::average_intensity;
use crate::entry::MoodEntry;

/// Coarse direction of the user's mood.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    #[default]
    Stable,
}

/// Window size and threshold for trend classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Number of entries in each of the recent and prior windows.
    pub window: usize,
    /// Minimum difference of means, exclusive, to call a direction.
    pub threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: 3,
            threshold: 0.5,
        }
    }
}

/// The two means a trend was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendComparison {
    pub recent_mean: f64,
    pub prior_mean: f64,
    /// True when the prior window was short and the overall mean stood in.
    pub prior_fell_back: bool,
    pub trend: Trend,
}

/// Compares the newest `window` entries against the `window` entries before
/// them.
///
/// Entries are ordered by timestamp, newest first. Equal timestamps fall back
/// to id and then intensity, so the input order does not matter. When fewer than `window` prior entries exist, the prior mean is the
/// mean of all entries.
pub fn compare_windows(entries: &[MoodEntry], config: &TrendConfig) -> TrendComparison {
    let mut newest_first: Vec<&MoodEntry> = entries.iter().collect();
    newest_first.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
            .then_with(|| b.intensity.cmp(&a.intensity))
    });

    let window = config.window.max(1);
    let recent_len = window.min(newest_first.len());
    let (recent, rest) = newest_first.split_at(recent_len);
    let prior = &rest[..window.min(rest.len())];

    let recent_mean = mean(recent);
    let prior_fell_back = prior.len() < window;
    let prior_mean = if prior_fell_back {
        average_intensity(entries)
    } else {
        mean(prior)
    };

    let trend = if recent.is_empty() {
        Trend::Stable
    } else if recent_mean - prior_mean > config.threshold {
        Trend::Improving
    } else if prior_mean - recent_mean > config.threshold {
        Trend::Declining
    } else {
        Trend::Stable
    };

    TrendComparison {
        recent_mean,
        prior_mean,
        prior_fell_back,
        trend,
    }
}

/// Classifies the trend with the default window (3) and threshold (0.5).
pub fn classify_trend(entries: &[MoodEntry]) -> Trend {
    classify_trend_with(entries, &TrendConfig::default())
}

pub fn classify_trend_with(entries: &[MoodEntry], config: &TrendConfig) -> Trend {
    compare_windows(entries, config).trend
}

fn mean(entries: &[&MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(|e| e.intensity.as_f64()).sum::<f64>() / entries.len() as f64
}
