//! Breakdowns behind the "insights" cards: mood per day, how activities line
//! up with mood, and which part of the day feels best.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::aggregate::{average_intensity, catalog_order, count_emotions, dominant_emotion};
use crate::catalog::{ActivityTag, Emotion, activity_rank};
use crate::entry::MoodEntry;

/// Mood for one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMood {
    pub date: NaiveDate,
    pub average_mood: f64,
    pub dominant_emotion: Emotion,
    pub entry_count: usize,
}

/// Average mood per day, oldest day first. Days without entries are skipped.
pub fn daily_trends(entries: &[MoodEntry]) -> Vec<DailyMood> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&MoodEntry>> = BTreeMap::new();
    for entry in entries {
        by_day
            .entry(entry.timestamp.date_naive())
            .or_default()
            .push(entry);
    }

    by_day
        .into_iter()
        .filter_map(|(date, day_entries)| {
            let total: f64 = day_entries.iter().map(|e| e.intensity.as_f64()).sum();
            let dominant = dominant_emotion(&count_emotions(day_entries.iter().copied()))?;
            Some(DailyMood {
                date,
                average_mood: total / day_entries.len() as f64,
                dominant_emotion: dominant,
                entry_count: day_entries.len(),
            })
        })
        .collect()
}

/// How an activity relates to mood.
///
/// `correlation` is the mean intensity of entries tagged with the activity
/// minus the mean intensity of all entries: positive means the activity shows
/// up on better days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCorrelation {
    pub activity: ActivityTag,
    pub correlation: f64,
    pub entry_count: usize,
}

/// Correlation for every activity present, strongest positive first.
pub fn activity_correlations(entries: &[MoodEntry]) -> Vec<ActivityCorrelation> {
    let overall = average_intensity(entries);

    let mut sums: HashMap<&str, (f64, usize, &ActivityTag)> = HashMap::new();
    for entry in entries {
        for activity in &entry.activities {
            let slot = sums
                .entry(activity.id.as_str())
                .or_insert((0.0, 0, activity));
            slot.0 += entry.intensity.as_f64();
            slot.1 += 1;
        }
    }

    let mut correlations: Vec<ActivityCorrelation> = sums
        .into_values()
        .map(|(sum, count, activity)| ActivityCorrelation {
            activity: activity.clone(),
            correlation: sum / count as f64 - overall,
            entry_count: count,
        })
        .collect();

    correlations.sort_by(|a, b| {
        b.correlation.total_cmp(&a.correlation).then_with(|| {
            catalog_order(activity_rank(&a.activity.id), &a.activity.id)
                .cmp(&catalog_order(activity_rank(&b.activity.id), &b.activity.id))
        })
    });
    correlations
}

/// Part of the day an entry was written in (UTC hour).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeOfDay {
    /// 05:00 - 11:59
    Morning,
    /// 12:00 - 16:59
    Afternoon,
    /// 17:00 - 21:59
    Evening,
    /// 22:00 - 04:59
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDayMood {
    pub time_of_day: TimeOfDay,
    pub average_intensity: f64,
    pub entry_count: usize,
}

/// Average intensity per part of the day, for the parts that have entries.
pub fn time_of_day_breakdown(entries: &[MoodEntry]) -> Vec<TimeOfDayMood> {
    TimeOfDay::iter()
        .filter_map(|time_of_day| {
            let bucket: Vec<MoodEntry> = entries
                .iter()
                .filter(|e| TimeOfDay::from_hour(e.timestamp.hour()) == time_of_day)
                .cloned()
                .collect();
            if bucket.is_empty() {
                return None;
            }
            Some(TimeOfDayMood {
                time_of_day,
                average_intensity: average_intensity(&bucket),
                entry_count: bucket.len(),
            })
        })
        .collect()
}

/// The part of the day with the highest average intensity. Ties go to the
/// earlier part of the day.
pub fn best_time_of_day(entries: &[MoodEntry]) -> Option<TimeOfDay> {
    let mut best: Option<&TimeOfDayMood> = None;
    let breakdown = time_of_day_breakdown(entries);
    for bucket in &breakdown {
        match best {
            Some(current) if bucket.average_intensity <= current.average_intensity => {}
            _ => best = Some(bucket),
        }
    }
    best.map(|b| b.time_of_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryDraft;
    use chrono::{DateTime, Utc};

    fn entry(at: &str, emotion: &str, intensity: i64, activities: &[&str]) -> MoodEntry {
        let timestamp = DateTime::parse_from_rfc3339(at)
            .unwrap()
            .with_timezone(&Utc);
        let mut draft = EntryDraft::new()
            .with_emotion_id(emotion)
            .unwrap()
            .with_intensity(intensity);
        for id in activities {
            draft = draft.with_activity_id(id).unwrap();
        }
        draft
            .validate()
            .unwrap()
            .into_entry(MoodEntry::id_for(timestamp), timestamp)
    }

    #[test]
    fn test_empty_inputs() {
        assert!(daily_trends(&[]).is_empty());
        assert!(activity_correlations(&[]).is_empty());
        assert!(time_of_day_breakdown(&[]).is_empty());
        assert!(best_time_of_day(&[]).is_none());
    }

    #[test]
    fn test_daily_trends() {
        let entries = vec![
            entry("2024-04-02T20:00:00Z", "sadness", 3, &[]),
            entry("2024-04-01T08:00:00Z", "joy", 8, &[]),
            entry("2024-04-01T19:00:00Z", "joy", 6, &[]),
            entry("2024-04-02T07:00:00Z", "anxiety", 5, &[]),
        ];

        let days = daily_trends(&entries);
        assert_eq!(days.len(), 2);

        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(days[0].average_mood, 7.0);
        assert_eq!(days[0].dominant_emotion.id, "joy");
        assert_eq!(days[0].entry_count, 2);

        // anxiety and sadness tie; anxiety comes first in the catalog
        assert_eq!(days[1].dominant_emotion.id, "anxiety");
        assert_eq!(days[1].average_mood, 4.0);
    }

    #[test]
    fn test_activity_correlations() {
        let entries = vec![
            entry("2024-04-01T08:00:00Z", "joy", 9, &["exercise"]),
            entry("2024-04-02T08:00:00Z", "joy", 7, &["exercise", "work"]),
            entry("2024-04-03T08:00:00Z", "sadness", 2, &["work"]),
        ];
        // overall mean 6.0
        let correlations = activity_correlations(&entries);
        assert_eq!(correlations.len(), 2);
        assert_eq!(correlations[0].activity.id, "exercise");
        assert_eq!(correlations[0].correlation, 2.0);
        assert_eq!(correlations[0].entry_count, 2);
        assert_eq!(correlations[1].activity.id, "work");
        assert_eq!(correlations[1].correlation, -1.5);
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(22), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
    }

    #[test]
    fn test_best_time_of_day() {
        let entries = vec![
            entry("2024-04-01T08:00:00Z", "joy", 8, &[]),
            entry("2024-04-02T09:00:00Z", "peace", 8, &[]),
            entry("2024-04-01T14:00:00Z", "anxiety", 4, &[]),
            entry("2024-04-01T23:30:00Z", "fear", 3, &[]),
        ];
        let breakdown = time_of_day_breakdown(&entries);
        let buckets: Vec<TimeOfDay> = breakdown.iter().map(|b| b.time_of_day).collect();
        assert_eq!(
            buckets,
            vec![TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Night]
        );
        assert_eq!(best_time_of_day(&entries), Some(TimeOfDay::Morning));
    }

    #[test]
    fn test_best_time_of_day_tie_prefers_earlier_bucket() {
        let entries = vec![
            entry("2024-04-01T13:00:00Z", "joy", 6, &[]),
            entry("2024-04-01T18:00:00Z", "joy", 6, &[]),
        ];
        assert_eq!(best_time_of_day(&entries), Some(TimeOfDay::Afternoon));
    }
}
