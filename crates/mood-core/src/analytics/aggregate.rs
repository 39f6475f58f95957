//! Summary statistics over a list of entries.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::range::TimeRange;
use crate::catalog::{ActivityTag, Emotion, activity_rank, emotion_rank};
use crate::entry::MoodEntry;

/// How often an activity shows up in a set of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub activity: ActivityTag,
    pub count: usize,
}

/// Arithmetic mean of the intensities, `0.0` when there are no entries.
pub fn average_intensity(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: f64 = entries.iter().map(|e| e.intensity.as_f64()).sum();
    total / entries.len() as f64
}

/// Sort key that puts catalog items first, in catalog order, then anything
/// else by id.
pub(crate) fn catalog_order(rank: Option<usize>, id: &str) -> (usize, &str) {
    (rank.unwrap_or(usize::MAX), id)
}

/// Whether `candidate` was written after `current`. Same-instant entries are
/// ordered by id.
fn is_newer(candidate: &MoodEntry, current: &MoodEntry) -> bool {
    (candidate.timestamp, candidate.id.as_str()) > (current.timestamp, current.id.as_str())
}

/// Counts emotions by id, keeping the newest snapshot seen for each.
pub(crate) fn count_emotions<'a>(
    entries: impl IntoIterator<Item = &'a MoodEntry>,
) -> HashMap<&'a str, (usize, &'a MoodEntry)> {
    let mut counts: HashMap<&str, (usize, &MoodEntry)> = HashMap::new();
    for entry in entries {
        counts
            .entry(entry.emotion.id.as_str())
            .and_modify(|(count, newest)| {
                *count += 1;
                if is_newer(entry, newest) {
                    *newest = entry;
                }
            })
            .or_insert((1, entry));
    }
    counts
}

/// Picks the emotion with the highest count. Ties go to the emotion that
/// comes first in the catalog.
pub(crate) fn dominant_emotion<'a>(
    counts: &HashMap<&'a str, (usize, &'a MoodEntry)>,
) -> Option<Emotion> {
    counts
        .iter()
        .map(|(&id, &(count, newest))| (count, id, newest))
        .min_by(|(count_a, id_a, _), (count_b, id_b, _)| {
            count_b.cmp(count_a).then_with(|| {
                catalog_order(emotion_rank(id_a), id_a)
                    .cmp(&catalog_order(emotion_rank(id_b), id_b))
            })
        })
        .map(|(_, _, newest)| newest.emotion.clone())
}

/// The emotion recorded most often, or `None` when there are no entries.
pub fn most_frequent_emotion(entries: &[MoodEntry]) -> Option<Emotion> {
    dominant_emotion(&count_emotions(entries))
}

/// Activities ranked by how many entries mention them.
///
/// Sorted by count (highest first), ties in catalog order, then truncated to
/// `limit`. Each activity is reported with the snapshot from its newest entry.
pub fn top_activities(entries: &[MoodEntry], limit: usize) -> Vec<ActivityCount> {
    let mut counts: HashMap<&str, (usize, &MoodEntry, &ActivityTag)> = HashMap::new();
    for entry in entries {
        for activity in &entry.activities {
            counts
                .entry(activity.id.as_str())
                .and_modify(|(count, newest, tag)| {
                    *count += 1;
                    if is_newer(entry, newest) {
                        *newest = entry;
                        *tag = activity;
                    }
                })
                .or_insert((1, entry, activity));
        }
    }

    let mut ranked: Vec<(usize, &ActivityTag)> = counts
        .into_values()
        .map(|(count, _, tag)| (count, tag))
        .collect();
    ranked.sort_by(|(count_a, a), (count_b, b)| {
        count_b.cmp(count_a).then_with(|| {
            catalog_order(activity_rank(&a.id), &a.id)
                .cmp(&catalog_order(activity_rank(&b.id), &b.id))
        })
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(count, activity)| ActivityCount {
            activity: activity.clone(),
            count,
        })
        .collect()
}

/// Share of the expected daily check-ins that were actually written, in
/// percent and capped at 100.
pub fn completion_rate(entries: &[MoodEntry], range: TimeRange) -> f64 {
    let expected = range.expected_entries() as f64;
    (entries.len() as f64 / expected * 100.0).min(100.0)
}

/// Number of distinct UTC calendar days with at least one entry.
pub fn days_tracked(entries: &[MoodEntry]) -> usize {
    entries
        .iter()
        .map(|e| e.timestamp.date_naive())
        .collect::<HashSet<_>>()
        .len()
}
