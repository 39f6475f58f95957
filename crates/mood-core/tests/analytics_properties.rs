//! Property-based tests for the analytics functions using proptest.
//!
//! These generate random entry collections to check the invariants every
//! analytics function must hold regardless of input.

use chrono::{DateTime, Duration, Utc};
use mood_core::analytics::{
    TimeRange, average_intensity, classify_trend, completion_rate, filter, most_frequent_emotion,
    top_activities,
};
use mood_core::catalog::{ACTIVITY_SEEDS, EMOTION_SEEDS};
use mood_core::{EntryDraft, Intensity, MoodEntry, Trend};
use proptest::prelude::*;
use std::collections::HashSet;

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-01-31T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// (minutes before now, emotion index, intensity, activity indices)
fn entry_strategy() -> impl Strategy<Value = (i64, usize, i64, Vec<usize>)> {
    (
        0i64..(60 * 24 * 400),
        0..EMOTION_SEEDS.len(),
        1i64..=10,
        prop::collection::vec(0..ACTIVITY_SEEDS.len(), 0..5),
    )
}

fn build(spec: &(i64, usize, i64, Vec<usize>), index: usize) -> MoodEntry {
    let (minutes_ago, emotion, intensity, activities) = spec;
    let mut draft = EntryDraft::new()
        .with_emotion_id(EMOTION_SEEDS[*emotion].0)
        .unwrap()
        .with_intensity(*intensity);
    for activity in activities {
        draft = draft.with_activity_id(ACTIVITY_SEEDS[*activity].0).unwrap();
    }
    // the index offset keeps timestamps unique within one collection
    let timestamp = now() - Duration::minutes(*minutes_ago) - Duration::seconds(index as i64);
    draft
        .validate()
        .unwrap()
        .into_entry(format!("{}-{}", MoodEntry::id_for(timestamp), index), timestamp)
}

fn entries_strategy() -> impl Strategy<Value = Vec<MoodEntry>> {
    prop::collection::vec(entry_strategy(), 0..40).prop_map(|specs| {
        specs
            .iter()
            .enumerate()
            .map(|(i, spec)| build(spec, i))
            .collect()
    })
}

fn range_strategy() -> impl Strategy<Value = TimeRange> {
    prop_oneof![
        Just(TimeRange::Week),
        Just(TimeRange::Month),
        Just(TimeRange::Year),
    ]
}

proptest! {
    #[test]
    fn average_intensity_stays_on_scale(entries in entries_strategy()) {
        let average = average_intensity(&entries);
        prop_assert!((0.0..=10.0).contains(&average));
        if !entries.is_empty() {
            prop_assert!(average >= 1.0);
        }
    }

    #[test]
    fn intensity_outside_scale_is_rejected(value in prop_oneof![-100i64..=0, 11i64..=100]) {
        prop_assert!(Intensity::new(value).is_err());
        let draft = EntryDraft::new().with_emotion_id("joy").unwrap().with_intensity(value);
        prop_assert!(draft.validate().is_err());
    }

    #[test]
    fn top_activities_counts_are_exact(entries in entries_strategy(), limit in 0usize..12) {
        let top = top_activities(&entries, limit);
        let distinct: HashSet<&str> = entries
            .iter()
            .flat_map(|e| e.activities.iter().map(|a| a.id.as_str()))
            .collect();

        prop_assert!(top.len() <= limit.min(distinct.len()));
        for counted in &top {
            let actual = entries.iter().filter(|e| e.has_activity(&counted.activity.id)).count();
            prop_assert_eq!(counted.count, actual);
        }
        for pair in top.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn most_frequent_emotion_is_none_iff_empty(entries in entries_strategy()) {
        let emotion = most_frequent_emotion(&entries);
        prop_assert_eq!(emotion.is_none(), entries.is_empty());

        if let Some(emotion) = emotion {
            let best = entries.iter().filter(|e| e.emotion.id == emotion.id).count();
            for other in &entries {
                let count = entries.iter().filter(|e| e.emotion.id == other.emotion.id).count();
                prop_assert!(count <= best);
            }
        }
    }

    #[test]
    fn filter_is_idempotent(entries in entries_strategy(), range in range_strategy()) {
        let once = filter(&entries, range, now());
        let twice = filter(&once, range, now());
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() <= entries.len());
    }

    #[test]
    fn completion_rate_is_a_percentage(entries in entries_strategy(), range in range_strategy()) {
        let rate = completion_rate(&entries, range);
        prop_assert!((0.0..=100.0).contains(&rate));
    }

    #[test]
    fn trend_ignores_input_order(entries in entries_strategy()) {
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(classify_trend(&entries), classify_trend(&reversed));
    }

    #[test]
    fn trend_ignores_order_of_simultaneous_entries(
        intensities in prop::collection::vec(1i64..=10, 0..12),
        seed in any::<u64>(),
    ) {
        let timestamp = now();
        let entries: Vec<MoodEntry> = intensities
            .iter()
            .map(|&value| {
                EntryDraft::new()
                    .with_emotion_id("joy")
                    .unwrap()
                    .with_intensity(value)
                    .validate()
                    .unwrap()
                    .into_entry(MoodEntry::id_for(timestamp), timestamp)
            })
            .collect();
        let mut rotated = entries.clone();
        if !rotated.is_empty() {
            let shift = (seed % rotated.len() as u64) as usize;
            rotated.rotate_left(shift);
        }
        prop_assert_eq!(classify_trend(&entries), classify_trend(&rotated));
    }
}

#[test]
fn improving_scenario() {
    let specs = [
        (0, 0, 9, vec![]),
        (60, 0, 8, vec![]),
        (120, 0, 9, vec![]),
        (180, 6, 4, vec![]),
        (240, 6, 5, vec![]),
        (300, 6, 4, vec![]),
    ];
    let entries: Vec<MoodEntry> = specs.iter().enumerate().map(|(i, s)| build(s, i)).collect();
    assert_eq!(classify_trend(&entries), Trend::Improving);
}
