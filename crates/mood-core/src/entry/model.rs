//! Mood entry domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{ActivityTag, Emotion};
use crate::error::{MoodError, Result};

/// Intensity of an emotion on an inclusive 1-10 scale.
///
/// Construction is the only place the range is checked; out-of-range values
/// are rejected rather than clamped. Deserialization goes through the same
/// check, so an imported entry can never carry intensity 0 or 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    /// Value used when the user never touched the intensity slider.
    pub const DEFAULT: Intensity = Intensity(5);

    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(MoodError::intensity_out_of_range(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Intensity {
    type Error = MoodError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// One user-submitted emotional check-in.
///
/// Emotion and activities are embedded snapshots of the catalog items at
/// write time. Entries are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Creation instant in epoch milliseconds, as a string.
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub emotion: Emotion,
    pub intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_text: Option<String>,
    /// Activity snapshots, at most one per activity id.
    #[serde(default)]
    pub activities: Vec<ActivityTag>,
    /// What the user is grateful for, blank lines already dropped.
    #[serde(default)]
    pub gratitude: Vec<String>,
    #[serde(default)]
    pub is_private: bool,
}

impl MoodEntry {
    /// Id derived from a creation instant.
    pub fn id_for(timestamp: DateTime<Utc>) -> String {
        timestamp.timestamp_millis().to_string()
    }

    pub fn has_activity(&self, activity_id: &str) -> bool {
        self.activities.iter().any(|a| a.id == activity_id)
    }

    /// Checks the structural invariants that deserialization alone cannot.
    pub fn check_invariants(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(MoodError::internal("mood entry has an empty id"));
        }
        let mut seen = std::collections::HashSet::new();
        for activity in &self.activities {
            if !seen.insert(activity.id.as_str()) {
                return Err(MoodError::internal(format!(
                    "mood entry '{}' lists activity '{}' twice",
                    self.id, activity.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_activity, find_emotion};

    fn sample_entry() -> MoodEntry {
        let timestamp = DateTime::parse_from_rfc3339("2024-05-01T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        MoodEntry {
            id: MoodEntry::id_for(timestamp),
            timestamp,
            emotion: find_emotion("joy").unwrap(),
            intensity: Intensity::new(8).unwrap(),
            journal_text: Some("Sunny walk".to_string()),
            activities: vec![find_activity("nature").unwrap()],
            gratitude: vec!["coffee".to_string()],
            is_private: false,
        }
    }

    #[test]
    fn test_intensity_bounds() {
        assert!(Intensity::new(1).is_ok());
        assert!(Intensity::new(10).is_ok());
        assert_eq!(
            Intensity::new(0).unwrap_err(),
            MoodError::IntensityOutOfRange { value: 0 }
        );
        assert_eq!(
            Intensity::new(11).unwrap_err(),
            MoodError::IntensityOutOfRange { value: 11 }
        );
        assert_eq!(Intensity::default().get(), 5);
    }

    #[test]
    fn test_id_from_timestamp() {
        let entry = sample_entry();
        assert_eq!(entry.id, "1714552200000");
    }

    #[test]
    fn test_json_shape() {
        let entry = sample_entry();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["intensity"], 8);
        assert_eq!(json["journalText"], "Sunny walk");
        assert_eq!(json["isPrivate"], false);
        assert_eq!(json["emotion"]["id"], "joy");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_intensity() {
        let mut json = serde_json::to_value(sample_entry()).unwrap();
        json["intensity"] = serde_json::json!(11);
        assert!(serde_json::from_value::<MoodEntry>(json).is_err());
    }

    #[test]
    fn test_duplicate_activity_violates_invariants() {
        let mut entry = sample_entry();
        assert!(entry.check_invariants().is_ok());
        entry.activities.push(find_activity("nature").unwrap());
        assert!(entry.check_invariants().is_err());
    }
}
