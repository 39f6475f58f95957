//! Entry drafts and the pre-persistence validator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Intensity, MoodEntry};
use crate::catalog::{ActivityTag, Emotion, find_activity, find_emotion};
use crate::error::{MoodError, Result};

/// What the entry form holds before the user hits save.
///
/// Every field is optional from the form's point of view; `validate` decides
/// what is actually required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub emotion: Option<Emotion>,
    /// Raw slider value. `None` means the default intensity applies.
    pub intensity: Option<i64>,
    #[serde(default)]
    pub journal_text: String,
    #[serde(default)]
    pub activities: Vec<ActivityTag>,
    #[serde(default)]
    pub gratitude: Vec<String>,
    #[serde(default)]
    pub is_private: bool,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = Some(emotion);
        self
    }

    /// Selects a built-in emotion by id.
    pub fn with_emotion_id(self, id: &str) -> Result<Self> {
        let emotion = find_emotion(id).ok_or_else(|| MoodError::unknown_emotion(id))?;
        Ok(self.with_emotion(emotion))
    }

    pub fn with_intensity(mut self, intensity: i64) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_journal_text(mut self, text: impl Into<String>) -> Self {
        self.journal_text = text.into();
        self
    }

    pub fn with_activity(mut self, activity: ActivityTag) -> Self {
        self.activities.push(activity);
        self
    }

    /// Adds a built-in activity by id.
    pub fn with_activity_id(self, id: &str) -> Result<Self> {
        let activity = find_activity(id).ok_or_else(|| MoodError::unknown_activity(id))?;
        Ok(self.with_activity(activity))
    }

    pub fn with_gratitude(mut self, line: impl Into<String>) -> Self {
        self.gratitude.push(line.into());
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    /// Selects the activity if it is not selected yet, deselects it otherwise.
    pub fn toggle_activity(&mut self, activity: ActivityTag) {
        if let Some(pos) = self.activities.iter().position(|a| a.id == activity.id) {
            self.activities.remove(pos);
        } else {
            self.activities.push(activity);
        }
    }

    /// Validates the draft with the built-in default intensity.
    pub fn validate(self) -> Result<ValidatedDraft> {
        self.validate_with_default_intensity(Intensity::DEFAULT)
    }

    /// Validates the draft.
    ///
    /// Fails with `MissingEmotion` when no emotion is selected and with
    /// `IntensityOutOfRange` when the slider value is outside 1-10. On success
    /// duplicate activities are collapsed (first one wins), blank gratitude
    /// lines are dropped and blank journal text becomes `None`.
    pub fn validate_with_default_intensity(self, default: Intensity) -> Result<ValidatedDraft> {
        let emotion = self.emotion.ok_or(MoodError::MissingEmotion)?;
        let intensity = match self.intensity {
            Some(value) => Intensity::new(value)?,
            None => default,
        };

        let mut activities: Vec<ActivityTag> = Vec::with_capacity(self.activities.len());
        for activity in self.activities {
            if !activities.iter().any(|a| a.id == activity.id) {
                activities.push(activity);
            }
        }

        let gratitude = self
            .gratitude
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        let journal_text = if self.journal_text.trim().is_empty() {
            None
        } else {
            Some(self.journal_text)
        };

        Ok(ValidatedDraft {
            emotion,
            intensity,
            journal_text,
            activities,
            gratitude,
            is_private: self.is_private,
        })
    }
}

/// Validates a draft with the built-in default intensity.
pub fn validate(draft: EntryDraft) -> Result<ValidatedDraft> {
    draft.validate()
}

/// A draft that passed validation and can become a `MoodEntry`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub emotion: Emotion,
    pub intensity: Intensity,
    pub journal_text: Option<String>,
    pub activities: Vec<ActivityTag>,
    pub gratitude: Vec<String>,
    pub is_private: bool,
}

impl ValidatedDraft {
    /// Stamps the draft with its identity and creation instant.
    pub fn into_entry(self, id: String, timestamp: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id,
            timestamp,
            emotion: self.emotion,
            intensity: self.intensity,
            journal_text: self.journal_text,
            activities: self.activities,
            gratitude: self.gratitude,
            is_private: self.is_private,
        }
    }
}
