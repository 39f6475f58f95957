//! Emotion catalog.

use serde::{Deserialize, Serialize};

/// Built-in emotions as `(id, label, emoji, color)`, in display order.
pub const EMOTION_SEEDS: [(&str, &str, &str, &str); 9] = [
    ("joy", "Joy", "😃", "#FFD700"),
    ("gratitude", "Grateful", "🙏", "#4CAF50"),
    ("peace", "Peaceful", "😌", "#2196F3"),
    ("love", "Loved", "❤️", "#E91E63"),
    ("hope", "Hopeful", "✨", "#9C27B0"),
    ("anxiety", "Anxious", "😰", "#FF9800"),
    ("sadness", "Sad", "😢", "#607D8B"),
    ("anger", "Angry", "😠", "#F44336"),
    ("fear", "Afraid", "😨", "#795548"),
];

/// An emotion a user can attach to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emotion {
    /// Stable key (e.g. "joy").
    pub id: String,
    /// Display label (e.g. "Joy").
    pub label: String,
    pub emoji: String,
    /// Color tag as a hex string.
    pub color: String,
}

impl Emotion {
    /// Creates an emotion value. Used for catalog seeds and for tests that need
    /// emotions outside the built-in catalog.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        emoji: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            emoji: emoji.into(),
            color: color.into(),
        }
    }

    /// Position of this emotion in the built-in catalog, if it is one.
    pub fn catalog_rank(&self) -> Option<usize> {
        emotion_rank(&self.id)
    }
}

/// Returns all built-in emotions in catalog order.
pub fn emotions() -> Vec<Emotion> {
    EMOTION_SEEDS
        .iter()
        .map(|&(id, label, emoji, color)| Emotion::new(id, label, emoji, color))
        .collect()
}

/// Looks up a built-in emotion by id.
pub fn find_emotion(id: &str) -> Option<Emotion> {
    EMOTION_SEEDS
        .iter()
        .find(|(seed_id, ..)| *seed_id == id)
        .map(|&(id, label, emoji, color)| Emotion::new(id, label, emoji, color))
}

/// Catalog position of an emotion id.
pub fn emotion_rank(id: &str) -> Option<usize> {
    EMOTION_SEEDS.iter().position(|(seed_id, ..)| *seed_id == id)
}
