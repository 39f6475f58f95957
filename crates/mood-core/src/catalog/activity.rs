//! Activity tag catalog.

use serde::{Deserialize, Serialize};

/// Built-in activity tags as `(id, name, icon, color)`, in display order.
pub const ACTIVITY_SEEDS: [(&str, &str, &str, &str); 9] = [
    ("exercise", "Exercise", "🏃", "#4CAF50"),
    ("meditation", "Meditation", "🧘", "#2196F3"),
    ("reading", "Reading", "📚", "#9C27B0"),
    ("music", "Music", "🎵", "#E91E63"),
    ("nature", "Nature", "🌿", "#4CAF50"),
    ("social", "Social", "👥", "#FF9800"),
    ("creative", "Creative", "🎨", "#F44336"),
    ("rest", "Rest", "😴", "#607D8B"),
    ("work", "Work", "💼", "#795548"),
];

/// An activity a user can tag an entry with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityTag {
    pub id: String,
    pub name: String,
    /// Icon reference (an emoji in the built-in catalog).
    pub icon: String,
    pub color: String,
}

impl ActivityTag {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    pub fn catalog_rank(&self) -> Option<usize> {
        activity_rank(&self.id)
    }
}

/// Returns all built-in activity tags in catalog order.
pub fn activities() -> Vec<ActivityTag> {
    ACTIVITY_SEEDS
        .iter()
        .map(|&(id, name, icon, color)| ActivityTag::new(id, name, icon, color))
        .collect()
}

/// Looks up a built-in activity tag by id.
pub fn find_activity(id: &str) -> Option<ActivityTag> {
    ACTIVITY_SEEDS
        .iter()
        .find(|(seed_id, ..)| *seed_id == id)
        .map(|&(id, name, icon, color)| ActivityTag::new(id, name, icon, color))
}

pub fn activity_rank(id: &str) -> Option<usize> {
    ACTIVITY_SEEDS.iter().position(|(seed_id, ..)| *seed_id == id)
}
