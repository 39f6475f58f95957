//! Reference catalogs bundled with the app.
//!
//! Emotions and activity tags are static data. Entries embed a snapshot of the
//! catalog item they were created with, so the catalog order here is only used
//! for display and for deterministic tie-breaking in analytics.
//!
//! # Module Structure
//!
//! - `emotion`: `Emotion` and the nine built-in emotions
//! - `activity`: `ActivityTag` and the nine built-in activities

mod activity;
mod emotion;

pub use activity::{ACTIVITY_SEEDS, ActivityTag, activities, activity_rank, find_activity};
pub use emotion::{EMOTION_SEEDS, Emotion, emotion_rank, emotions, find_emotion};
