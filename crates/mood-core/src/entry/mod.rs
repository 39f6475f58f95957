//! Mood entry domain module.
//!
//! # Module Structure
//!
//! - `model`: `MoodEntry` and the `Intensity` scale
//! - `draft`: `EntryDraft`, the pre-persistence validator and `ValidatedDraft`
//! - `repository`: `EntryRepository` trait implemented by entry stores

mod draft;
mod model;
pub mod repository;

pub use draft::{EntryDraft, ValidatedDraft, validate};
pub use model::{Intensity, MoodEntry};
pub use repository::EntryRepository;
