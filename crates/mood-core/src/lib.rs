pub mod analytics;
pub mod catalog;
pub mod config;
pub mod entry;
pub mod error;
pub mod journal;

// Re-export common types
pub use analytics::{AnalyticsSummary, TimeRange, Trend};
pub use config::AppConfig;
pub use entry::{EntryDraft, EntryRepository, Intensity, MoodEntry};
pub use error::{MoodError, Result};
pub use journal::{JournalAction, JournalState};
