//! Entry repository trait.
//!
//! Defines the interface the journal uses to reach whatever store holds the
//! user's entries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::MoodEntry;
use crate::error::Result;

/// An abstract store for mood entries.
///
/// This trait decouples the journal and its analytics from the storage
/// mechanism (local key-value blob, relational rows, hosted backend). The
/// store is owned by a single user session; implementations need not handle
/// concurrent writers.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Lists all stored entries.
    ///
    /// No ordering is guaranteed; callers sort if they need to.
    async fn get_all_entries(&self) -> Result<Vec<MoodEntry>>;

    /// Adds an entry to the store.
    async fn add_entry(&self, entry: &MoodEntry) -> Result<()>;

    /// Deletes an entry by id.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Entry deleted (or didn't exist)
    /// - `Err(_)`: Error occurred during deletion
    async fn delete_entry(&self, id: &str) -> Result<()>;

    /// Removes every entry.
    async fn clear_all(&self) -> Result<()>;

    /// Lists entries whose timestamp lies in `[start, end]`.
    ///
    /// The default implementation filters `get_all_entries`; stores with an
    /// index can override it.
    async fn get_entries_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MoodEntry>> {
        let entries = self.get_all_entries().await?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.timestamp >= start && entry.timestamp <= end)
            .collect())
    }
}
