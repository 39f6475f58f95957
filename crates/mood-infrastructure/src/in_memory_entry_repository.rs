//! In-memory implementation of `EntryRepository`.

use async_trait::async_trait;
use mood_core::{EntryRepository, MoodEntry, Result};
use tokio::sync::RwLock;
use tracing::debug;

/// Entry store that keeps everything in process memory.
///
/// Entries are kept in insertion order; `get_all_entries` returns a copy.
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    entries: RwLock<Vec<MoodEntry>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `entries` (e.g. from an import).
    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn get_all_entries(&self) -> Result<Vec<MoodEntry>> {
        let entries = self.entries.read().await;
        debug!(count = entries.len(), "Listing mood entries");
        Ok(entries.clone())
    }

    async fn add_entry(&self, entry: &MoodEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        debug!(id = %entry.id, total = entries.len(), "Stored mood entry");
        Ok(())
    }

    async fn delete_entry(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        debug!(id, removed = before - entries.len(), "Deleted mood entry");
        Ok(())
    }

    async fn clear_all(&self) -> Result<()> {
        let mut entries = self.entries.write().await;
        debug!(removed = entries.len(), "Cleared mood entries");
        entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use mood_core::EntryDraft;

    fn entry_at(minutes: i64) -> MoodEntry {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
            + Duration::minutes(minutes);
        EntryDraft::new()
            .with_emotion_id("joy")
            .unwrap()
            .with_intensity(6)
            .validate()
            .unwrap()
            .into_entry(MoodEntry::id_for(timestamp), timestamp)
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let repo = InMemoryEntryRepository::new();
        repo.add_entry(&entry_at(0)).await.unwrap();
        repo.add_entry(&entry_at(5)).await.unwrap();

        let entries = repo.get_all_entries().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, entry_at(0).id);
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let repo = InMemoryEntryRepository::with_entries(vec![entry_at(0)]);
        repo.delete_entry("does-not-exist").await.unwrap();
        assert_eq!(repo.len().await, 1);

        repo.delete_entry(&entry_at(0).id).await.unwrap();
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_clear_all() {
        let repo = InMemoryEntryRepository::with_entries(vec![entry_at(0), entry_at(1)]);
        repo.clear_all().await.unwrap();
        assert!(repo.get_all_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_range_query_is_inclusive() {
        let repo =
            InMemoryEntryRepository::with_entries(vec![entry_at(0), entry_at(10), entry_at(20)]);
        let start = entry_at(0).timestamp;
        let end = entry_at(10).timestamp;

        let in_range = repo.get_entries_in_range(start, end).await.unwrap();
        assert_eq!(in_range.len(), 2);
    }
}
