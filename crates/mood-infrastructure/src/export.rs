//! JSON export/import of the journal and storage statistics.
//!
//! An export is a single pretty-printed JSON document:
//!
//! ```json
//! {
//!   "formatVersion": 1,
//!   "exportedAt": "2024-05-01T12:00:00Z",
//!   "entries": [ ... ]
//! }
//! ```

use crate::storage::AtomicFile;
use chrono::{DateTime, Utc};
use mood_core::{EntryRepository, MoodEntry, MoodError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Newest export layout this build can read.
pub const FORMAT_VERSION: u32 = 1;

/// Rough per-entry footprint used for the storage estimate.
pub const APPROX_KB_PER_ENTRY: f64 = 0.5;

/// A full snapshot of the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub format_version: u32,
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<MoodEntry>,
}

impl ExportBundle {
    pub fn new(entries: Vec<MoodEntry>, exported_at: DateTime<Utc>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            exported_at,
            entries,
        }
    }

    /// Snapshots every entry in `repository`.
    pub async fn from_repository<R>(repository: &R, exported_at: DateTime<Utc>) -> Result<Self>
    where
        R: EntryRepository + ?Sized,
    {
        let entries = repository.get_all_entries().await?;
        Ok(Self::new(entries, exported_at))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and checks an export.
    ///
    /// Intensity outside 1-10 fails during deserialization; bundles written
    /// by a newer format are rejected.
    pub fn from_json(content: &str) -> Result<Self> {
        let bundle: Self = serde_json::from_str(content)?;
        bundle.check()?;
        Ok(bundle)
    }

    /// Writes the bundle atomically to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        AtomicFile::<ExportBundle>::json(path.to_path_buf()).save(self)?;
        info!(
            path = %path.display(),
            entries = self.entries.len(),
            "Exported mood entries"
        );
        Ok(())
    }

    /// Reads and checks a bundle from `path`.
    pub fn read_from(path: &Path) -> Result<Self> {
        let bundle = AtomicFile::<ExportBundle>::json(path.to_path_buf())
            .load()?
            .ok_or_else(|| MoodError::not_found("export file", path.display().to_string()))?;
        bundle.check()?;
        info!(
            path = %path.display(),
            entries = bundle.entries.len(),
            "Read mood export"
        );
        Ok(bundle)
    }

    /// Adds every entry to `repository`, skipping ids it already holds or
    /// that appeared earlier in the bundle.
    ///
    /// Returns the number of entries added.
    pub async fn import_into<R>(&self, repository: &R) -> Result<usize>
    where
        R: EntryRepository + ?Sized,
    {
        let mut existing: HashSet<String> = repository
            .get_all_entries()
            .await?
            .into_iter()
            .map(|entry| entry.id)
            .collect();

        let mut added = 0;
        for entry in &self.entries {
            if existing.contains(&entry.id) {
                warn!(id = %entry.id, "Skipping imported entry with duplicate id");
                continue;
            }
            repository.add_entry(entry).await?;
            existing.insert(entry.id.clone());
            added += 1;
        }
        info!(added, skipped = self.entries.len() - added, "Imported mood entries");
        Ok(added)
    }

    pub fn stats(&self) -> StorageStats {
        StorageStats::from_entries(&self.entries)
    }

    fn check(&self) -> Result<()> {
        if self.format_version > FORMAT_VERSION {
            return Err(MoodError::Serialization {
                format: "JSON".to_string(),
                message: format!(
                    "export format version {} is newer than supported version {}",
                    self.format_version, FORMAT_VERSION
                ),
            });
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            entry.check_invariants()?;
            if !seen.insert(entry.id.as_str()) {
                return Err(MoodError::Serialization {
                    format: "JSON".to_string(),
                    message: format!("export lists entry id '{}' more than once", entry.id),
                });
            }
        }
        Ok(())
    }
}

/// Profile-screen storage figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub total_entries: usize,
    pub approx_size_kb: f64,
}

impl StorageStats {
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        Self {
            total_entries: entries.len(),
            approx_size_kb: entries.len() as f64 * APPROX_KB_PER_ENTRY,
        }
    }

    pub async fn from_repository<R>(repository: &R) -> Result<Self>
    where
        R: EntryRepository + ?Sized,
    {
        let entries = repository.get_all_entries().await?;
        Ok(Self::from_entries(&entries))
    }
}
