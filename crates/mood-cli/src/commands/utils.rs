use anyhow::{Context, Result};
use mood_application::JournalService;
use mood_core::AppConfig;
use mood_infrastructure::{ExportBundle, InMemoryEntryRepository};
use std::path::Path;
use std::sync::Arc;

/// Loads an export into a fresh in-memory journal.
pub async fn load_journal(
    file: &Path,
    config: AppConfig,
) -> Result<JournalService<InMemoryEntryRepository>> {
    let bundle = ExportBundle::read_from(file)
        .with_context(|| format!("Failed to read export {}", file.display()))?;

    let repository = Arc::new(InMemoryEntryRepository::with_entries(bundle.entries));
    let service = JournalService::with_system_clock(repository, config);
    service
        .refresh()
        .await
        .context("Failed to load entries into the journal")?;

    Ok(service)
}

/// Formats a mood average with one decimal.
pub fn format_mood(value: f64) -> String {
    format!("{:.1}", value)
}
