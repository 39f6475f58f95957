use mood_core::error::Result;
use mood_core::{
    AnalyticsSummary, AppConfig, EntryDraft, EntryRepository, JournalAction, JournalState,
    MoodEntry, TimeRange,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};

/// Identifies one load started by [`JournalService::begin_load`].
///
/// Only the most recently issued ticket may complete a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// State plus the mutations applied while a load was in flight.
#[derive(Debug, Default)]
struct Inner {
    state: JournalState,
    /// Replayed on top of the loaded entries when the current load completes.
    pending: Vec<JournalAction>,
}

impl Inner {
    fn apply(&mut self, action: JournalAction) {
        if self.state.is_loading() {
            self.pending.push(action.clone());
        }
        self.state.dispatch(action);
    }

    fn replay_pending(&mut self) {
        for action in std::mem::take(&mut self.pending) {
            match action {
                JournalAction::Add(entry) if self.state.contains(&entry.id) => {}
                action => self.state.dispatch(action),
            }
        }
    }
}

/// Coordinates the journal state with an entry store.
///
/// `JournalService` is responsible for:
/// - Validating drafts and turning them into entries
/// - Writing to the store before updating the in-memory state
/// - Loading entries, discarding completions of superseded loads
/// - Computing analytics over the current state
///
/// Submits, deletes and clears made while a load is in flight are replayed on
/// top of the loaded entries, so a load that read the store earlier never
/// undoes them.
pub struct JournalService<R: EntryRepository, C: Clock = SystemClock> {
    repository: Arc<R>,
    clock: C,
    config: AppConfig,
    inner: RwLock<Inner>,
    /// Serializes store writes and id allocation. The state lock is never
    /// held across a store call.
    writes: Mutex<()>,
    /// Ticket of the newest load.
    generation: AtomicU64,
}

impl<R: EntryRepository> JournalService<R, SystemClock> {
    /// Creates a service that reads the wall clock.
    pub fn with_system_clock(repository: Arc<R>, config: AppConfig) -> Self {
        Self::new(repository, SystemClock, config)
    }
}

impl<R: EntryRepository, C: Clock> JournalService<R, C> {
    /// Creates a new `JournalService` with an empty state.
    ///
    /// # Arguments
    ///
    /// * `repository` - The store entries are read from and written to
    /// * `clock` - Source of creation instants and of "now" for analytics
    /// * `config` - Analytics and journal defaults
    pub fn new(repository: Arc<R>, clock: C, config: AppConfig) -> Self {
        Self {
            repository,
            clock,
            config,
            inner: RwLock::new(Inner::default()),
            writes: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a clone of the current state.
    pub async fn snapshot(&self) -> JournalState {
        self.inner.read().await.state.clone()
    }

    /// Validates `draft`, stores the resulting entry and adds it to the state.
    ///
    /// The entry id is the creation instant in epoch milliseconds, bumped by
    /// one millisecond while it collides with an id in the store or the state.
    ///
    /// # Errors
    ///
    /// Returns a validation error (`MissingEmotion`, `IntensityOutOfRange`)
    /// without touching the store, or the store's error if a read or the
    /// write fails.
    pub async fn submit(&self, draft: EntryDraft) -> Result<MoodEntry> {
        let default_intensity = self.config.journal.default_intensity()?;
        let validated = draft.validate_with_default_intensity(default_intensity)?;

        let _writes = self.writes.lock().await;
        let stored: HashSet<String> = self
            .repository
            .get_all_entries()
            .await?
            .into_iter()
            .map(|entry| entry.id)
            .collect();

        let timestamp = self.clock.now();
        let id = {
            let inner = self.inner.read().await;
            next_free_id(timestamp.timestamp_millis(), |id| {
                stored.contains(id) || inner.state.contains(id)
            })
        };
        let entry = validated.into_entry(id, timestamp);

        self.repository.add_entry(&entry).await?;
        info!(
            id = %entry.id,
            emotion = %entry.emotion.id,
            intensity = entry.intensity.get(),
            "Saved mood entry"
        );

        self.inner
            .write()
            .await
            .apply(JournalAction::Add(entry.clone()));
        Ok(entry)
    }

    /// Deletes an entry from the store, then from the state.
    ///
    /// Deleting an unknown id is not an error.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _writes = self.writes.lock().await;
        self.repository.delete_entry(id).await?;

        let mut inner = self.inner.write().await;
        if !inner.state.contains(id) {
            debug!(id, "Deleted id was not in the journal state");
        }
        inner.apply(JournalAction::Remove(id.to_string()));
        info!(id, "Deleted mood entry");
        Ok(())
    }

    /// Removes every entry from the store, then from the state.
    pub async fn clear_all(&self) -> Result<()> {
        let _writes = self.writes.lock().await;
        self.repository.clear_all().await?;

        let mut inner = self.inner.write().await;
        let removed = inner.state.len();
        inner.apply(JournalAction::Clear);
        info!(removed, "Cleared all mood entries");
        Ok(())
    }

    /// Reloads every entry from the store.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The state now holds the loaded entries, most recent first
    /// - `Ok(false)`: A newer load started meanwhile; this result was dropped
    /// - `Err(_)`: The store failed; the error is also recorded in the state
    pub async fn refresh(&self) -> Result<bool> {
        let ticket = self.begin_load().await;
        let result = self.repository.get_all_entries().await;
        self.complete_load(ticket, result).await
    }

    /// Starts a load: issues a new ticket and marks the state as loading.
    ///
    /// Any load started earlier becomes stale.
    pub async fn begin_load(&self) -> LoadTicket {
        let mut inner = self.inner.write().await;
        let ticket = LoadTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        inner.state.dispatch(JournalAction::SetLoading(true));
        debug!(ticket = ticket.0, "Started loading mood entries");
        ticket
    }

    /// Finishes the load identified by `ticket` with `result`.
    ///
    /// Mutations made since the load started are applied again on top of the
    /// loaded entries. See [`refresh`](Self::refresh) for the meaning of the
    /// return value.
    pub async fn complete_load(
        &self,
        ticket: LoadTicket,
        result: Result<Vec<MoodEntry>>,
    ) -> Result<bool> {
        let mut inner = self.inner.write().await;

        let current = self.generation.load(Ordering::SeqCst);
        if ticket.0 != current {
            debug!(
                ticket = ticket.0,
                current, "Discarding result of a superseded load"
            );
            return Ok(false);
        }

        match result {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                info!(
                    count = entries.len(),
                    replayed = inner.pending.len(),
                    "Loaded mood entries"
                );
                inner.state.dispatch(JournalAction::ReplaceAll(entries));
                inner.replay_pending();
                Ok(true)
            }
            Err(err) => {
                warn!(error = %err, "Failed to load mood entries");
                inner.pending.clear();
                inner
                    .state
                    .dispatch(JournalAction::SetError(Some(err.to_string())));
                Err(err)
            }
        }
    }

    /// Analytics over the current state for `range`, as of the clock's now.
    pub async fn summary(&self, range: TimeRange) -> AnalyticsSummary {
        let inner = self.inner.read().await;
        AnalyticsSummary::compute(
            inner.state.entries(),
            range,
            self.clock.now(),
            &self.config.analytics,
        )
    }

    /// Analytics for the configured default range.
    pub async fn summary_default(&self) -> AnalyticsSummary {
        self.summary(self.config.journal.default_range).await
    }
}

fn next_free_id(mut millis: i64, taken: impl Fn(&str) -> bool) -> String {
    while taken(&millis.to_string()) {
        millis += 1;
    }
    millis.to_string()
}
