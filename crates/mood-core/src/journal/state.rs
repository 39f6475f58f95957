//! Journal state container and its actions.

use serde::{Deserialize, Serialize};

use crate::entry::MoodEntry;

/// Operations that change a `JournalState`.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalAction {
    /// Prepend a freshly created entry.
    Add(MoodEntry),
    /// Remove the entry with this id, if present.
    Remove(String),
    /// Drop every entry.
    Clear,
    /// Replace the whole list, typically after loading from the store.
    ReplaceAll(Vec<MoodEntry>),
    /// Mark a load as in flight (or finished).
    SetLoading(bool),
    /// Record (or clear) the last user-visible error.
    SetError(Option<String>),
}

/// Entries for the current session plus load/error flags.
///
/// Entries are kept most-recent-first. `add`, `remove`, `clear` and
/// `replace_all` are the only ways the entry list changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalState {
    entries: Vec<MoodEntry>,
    is_loading: bool,
    error: Option<String>,
}

impl JournalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        let mut state = Self::new();
        state.replace_all(entries);
        state
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Applies an action.
    pub fn dispatch(&mut self, action: JournalAction) {
        match action {
            JournalAction::Add(entry) => self.add(entry),
            JournalAction::Remove(id) => {
                self.remove(&id);
            }
            JournalAction::Clear => self.clear(),
            JournalAction::ReplaceAll(entries) => self.replace_all(entries),
            JournalAction::SetLoading(loading) => self.is_loading = loading,
            JournalAction::SetError(error) => {
                self.error = error;
                self.is_loading = false;
            }
        }
    }

    /// Prepends an entry and clears any previous error.
    pub fn add(&mut self, entry: MoodEntry) {
        self.entries.insert(0, entry);
        self.error = None;
    }

    /// Removes an entry by id. Returns the removed entry.
    pub fn remove(&mut self, id: &str) -> Option<MoodEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces all entries, finishing any pending load.
    pub fn replace_all(&mut self, entries: Vec<MoodEntry>) {
        self.entries = entries;
        self.is_loading = false;
        self.error = None;
    }
}
