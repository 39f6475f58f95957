//! In-memory journal state.
//!
//! `JournalState` holds the entry list for one app session. It only changes
//! through `JournalAction` values passed to `JournalState::dispatch`.

mod state;

pub use state::{JournalAction, JournalState};
