//! Application layer for the mood journal.
//!
//! This crate provides use case implementations that coordinate the domain
//! state container with an entry store.

pub mod clock;
pub mod journal;

pub use clock::{Clock, FixedClock, SystemClock};
pub use journal::{JournalService, LoadTicket};
