//! Journal application services.

mod service;

pub use service::{JournalService, LoadTicket};
