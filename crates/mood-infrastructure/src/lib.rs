pub mod config_service;
pub mod export;
pub mod in_memory_entry_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::export::{ExportBundle, FORMAT_VERSION, StorageStats};
pub use crate::in_memory_entry_repository::InMemoryEntryRepository;
pub use crate::paths::MoodPaths;
