//! File storage primitives shared by the config service and exports.

mod atomic_file;

pub use atomic_file::{AtomicFile, AtomicFileError, FileFormat};
