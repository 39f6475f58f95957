//! Path resolution for mood journal files.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for mood_core::MoodError {
    fn from(err: PathError) -> Self {
        mood_core::MoodError::config(err.to_string())
    }
}

/// Well-known locations for mood journal files.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/mood-journal/      # Config directory (dirs::config_dir)
/// └── config.toml              # Application configuration
/// ```
pub struct MoodPaths;

impl MoodPaths {
    pub const APP_DIR: &'static str = "mood-journal";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the mood journal configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/mood-journal/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        // dirs may return None in minimal sandboxes
        if let Ok(file) = MoodPaths::config_file() {
            assert!(file.ends_with("mood-journal/config.toml"));
        }
    }
}
