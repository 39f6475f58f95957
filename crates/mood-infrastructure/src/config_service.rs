//! Configuration service implementation.
//!
//! Loads `AppConfig` from `~/.config/mood-journal/config.toml` (or an explicit
//! path) and caches it after the first read.

use crate::paths::MoodPaths;
use crate::storage::AtomicFile;
use mood_core::{AppConfig, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Configuration service that loads and caches the app configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, filled on first successful load.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default platform config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(MoodPaths::config_file()?))
    }

    /// Creates a service for an explicit config file (useful for testing
    /// and `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading it from file if not cached.
    ///
    /// A missing or empty file yields the defaults. A file that fails to parse
    /// or validate is an error.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let cached = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref config) = *cached {
                return Ok(config.clone());
            }
        }

        let loaded = self.load()?;

        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = None;
    }

    /// Validates and writes `config` atomically, then refreshes the cache.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        config.validate()?;
        self.file().save(config)?;
        info!(path = %self.path.display(), "Saved configuration");

        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(config.clone());
        Ok(())
    }

    /// Applies `f` to the stored configuration under a file lock.
    ///
    /// The file is left untouched if the modified configuration is invalid.
    pub fn update<F>(&self, f: F) -> Result<AppConfig>
    where
        F: FnOnce(&mut AppConfig),
    {
        let updated = self.file().update(AppConfig::default(), |config| {
            f(config);
            config.validate()
        })?;

        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(updated.clone());
        Ok(updated)
    }

    fn load(&self) -> Result<AppConfig> {
        match self.file().load()? {
            Some(config) => {
                config.validate()?;
                debug!(path = %self.path.display(), "Loaded configuration");
                Ok(config)
            }
            None => {
                debug!(path = %self.path.display(), "No configuration file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    fn file(&self) -> AtomicFile<AppConfig> {
        AtomicFile::toml(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::TimeRange;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = service.get_config().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[journal]\ndefault_range = \"month\"\n").unwrap();

        let config = ConfigService::with_path(&path).get_config().unwrap();
        assert_eq!(config.journal.default_range, TimeRange::Month);
        assert_eq!(config.analytics.trend_window, 3);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[analytics]\ntrend_window = 0\n").unwrap();

        let err = ConfigService::with_path(&path).get_config().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_save_then_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let service = ConfigService::with_path(&path);

        let mut config = AppConfig::default();
        config.analytics.top_activities_limit = 3;
        service.save(&config).unwrap();

        let fresh = ConfigService::with_path(&path);
        assert_eq!(fresh.get_config().unwrap().analytics.top_activities_limit, 3);
    }

    #[test]
    fn test_cache_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(&path);
        assert_eq!(service.get_config().unwrap().journal.default_intensity, 5);

        std::fs::write(&path, "[journal]\ndefault_intensity = 7\n").unwrap();
        assert_eq!(service.get_config().unwrap().journal.default_intensity, 5);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().journal.default_intensity, 7);
    }

    #[test]
    fn test_update_persists() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let updated = service
            .update(|config| config.journal.default_range = TimeRange::Year)
            .unwrap();
        assert_eq!(updated.journal.default_range, TimeRange::Year);

        service.invalidate_cache();
        assert_eq!(
            service.get_config().unwrap().journal.default_range,
            TimeRange::Year
        );
    }

    #[test]
    fn test_invalid_update_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let err = service
            .update(|config| config.analytics.trend_window = 0)
            .unwrap_err();
        assert!(err.is_config());
        assert!(!service.path().exists());
    }
}
