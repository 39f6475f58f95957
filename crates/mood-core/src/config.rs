use serde::{Deserialize, Serialize};

use crate::analytics::{TimeRange, TrendConfig};
use crate::entry::Intensity;
use crate::error::{MoodError, Result};

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    #[serde(default = "default_trend_threshold")]
    pub trend_threshold: f64,
    #[serde(default = "default_top_activities_limit")]
    pub top_activities_limit: usize,
}

fn default_trend_window() -> usize {
    3
}

fn default_trend_threshold() -> f64 {
    0.5
}

fn default_top_activities_limit() -> usize {
    5
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trend_window: default_trend_window(),
            trend_threshold: default_trend_threshold(),
            top_activities_limit: default_top_activities_limit(),
        }
    }
}

impl AnalyticsConfig {
    pub fn trend_config(&self) -> TrendConfig {
        TrendConfig {
            window: self.trend_window,
            threshold: self.trend_threshold,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JournalConfig {
    /// Range shown when the analytics view opens.
    #[serde(default)]
    pub default_range: TimeRange,
    /// Intensity applied when a draft leaves it unset.
    #[serde(default = "default_intensity")]
    pub default_intensity: u8,
}

fn default_intensity() -> u8 {
    Intensity::DEFAULT.get()
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            default_range: TimeRange::default(),
            default_intensity: default_intensity(),
        }
    }
}

impl JournalConfig {
    pub fn default_intensity(&self) -> Result<Intensity> {
        Intensity::new(i64::from(self.default_intensity)).map_err(|_| {
            MoodError::config(format!(
                "journal.default_intensity must be between {} and {}, got {}",
                Intensity::MIN,
                Intensity::MAX,
                self.default_intensity
            ))
        })
    }
}

impl AppConfig {
    /// Parses a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects values the analytics cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.analytics.trend_window == 0 {
            return Err(MoodError::config("analytics.trend_window must be at least 1"));
        }
        if !self.analytics.trend_threshold.is_finite() || self.analytics.trend_threshold < 0.0 {
            return Err(MoodError::config(format!(
                "analytics.trend_threshold must be a non-negative number, got {}",
                self.analytics.trend_threshold
            )));
        }
        self.journal.default_intensity()?;
        Ok(())
    }
}
