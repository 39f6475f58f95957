//! Error types for the mood journal.

use thiserror::Error;

/// A shared error type for the whole mood journal workspace.
///
/// Validation failures (`MissingEmotion`, `IntensityOutOfRange`) are
/// recoverable and meant to be surfaced back to the user. Everything else
/// comes from collaborators (entry stores, config files, import/export).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MoodError {
    /// A draft entry was submitted without an emotion selection.
    #[error("An emotion must be selected before saving an entry")]
    MissingEmotion,

    /// Intensity outside the inclusive 1..=10 scale.
    #[error("Intensity {value} is out of range (expected 1-10)")]
    IntensityOutOfRange { value: i64 },

    /// Emotion id that does not exist in the catalog.
    #[error("Unknown emotion: '{id}'")]
    UnknownEmotion { id: String },

    /// Activity id that does not exist in the catalog.
    #[error("Unknown activity: '{id}'")]
    UnknownActivity { id: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (entry store layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MoodError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn intensity_out_of_range(value: impl Into<i64>) -> Self {
        Self::IntensityOutOfRange {
            value: value.into(),
        }
    }

    pub fn unknown_emotion(id: impl Into<String>) -> Self {
        Self::UnknownEmotion { id: id.into() }
    }

    pub fn unknown_activity(id: impl Into<String>) -> Self {
        Self::UnknownActivity { id: id.into() }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error came from draft validation.
    ///
    /// Validation errors are recoverable by re-prompting the user; callers
    /// should not treat them as storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingEmotion
                | Self::IntensityOutOfRange { .. }
                | Self::UnknownEmotion { .. }
                | Self::UnknownActivity { .. }
        )
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for MoodError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MoodError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MoodError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for MoodError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error for collaborators that report opaque failures
impl From<anyhow::Error> for MoodError {
    fn from(err: anyhow::Error) -> Self {
        Self::DataAccess(err.to_string())
    }
}

/// A type alias for `Result<T, MoodError>`.
pub type Result<T> = std::result::Result<T, MoodError>;
