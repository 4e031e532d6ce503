//! Error types and Result aliases for Shell Lab
//!
//! Nothing a learner types ever produces an `Error`: an unrecognized command
//! is an ordinary, non-successful [`CommandResult`](crate::execution::CommandResult).
//! These errors cover the surroundings of the simulator: configuration files,
//! lesson catalogs and I/O.

use std::path::PathBuf;

/// Result type alias for Shell Lab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Shell Lab
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to save configuration file
    #[error("Failed to save config to '{}': {reason}", path.display())]
    ConfigSaveFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    // === Lesson errors ===
    /// Lesson not found in the catalog
    #[error("Lesson '{lesson_id}' not found")]
    LessonNotFound { lesson_id: String },

    /// Lesson already exists in the catalog
    #[error("Lesson '{lesson_id}' already exists")]
    LessonAlreadyExists { lesson_id: String },

    /// Cannot remove a built-in lesson
    #[error("Cannot remove built-in lesson '{lesson_id}'")]
    CannotRemoveBuiltInLesson { lesson_id: String },

    /// Lesson definition is inconsistent
    #[error("Lesson '{lesson_id}' is invalid: {reason}")]
    LessonValidationFailed { lesson_id: String, reason: String },

    /// Failed to import a lesson catalog
    #[error("Failed to import lessons: {reason}")]
    LessonImportFailed { reason: String },

    /// Failed to export a lesson
    #[error("Failed to export lesson '{lesson_id}': {reason}")]
    LessonExportFailed { lesson_id: String, reason: String },

    // === I/O and serialization errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    #[error("Error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
