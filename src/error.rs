//! Error types for the to-do store.

use std::io;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A required input was missing or malformed.
///
/// The `Display` text is what the user sees; it matches the alerts of the
/// page this tool replaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Task text is empty.
    #[error("Please enter a task.")]
    EmptyTask,

    /// Date or reminder time is missing.
    #[error("Please select both a date and a reminder time.")]
    MissingSchedule,

    /// Date is not `YYYY-MM-DD`.
    #[error("Invalid date '{0}'. Use YYYY-MM-DD (e.g., '2025-03-15')")]
    InvalidDate(String),

    /// Time is not `HH:MM` or `HH:MM:SS`.
    #[error("Invalid time '{0}'. Use HH:MM (e.g., '09:30')")]
    InvalidTime(String),
}

/// Main error enum for the store and its persistence.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected user input. No state was changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// IO error from the storage backend.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the validation failure if this error is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}
