//! Error types for Timeledger core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Timeledger operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Core error type for Timeledger operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Reading or writing the ledger file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted data could not be decoded
    #[error("Validation error: {0}")]
    Validation(String),

    /// A timestamp string could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// No entry carries the requested id
    #[error("Entry #{0} not found")]
    NotFound(u64),

    /// The entry already has an end time
    #[error("Entry #{0} is already completed")]
    AlreadyCompleted(u64),
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Validation(err.to_string())
    }
}
