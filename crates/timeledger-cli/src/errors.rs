//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so scripts can tell a missing
//! entry apart from bad input.

use std::fmt;

use timeledger_core::TrackerError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Ledger file could not be read or written
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) | CliError::Storage(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Storage(_) => exit_codes::GENERAL_ERROR,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl From<TrackerError> for CliError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::NotFound(id) => CliError::not_found(
                format!("Apontamento #{} não encontrado!", id),
                "Hint: Run `timeledger list` to find entry IDs.",
            ),
            TrackerError::AlreadyCompleted(id) => {
                CliError::invalid_input(format!("Apontamento #{} já está completo!", id))
            }
            storage @ TrackerError::Storage(_) => CliError::Storage(storage.to_string()),
            other => CliError::invalid_input(other.to_string()),
        }
    }
}
