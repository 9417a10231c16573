//! Error types for the CLI application.
//!
//! This module defines the error types used throughout the CLI for better
//! error propagation and handling.
//!
//! ## Batch Validation Errors
//!
//! The `BatchValidationError<T>` type collects per-item failures with context.
//! The verify command uses it to report every bad game record in a file instead
//! of stopping at the first one.

use slidepuzzle_engine::errors::BoardError;
use std::fmt;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<BoardError> for CliError {
    fn from(error: BoardError) -> Self {
        CliError::Engine(error.to_string())
    }
}

/// Generic error type for batch validation operations.
///
/// Used by commands that process multiple items and need to collect errors
/// with context for user-friendly error reporting. Each error tracks the item
/// that failed and a descriptive error message.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g., `usize` for a line
///   number, `String` for a game id). Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use slidepuzzle_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "Scramble walk does not match seed".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: Scramble walk does not match seed");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
