//! Error types for smartdo.

use thiserror::Error;

/// Errors surfaced to callers of the task list, storage and configuration layers.
///
/// The natural-language interpreter and the quote service never produce these:
/// a failed extraction simply leaves its field unset, and a failed quote fetch
/// falls back to a local quote.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing the task file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration could not be resolved, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No task at the requested position.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A user-supplied value was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
