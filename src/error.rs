//! Error types for readability-cache

use thiserror::Error;

/// Result type alias for readability operations
pub type Result<T> = std::result::Result<T, ReadabilityError>;

/// Error types for readability operations
#[derive(Error, Debug)]
pub enum ReadabilityError {
    /// Input file could not be opened or read
    #[error("Cannot open file '{path}': {reason}")]
    FileNotFound { path: String, reason: String },

    /// Text has no words or no sentences, so no score can be computed
    #[error(
        "Cannot score '{path}': found {words} word(s) in {sentences} sentence(s), \
         at least one of each is required"
    )]
    DegenerateInput {
        path: String,
        words: usize,
        sentences: usize,
    },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache store could not be opened, read or written
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}
