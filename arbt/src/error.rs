//! Error handling module for the arbt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the arbt CLI application.
#[derive(Error, Debug)]
pub enum ArbtError {
    /// A configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command-line or configuration input was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more inputs failed to lex. Their diagnostics have already
    /// been printed.
    #[error("{failed} file(s) failed to lex")]
    LexFailed {
        /// Number of inputs that did not lex
        failed: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file or span could not be resolved in the source map.
    #[error("Source map error: {0}")]
    SourceMap(#[from] arbc_util::SourceMapError),
}

/// Result type alias using ArbtError.
pub type Result<T> = std::result::Result<T, ArbtError>;
