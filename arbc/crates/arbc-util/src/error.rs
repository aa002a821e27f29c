//! Core error types for arbc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

use crate::span::FileId;

/// Error type for source map operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("File not found: {0:?}")]
    FileNotFound(FileId),

    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Byte offset where the range starts
        start: usize,
        /// Byte offset where the range ends
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes
        file_len: usize,
        /// Requested start offset
        span_start: usize,
        /// Requested end offset
        span_end: usize,
    },

    /// Offset falls inside a multi-byte character
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The offending byte offset
        offset: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
