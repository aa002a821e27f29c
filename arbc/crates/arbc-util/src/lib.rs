//! arbc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the Arroba toolchain:
//!
//! - [`span`] - character positions, spans, source files and the source map
//! - [`diagnostic`] - error reporting types and terminal rendering
//! - [`error`] - error types for the utilities themselves
//!
//! Every other crate in the workspace depends on this one; it depends on no
//! other `arbc-*` crate.
//!
//! # Examples
//!
//! ```
//! use arbc_util::{Position, SourceFile};
//!
//! let file = SourceFile::new(0, "main.arb", "a\nb");
//! let mut pos = Position::start(file.id());
//! pos.advance('a');
//! pos.advance('\n');
//! assert_eq!((pos.index, pos.line, pos.column), (2, 1, 0));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, Position, SourceFile, SourceMap, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;

static_assertions::assert_impl_all!(Position: Copy, Send, Sync);
static_assertions::assert_impl_all!(SourceFile: Send, Sync);
