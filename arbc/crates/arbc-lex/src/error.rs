//! Lexical errors.
//!
//! A scan stops at the first error; there is no recovery.

use std::fmt;

use arbc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Position, SourceFile, SourceSnippet, Span};
use thiserror::Error;

/// Detail reported when an `@` does not open a known keyword or operator.
pub const UNMATCHED_BLOCK_DETAIL: &str = "Invalid token starting with '@'";

/// Category of a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character (or `@` block) that starts no token
    IllegalCharacter,
    /// An integer literal outside the 64-bit signed range
    IntegerOverflow,
}

impl LexErrorKind {
    /// Human-readable name used as the error message prefix.
    pub fn name(&self) -> &'static str {
        match self {
            LexErrorKind::IllegalCharacter => "Illegal Character",
            LexErrorKind::IntegerOverflow => "Integer Overflow",
        }
    }

    /// Diagnostic code reported for this kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::IllegalCharacter => DiagnosticCode::E_LEXER_ILLEGAL_CHAR,
            LexErrorKind::IntegerOverflow => DiagnosticCode::E_LEXER_INTEGER_OVERFLOW,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error that ended a scan.
///
/// # Examples
///
/// ```
/// use arbc_lex::tokenize;
///
/// let err = tokenize("t.arb", "a $ b").unwrap_err();
/// assert_eq!(err.to_string(), "Illegal Character: '$'");
/// assert_eq!(err.start.column, 2);
/// assert_eq!(err.span().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct LexError {
    /// Error category
    pub kind: LexErrorKind,
    /// First offending position
    pub start: Position,
    /// Position just after the offending text
    pub end: Position,
    /// Description of the offending text
    pub detail: String,
}

impl LexError {
    /// Creates an error of any kind.
    pub fn new(kind: LexErrorKind, start: Position, end: Position, detail: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            detail: detail.into(),
        }
    }

    /// An illegal single character `c` at `start`.
    pub fn illegal_character(start: Position, c: char) -> Self {
        Self::new(
            LexErrorKind::IllegalCharacter,
            start,
            start.advanced(c),
            format!("'{}'", c),
        )
    }

    /// An `@` at `start` that opens no keyword or operator.
    pub fn unmatched_block(start: Position) -> Self {
        Self::new(
            LexErrorKind::IllegalCharacter,
            start,
            start.advanced('@'),
            UNMATCHED_BLOCK_DETAIL,
        )
    }

    /// An `@` block still open at `end`, the end of input. The span is
    /// empty since nothing is left to consume.
    pub fn unterminated_block(end: Position) -> Self {
        Self::new(LexErrorKind::IllegalCharacter, end, end, UNMATCHED_BLOCK_DETAIL)
    }

    /// An integer literal `text` spanning `[start, end)` that does not fit
    /// in an `i64`.
    pub fn integer_overflow(start: Position, end: Position, text: &str) -> Self {
        Self::new(
            LexErrorKind::IntegerOverflow,
            start,
            end,
            format!("integer literal '{}' does not fit in 64 bits", text),
        )
    }

    /// Source range of the error.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Returns true if this error comes from an unrecognized `@` block.
    pub fn is_unmatched_block(&self) -> bool {
        self.kind == LexErrorKind::IllegalCharacter && self.detail == UNMATCHED_BLOCK_DETAIL
    }

    /// Short text shown under the highlighted source.
    fn label(&self) -> &'static str {
        match self.kind {
            LexErrorKind::IllegalCharacter if self.is_unmatched_block() && self.span().is_empty() => {
                "block never closed"
            },
            LexErrorKind::IllegalCharacter if self.is_unmatched_block() => "unknown keyword or operator",
            LexErrorKind::IllegalCharacter => "not part of any token",
            LexErrorKind::IntegerOverflow => "out of range",
        }
    }

    /// Converts the error into a fatal diagnostic against `file`, the file
    /// that was scanned.
    pub fn to_diagnostic(&self, file: &SourceFile) -> Diagnostic {
        let span = self.span();
        let mut builder = DiagnosticBuilder::error(self.to_string())
            .code(self.kind.code())
            .span(span);

        if let Some(snippet) = SourceSnippet::for_span(file, span) {
            builder = builder.snippet(snippet.with_label(self.label()));
        }

        match self.kind {
            LexErrorKind::IllegalCharacter if self.is_unmatched_block() => builder
                .help("keywords and operators are closed by a second `@` and spelled exactly, e.g. `@IF@` or `@<=@`")
                .build(),
            LexErrorKind::IllegalCharacter => builder.build(),
            LexErrorKind::IntegerOverflow => builder
                .note(format!("integer literals must lie between {} and {}", i64::MIN, i64::MAX))
                .build(),
        }
    }
}

/// Result type alias for lexing.
pub type LexResult<T> = std::result::Result<T, LexError>;
