//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode};
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with highlighting
/// of the specific range.
///
/// # Examples
///
/// ```
/// use arbc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("a b $", 1, 5, 6).with_label("not allowed here");
/// assert_eq!(snippet.format(), "  1 | a b $\n    |     ^ not allowed here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Snippet for the first line touched by `span`.
    ///
    /// A span running past the end of its first line is underlined up to
    /// the end of that line. Returns `None` if the span's line is not in
    /// `file`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbc_util::diagnostic::SourceSnippet;
    /// use arbc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new(0, "t.arb", "x @IS@ 1");
    /// let start = file.start_position().advanced('x').advanced(' ');
    /// let end = start.advanced('@').advanced('I').advanced('S').advanced('@');
    /// let snippet = SourceSnippet::for_span(&file, Span::new(start, end)).unwrap();
    /// assert_eq!((snippet.start_column, snippet.end_column), (3, 7));
    /// ```
    pub fn for_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line = file.line_at(span.start.line as usize)?;
        let start_column = span.start.column as usize + 1;
        let end_column = if span.end.line == span.start.line {
            span.end.column as usize + 1
        } else {
            line.chars().count() + 1
        };

        Some(Self::new(
            line,
            span.start.line as usize + 1,
            start_column,
            end_column.max(start_column + 1),
        ))
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns a formatted string showing the source line with carets (^)
    /// under the relevant range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        // Line number and source
        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        // Caret line
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use arbc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
///
/// let diag = DiagnosticBuilder::error("Illegal Character: '$'")
///     .code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_ILLEGAL_CHAR));
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic with its main message.
    ///
    /// The span defaults to the start of file 0.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::default(),
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }
}
