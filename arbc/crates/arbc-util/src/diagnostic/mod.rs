//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating and formatting diagnostics.
//! Every diagnostic is a fatal error. Diagnostics are plain values; the
//! caller decides where to print them.
//!
//! # Examples
//!
//! ```
//! use arbc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, SourceSnippet};
//! use arbc_util::span::{SourceFile, Span};
//!
//! let file = SourceFile::new(0, "main.arb", "a $");
//! let start = file.start_position().advanced('a').advanced(' ');
//! let span = Span::new(start, start.advanced('$'));
//!
//! let diag = DiagnosticBuilder::error("Illegal Character: '$'")
//!     .code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
//!     .span(span)
//!     .snippet(SourceSnippet::for_span(&file, span).unwrap())
//!     .build();
//!
//! let rendered = diag.render(&file);
//! assert!(rendered.starts_with("error[E0001]: Illegal Character: '$'"));
//! assert!(rendered.contains("--> main.arb:1:3"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};

/// Header label of every rendered diagnostic.
const ERROR_LABEL: &str = "error";

/// `ERROR_LABEL` in bold red.
const ERROR_LABEL_COLORED: &str = "\x1b[1;31merror\x1b[0m";

/// An error message with its location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Render as plain text, `rustc`-style.
    ///
    /// Line and column numbers are printed 1-based.
    pub fn render(&self, file: &SourceFile) -> String {
        self.render_with(file, false)
    }

    /// Render with ANSI colors on the `error` label.
    pub fn render_colored(&self, file: &SourceFile) -> String {
        self.render_with(file, true)
    }

    fn render_with(&self, file: &SourceFile, color: bool) -> String {
        let label = if color { ERROR_LABEL_COLORED } else { ERROR_LABEL };

        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", label, code, self.message),
            None => format!("{}: {}\n", label, self.message),
        };

        out.push_str(&format!(
            "  --> {}:{}:{}\n",
            file.name(),
            self.span.start.line + 1,
            self.span.start.column + 1
        ));

        if !self.snippets.is_empty() {
            out.push_str("    |\n");
        }
        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for note in &self.notes {
            out.push_str(&format!("    = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("    = help: {}\n", help));
        }

        out
    }
}
