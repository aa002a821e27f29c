//! arbc-lex - Lexical Analyzer for the Arroba Scripting Language
//!
//! This crate turns Arroba source text into a flat list of tokens for the
//! parser. Scanning is a single pass that stops at the first error.
//!
//! # Example Usage
//!
//! ```
//! use arbc_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("main.arb", "@IF@ x @<@ -3 @THEN@ f(x, 1) @END@").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::If);
//! assert_eq!(tokens[3].kind, TokenKind::Int(-3));
//!
//! let err = tokenize("main.arb", "@IF@ x @=@ 1").unwrap_err();
//! assert_eq!(err.start.column, 7);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword/operator tables
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical errors and their diagnostics
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Always written between `@` signs: `@DEF@`, `@IS@`, `@END@`, `@LAMBDA@`,
//! `@:@`, `@IF@`, `@THEN@`, `@ELSEIF@`, `@ELSE@`, `@FOR@`, `@IN@`,
//! `@RANGE@`, `@DO@`, and the booleans `@TRUE@` and `@FALSE@`.
//!
//! ## Operators
//!
//! Also `@`-delimited:
//!
//! - **Arithmetic**: `@+@`, `@-@`, `@*@`, `@/@`, `@%@`
//! - **Comparison**: `@==@`, `@!=@`, `@<@`, `@<=@`, `@>@`, `@>=@`
//! - **Logical**: `@NOT@`, `@AND@` (or `@&@`), `@OR@` (or `@|@`)
//!
//! ## Literals and names
//!
//! - **Integer**: `42`, `-7` (64-bit signed)
//! - **Identifier**: ASCII letters only, `[a-zA-Z]+`
//!
//! ## Delimiters
//!
//! `(`, `)` and `,`.
//!
//! ## Comments and whitespace
//!
//! `#` runs to the end of the line and swallows the line break. Space and
//! tab separate tokens; any other line break is an illegal character.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_spelling, operator_from_spelling, Token, TokenKind};

use arbc_util::SourceFile;

/// Scans `text` as a file named `name`.
///
/// Positions in the result carry `FileId(0)`. Build a [`SourceFile`] and
/// use [`Lexer::new`] to choose the id.
pub fn tokenize(name: &str, text: &str) -> LexResult<Vec<Token>> {
    let file = SourceFile::new(0, name, text);
    Lexer::new(&file).scan()
}
