//! Comment lexing.
//!
//! This module handles skipping whitespace and `#` line comments.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a `#` comment up to and including the next newline, or to the
    /// end of input.
    pub fn skip_comment(&mut self) {
        while let Some(c) = self.cursor.current() {
            self.cursor.advance();
            if c == '\n' {
                break;
            }
        }
    }

    /// Skips whitespace and comments.
    ///
    /// Only space and tab are whitespace. A line break is skipped only as
    /// the end of a comment; anywhere else it is left for the dispatcher,
    /// which rejects it. This is called before lexing each token.
    pub fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.cursor.current() {
            match c {
                ' ' | '\t' => self.cursor.advance(),
                '#' => self.skip_comment(),
                _ => return,
            }
        }
    }
}
