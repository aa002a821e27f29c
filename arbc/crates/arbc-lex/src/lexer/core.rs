//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use arbc_util::{Position, SourceFile};
use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Lexer for the Arroba language.
///
/// The lexer turns source text into tokens. It stops at the first error:
/// iterating yields `Err` once and then ends, and [`Lexer::scan`] returns
/// either every token or that error.
///
/// # Example
///
/// ```
/// use arbc_lex::{Lexer, TokenKind};
/// use arbc_util::SourceFile;
///
/// let file = SourceFile::new(0, "main.arb", "@DEF@ sq x @IS@ x @*@ x @END@");
/// let kinds: Vec<_> = Lexer::new(&file)
///     .scan()
///     .unwrap()
///     .into_iter()
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(kinds[0], TokenKind::Def);
/// assert_eq!(kinds[5], TokenKind::Star);
/// assert_eq!(kinds.len(), 8);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Name of the file being scanned, for logging.
    file_name: &'a str,

    /// Starting position of the current token.
    pub(crate) token_start: Position,

    /// Set once an error has been returned.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer positioned at the first character of `file`.
    pub fn new(file: &'a SourceFile) -> Self {
        let start = file.start_position();
        Self {
            cursor: Cursor::new(file.content(), start.file_id),
            file_name: file.name(),
            token_start: start,
            failed: false,
        }
    }

    /// Scans the whole file.
    ///
    /// Returns the tokens in source order, or the first error encountered.
    /// No partial token list is returned alongside an error.
    pub fn scan(self) -> LexResult<Vec<Token>> {
        let file_name = self.file_name;
        debug!(file = file_name, "scanning");

        match self.collect::<LexResult<Vec<_>>>() {
            Ok(tokens) => {
                debug!(file = file_name, tokens = tokens.len(), "scan finished");
                Ok(tokens)
            },
            Err(err) => {
                debug!(file = file_name, error = %err, "scan failed");
                Err(err)
            },
        }
    }

    /// Returns the next token, `None` at end of input.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character.
    pub fn next_token(&mut self) -> Option<LexResult<Token>> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        let c = self.cursor.current()?;

        let result = match c {
            '(' => Ok(self.single(TokenKind::LParen, c)),
            ')' => Ok(self.single(TokenKind::RParen, c)),
            ',' => Ok(self.single(TokenKind::Comma, c)),
            '@' => self.lex_delimited(),
            '-' if self.cursor.peek().is_some_and(|next| next.is_ascii_digit()) => {
                self.lex_negative_number()
            },
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_alphabetic() => Ok(self.lex_identifier()),
            c => Err(LexError::illegal_character(self.token_start, c)),
        };

        Some(result)
    }

    /// Consumes the current character as a one-character token.
    fn single(&mut self, kind: TokenKind, c: char) -> Token {
        self.cursor.advance();
        Token::single(kind, self.token_start, c)
    }

    /// Returns the position of the next character to be lexed.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns the starting position of the most recent token.
    pub fn token_start(&self) -> Position {
        self.token_start
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.next_token()?;
        self.failed = result.is_err();
        Some(result)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
