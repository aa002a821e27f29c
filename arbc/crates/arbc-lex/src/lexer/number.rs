//! Number literal lexing.
//!
//! Integer literals are base-10 runs of ASCII digits, optionally prefixed
//! by `-`, and must fit in an `i64`.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of ASCII digits as an integer literal.
    ///
    /// # Errors
    ///
    /// [`LexErrorKind::IntegerOverflow`](crate::LexErrorKind::IntegerOverflow)
    /// if the value exceeds `i64::MAX`.
    pub fn lex_number(&mut self) -> LexResult<Token> {
        self.eat_digits();
        self.finish_integer()
    }

    /// Lexes a `-` immediately followed by a digit run as one negative
    /// integer literal.
    ///
    /// The `-` binds to the literal whatever precedes it, so `5-3` lexes as
    /// `5` followed by `-3`. Binary subtraction is written `@-@`.
    ///
    /// # Errors
    ///
    /// [`LexErrorKind::IntegerOverflow`](crate::LexErrorKind::IntegerOverflow)
    /// if the value is below `i64::MIN`.
    pub fn lex_negative_number(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        self.eat_digits();
        self.finish_integer()
    }

    fn eat_digits(&mut self) {
        while self.cursor.current().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.advance();
        }
    }

    /// Builds the `Int` token for everything consumed since the token start.
    fn finish_integer(&self) -> LexResult<Token> {
        let start = self.token_start;
        let end = self.cursor.position();
        let text = self.cursor.slice_from(start);

        // Only digits (and a leading '-') were consumed, so range is the
        // only way parsing can fail.
        let value = text
            .parse::<i64>()
            .map_err(|_| LexError::integer_overflow(start, end, text))?;

        Ok(Token::new(TokenKind::Int(value), start, end))
    }
}
