//! Identifier lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of ASCII letters as an identifier.
    ///
    /// Digits and underscores are not part of identifiers, so `ab1` is the
    /// identifier `ab` followed by the integer `1`. Keywords are always
    /// `@`-delimited and never produced here.
    pub fn lex_identifier(&mut self) -> Token {
        let start = self.token_start;
        while self.cursor.current().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        Token::new(
            TokenKind::Identifier(text.to_string()),
            start,
            self.cursor.position(),
        )
    }
}
