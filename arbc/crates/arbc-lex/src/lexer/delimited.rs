//! `@`-delimited keyword and operator lexing.
//!
//! Keywords and operators share one syntax: text between two `@` signs.
//! Each attempt reads up to the closing `@`, looks the whole block up in
//! one table, and rewinds to the opening `@` if the block is not in it. A
//! block that is never closed is not rewound: the attempt leaves the cursor
//! at end of input.

use arbc_util::Position;
use tracing::trace;

use crate::error::{LexError, LexResult};
use crate::token::{keyword_from_spelling, operator_from_spelling, Token, TokenKind};
use crate::Lexer;

/// Which table a delimited block is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Table {
    Keyword,
    Operator,
}

impl Table {
    fn lookup(self, spelling: &str) -> Option<TokenKind> {
        match self {
            Table::Keyword => keyword_from_spelling(spelling),
            Table::Operator => operator_from_spelling(spelling),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Table::Keyword => "keyword",
            Table::Operator => "operator",
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes an `@...@` block starting at the current `@`.
    ///
    /// Keywords are tried first, then operators.
    ///
    /// # Errors
    ///
    /// An illegal-character error spanning just the opening `@` if the block
    /// is in neither table. If the block is never closed the error sits at
    /// end of input, where the keyword attempt stopped.
    pub fn lex_delimited(&mut self) -> LexResult<Token> {
        if let Some(token) = self.match_delimited(Table::Keyword) {
            return Ok(token);
        }
        if self.cursor.is_at_end() {
            // The operator attempt has nothing left to read.
            return Err(LexError::unterminated_block(self.cursor.position()));
        }
        if let Some(token) = self.match_delimited(Table::Operator) {
            return Ok(token);
        }
        Err(LexError::unmatched_block(self.token_start))
    }

    /// Consumes one `@...@` block and looks it up in `table`.
    ///
    /// On a miss the cursor is restored to the opening `@` and `None` is
    /// returned. An unclosed block also returns `None`, with the cursor left
    /// at end of input.
    fn match_delimited(&mut self, table: Table) -> Option<Token> {
        let saved = self.cursor.snapshot();
        self.cursor.advance();

        while let Some(c) = self.cursor.current() {
            self.cursor.advance();
            if c == '@' {
                let spelling = self.cursor.slice_from(saved);
                if let Some(kind) = table.lookup(spelling) {
                    return Some(Token::new(kind, saved, self.cursor.position()));
                }
                trace!(spelling, table = table.name(), "no match, rewinding");
                self.rewind(saved);
                return None;
            }
        }

        trace!(
            line = saved.line,
            column = saved.column,
            table = table.name(),
            "unterminated block"
        );
        None
    }

    fn rewind(&mut self, saved: Position) {
        self.cursor.restore(saved);
    }
}
