//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

use arbc_util::{FileId, Position};

/// A cursor for traversing source code character by character.
///
/// The current character is `None` once every character has been
/// consumed; there is no sentinel character.
///
/// # Example
///
/// ```
/// use arbc_lex::cursor::Cursor;
/// use arbc_util::FileId;
///
/// let mut cursor = Cursor::new("@IS@", FileId(0));
///
/// assert_eq!(cursor.current(), Some('@'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('I'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Position of the current character.
    position: Position,

    /// Character at `position`, `None` at end of input.
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor already loaded with the first character of
    /// `source` (or `None` if `source` is empty).
    pub fn new(source: &'a str, file_id: FileId) -> Self {
        let mut cursor = Self {
            source,
            position: Position::start(file_id),
            current: None,
        };
        cursor.load();
        cursor
    }

    fn load(&mut self) {
        self.current = self.source[self.position.offset..].chars().next();
    }

    /// Returns the character at the cursor position.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the character after the current one without consuming
    /// anything.
    ///
    /// # Example
    ///
    /// ```
    /// use arbc_lex::cursor::Cursor;
    /// use arbc_util::FileId;
    ///
    /// let cursor = Cursor::new("-7", FileId(0));
    /// assert_eq!(cursor.peek(), Some('7'));
    /// assert_eq!(Cursor::new("-", FileId(0)).peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let c = self.current?;
        self.source[self.position.offset + c.len_utf8()..].chars().next()
    }

    /// Consumes the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current {
            self.position.advance(c);
            self.load();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the position of the current character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use arbc_lex::cursor::Cursor;
    /// use arbc_util::FileId;
    ///
    /// let mut cursor = Cursor::new("abc def", FileId(0));
    /// let start = cursor.position();
    /// while cursor.current() != Some(' ') {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "abc");
    /// ```
    pub fn slice_from(&self, start: Position) -> &'a str {
        &self.source[start.offset..self.position.offset]
    }

    /// Saves the current position so it can be restored later.
    #[inline]
    pub fn snapshot(&self) -> Position {
        self.position
    }

    /// Rewinds (or fast-forwards) to a previously saved position and reloads
    /// the current character from it.
    ///
    /// # Example
    ///
    /// ```
    /// use arbc_lex::cursor::Cursor;
    /// use arbc_util::FileId;
    ///
    /// let mut cursor = Cursor::new("@FOO@", FileId(0));
    /// let snapshot = cursor.snapshot();
    /// while !cursor.is_at_end() {
    ///     cursor.advance();
    /// }
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.current(), Some('@'));
    /// assert_eq!(cursor.position().index, 0);
    /// ```
    pub fn restore(&mut self, snapshot: Position) {
        self.position = snapshot;
        self.load();
    }
}
