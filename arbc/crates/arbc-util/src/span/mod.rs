//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations.
//! A [`Position`] is measured in characters consumed from the start of a
//! file, and also remembers the byte offset of the same point so slices of
//! the UTF-8 source can be taken without rescanning.
//!
//! Lines and columns are 0-based. Renderers add one when printing.
//!
//! # Examples
//!
//! ```
//! use arbc_util::span::{FileId, Position, Span};
//!
//! let start = Position::start(FileId(0));
//! let end = start.advanced('@').advanced('+').advanced('@');
//! let span = Span::new(start, end);
//! assert_eq!(span.len(), 3);
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
///
/// # Examples
///
/// ```
/// use arbc_util::span::FileId;
///
/// let id = FileId(0);
/// assert_eq!(id.0, 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

/// A point in a source file.
///
/// `index`, `offset`, `line` and `column` always describe the state after
/// consuming exactly `index` characters from the start of the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Characters consumed from the start of the file
    pub index: usize,
    /// Byte offset in the UTF-8 source
    pub offset: usize,
    /// Line number (0-based)
    pub line: u32,
    /// Column number (0-based, in characters)
    pub column: u32,
    /// File this position belongs to
    pub file_id: FileId,
}

impl Position {
    /// The position before the first character of a file.
    #[inline]
    pub const fn start(file_id: FileId) -> Self {
        Self {
            index: 0,
            offset: 0,
            line: 0,
            column: 0,
            file_id,
        }
    }

    /// Moves past `consumed`, the character at this position.
    ///
    /// A newline moves to column 0 of the next line; every other character
    /// moves one column to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbc_util::span::{FileId, Position};
    ///
    /// let mut pos = Position::start(FileId(0));
    /// pos.advance('x');
    /// assert_eq!((pos.line, pos.column), (0, 1));
    /// pos.advance('\n');
    /// assert_eq!((pos.line, pos.column), (1, 0));
    /// ```
    #[inline]
    pub fn advance(&mut self, consumed: char) {
        self.index += 1;
        self.offset += consumed.len_utf8();
        if consumed == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Returns the position one character further on.
    #[inline]
    #[must_use]
    pub fn advanced(mut self, consumed: char) -> Self {
        self.advance(consumed);
        self
    }
}

/// Half-open `[start, end)` range of a source file.
///
/// # Examples
///
/// ```
/// use arbc_util::span::{FileId, Position, Span};
///
/// let a = Position::start(FileId(0));
/// let b = a.advanced('(');
/// let span = Span::new(a, b);
/// assert_eq!(span.len(), 1);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First position inside the span
    pub start: Position,
    /// First position after the span
    pub end: Position,
}

impl Span {
    /// Create a new span
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Number of characters covered by the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.index.saturating_sub(self.start.index)
    }

    /// Returns true if the span covers no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
