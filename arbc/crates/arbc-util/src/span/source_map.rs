//! Source map for managing source files and extracting source text.
//!
//! This module provides the [`SourceFile`] and [`SourceMap`] types. A
//! [`Position`] never copies the text it points into; it carries a
//! [`FileId`] that resolves back to the owning [`SourceFile`] here.

use std::sync::Arc;

use super::{FileId, Position, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use arbc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.arb", "x @IS@ 1");
/// assert_eq!(file.name(), "main.arb");
/// assert_eq!(file.content(), "x @IS@ 1");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: Arc<str>,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - File name or path, used in diagnostics
    /// * `content` - File content
    pub fn new(id: usize, name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];

        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Position of the first character of this file.
    #[inline]
    pub fn start_position(&self) -> Position {
        Position::start(self.id)
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use arbc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.arb", "a\nb\nc");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-based line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (0-based), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use arbc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.arb", "one\r\ntwo\n");
    /// assert_eq!(file.line_at(0), Some("one"));
    /// assert_eq!(file.line_at(1), Some("two"));
    /// assert_eq!(file.line_at(2), Some(""));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = self.line_start(line)?;
        let end = self.line_start(line + 1).unwrap_or(self.content.len());

        if start > end {
            return None;
        }

        let line_content = &self.content[start..end];
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset (inclusive)
    /// * `end` - End byte offset (exclusive)
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }

        if !self.content.is_char_boundary(start) {
            return Err(SourceMapError::NotCharBoundary { offset: start });
        }
        if !self.content.is_char_boundary(end) {
            return Err(SourceMapError::NotCharBoundary { offset: end });
        }

        Ok(&self.content[start..end])
    }

    /// Source text covered by `span`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new(0, "main.arb", "@+@");
    /// let start = file.start_position();
    /// let end = start.advanced('@').advanced('+').advanced('@');
    /// assert_eq!(file.slice(Span::new(start, end)).unwrap(), "@+@");
    /// ```
    pub fn slice(&self, span: Span) -> SourceMapResult<&str> {
        if span.start.file_id != self.id {
            return Err(SourceMapError::FileNotFound(span.start.file_id));
        }
        self.extract_range(span.start.offset, span.end.offset)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use arbc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_file("main.arb", "x @IS@ 1");
/// let file = map.get_file(file_id).unwrap();
/// assert_eq!(file.name(), "main.arb");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file
    ///
    /// Returns the [`FileId`] for the added file.
    pub fn add_file(&mut self, name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    /// Get a source file by its ID with error handling
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.files
            .get(id.0)
            .cloned()
            .ok_or(SourceMapError::FileNotFound(id))
    }

    /// Get the number of files in the source map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
