//! Diagnostic codes for categorizing errors.
//!
//! # Examples
//!
//! ```
//! use arbc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_ILLEGAL_CHAR;
//! assert_eq!(code.as_str(), "E0001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where the number
/// is padded to four digits. Every code names an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: &'static str,
    number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E0001: Lexer - Illegal character or unrecognized `@` block
    pub const E_LEXER_ILLEGAL_CHAR: Self = Self::new("E", 1);
    /// E0002: Lexer - Integer literal does not fit in 64 bits
    pub const E_LEXER_INTEGER_OVERFLOW: Self = Self::new("E", 2);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
