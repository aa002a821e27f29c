//! Token definitions for the Arroba language.
//!
//! Keywords and operators are both written between `@` signs (`@IF@`,
//! `@+@`). Each group has its own lookup table keyed by the full delimited
//! spelling, delimiters included.

use std::fmt;
use std::sync::LazyLock;

use arbc_util::{FxHashMap, Position, Span};

/// The category of a token, with its payload where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Literals =====
    /// `@TRUE@` or `@FALSE@`
    Boolean(bool),
    /// Base-10 integer literal, optionally `-`-prefixed
    Int(i64),
    /// Run of ASCII letters
    Identifier(String),

    // ===== Keywords =====
    /// `@DEF@`
    Def,
    /// `@IS@`
    Is,
    /// `@END@`
    End,
    /// `@LAMBDA@`
    Lambda,
    /// `@:@`
    Colon,
    /// `@IF@`
    If,
    /// `@THEN@`
    Then,
    /// `@ELSEIF@`
    ElseIf,
    /// `@ELSE@`
    Else,
    /// `@FOR@`
    For,
    /// `@IN@`
    In,
    /// `@RANGE@`
    Range,
    /// `@DO@`
    Do,

    // ===== Operators =====
    /// `@+@`
    Plus,
    /// `@-@`
    Minus,
    /// `@*@`
    Star,
    /// `@/@`
    Slash,
    /// `@%@`
    Percent,
    /// `@==@`
    EqEq,
    /// `@!=@`
    NotEq,
    /// `@<@`
    Lt,
    /// `@<=@`
    LtEq,
    /// `@>@`
    Gt,
    /// `@>=@`
    GtEq,
    /// `@NOT@`
    Not,
    /// `@AND@` or `@&@`
    And,
    /// `@OR@` or `@|@`
    Or,

    // ===== Delimiters =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Upper-case category name, as printed by the driver.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Boolean(_) => "BOOLEAN",
            TokenKind::Int(_) => "INT",
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Def => "DEF",
            TokenKind::Is => "IS",
            TokenKind::End => "END",
            TokenKind::Lambda => "LAMBDA",
            TokenKind::Colon => "COLON",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::ElseIf => "ELSEIF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::In => "IN",
            TokenKind::Range => "RANGE",
            TokenKind::Do => "DO",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::EqEq => "EQEQ",
            TokenKind::NotEq => "NOTEQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTEQ",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTEQ",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
        }
    }
}

/// A lexed token and the half-open range of source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token category and payload
    pub kind: TokenKind,
    /// Position of the first character
    pub start: Position,
    /// Position just after the last character
    pub end: Position,
}

impl Token {
    /// Creates a token covering `[start, end)`.
    pub fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Self { kind, start, end }
    }

    /// Creates a token covering the single character at `start`.
    ///
    /// Only meaningful for one-character tokens, whose character is
    /// therefore its spelling.
    pub fn single(kind: TokenKind, start: Position, c: char) -> Self {
        Self {
            kind,
            start,
            end: start.advanced(c),
        }
    }

    /// Source range of the token.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Int(value) => write!(f, "{}:{}", self.kind.name(), value),
            TokenKind::Boolean(value) => write!(f, "{}:{}", self.kind.name(), value),
            TokenKind::Identifier(name) => write!(f, "{}:{}", self.kind.name(), name),
            kind => f.write_str(kind.name()),
        }
    }
}

/// Keyword table, keyed by the full `@...@` spelling.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("@TRUE@", TokenKind::Boolean(true)),
        ("@FALSE@", TokenKind::Boolean(false)),
        ("@DEF@", TokenKind::Def),
        ("@IS@", TokenKind::Is),
        ("@END@", TokenKind::End),
        ("@LAMBDA@", TokenKind::Lambda),
        ("@:@", TokenKind::Colon),
        ("@IF@", TokenKind::If),
        ("@THEN@", TokenKind::Then),
        ("@ELSEIF@", TokenKind::ElseIf),
        ("@ELSE@", TokenKind::Else),
        ("@FOR@", TokenKind::For),
        ("@IN@", TokenKind::In),
        ("@RANGE@", TokenKind::Range),
        ("@DO@", TokenKind::Do),
    ]
    .into_iter()
    .collect()
});

/// Operator table, keyed by the full `@...@` spelling.
static OPERATORS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("@+@", TokenKind::Plus),
        ("@-@", TokenKind::Minus),
        ("@*@", TokenKind::Star),
        ("@/@", TokenKind::Slash),
        ("@%@", TokenKind::Percent),
        ("@==@", TokenKind::EqEq),
        ("@!=@", TokenKind::NotEq),
        ("@<@", TokenKind::Lt),
        ("@<=@", TokenKind::LtEq),
        ("@>@", TokenKind::Gt),
        ("@>=@", TokenKind::GtEq),
        ("@NOT@", TokenKind::Not),
        ("@AND@", TokenKind::And),
        ("@&@", TokenKind::And),
        ("@OR@", TokenKind::Or),
        ("@|@", TokenKind::Or),
    ]
    .into_iter()
    .collect()
});

/// Looks up a delimited keyword such as `@IF@`.
///
/// ```
/// use arbc_lex::token::{keyword_from_spelling, TokenKind};
///
/// assert_eq!(keyword_from_spelling("@TRUE@"), Some(TokenKind::Boolean(true)));
/// assert_eq!(keyword_from_spelling("IF"), None);
/// assert_eq!(keyword_from_spelling("@+@"), None);
/// ```
pub fn keyword_from_spelling(spelling: &str) -> Option<TokenKind> {
    KEYWORDS.get(spelling).cloned()
}

/// Looks up a delimited operator such as `@<=@`.
pub fn operator_from_spelling(spelling: &str) -> Option<TokenKind> {
    OPERATORS.get(spelling).cloned()
}
