//! Lexical tokens produced by the RQL lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with its decoded textual value and the
//! offset of its first character in the original query string.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the token stream
    End,

    // Operators
    /// Operator or function name, either called (`eq(`) or produced by FIQL
    ///
    /// # Examples
    /// ```text
    /// eq(a,1)
    /// a=eq=1     (normalized to "eq")
    /// a<=1       (normalized to "le")
    /// ```
    Operator,

    // Punctuation
    /// Opens an argument list, a group or an array
    OpenParenthesis,

    /// Closes the innermost parenthesis
    CloseParenthesis,

    /// Separates arguments and array items
    Comma,

    /// Separates a type cast from its literal
    ///
    /// # Examples
    /// ```text
    /// string:3
    /// ```
    Colon,

    /// Logical AND between top-level expressions
    Ampersand,

    /// Logical OR between expressions
    VerticalBar,

    /// Ascending sort marker
    ///
    /// # Examples
    /// ```text
    /// sort(+name)
    /// ```
    Plus,

    /// Descending sort marker
    Minus,

    // Literals
    /// Plain or percent-decoded text
    ///
    /// # Examples
    /// ```text
    /// name
    /// null%28%29   (decoded to "null()")
    /// ```
    String,

    /// Integer literal of arbitrary length, sign included
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -9223372036854775809
    /// ```
    Integer,

    /// Floating-point literal
    ///
    /// # Examples
    /// ```text
    /// 1.5
    /// -.4e12
    /// ```
    Float,

    /// UTC timestamp in `YYYY-MM-DDTHH:MM:SSZ` form
    Date,

    /// Text containing unescaped `*` or `?` wildcards
    ///
    /// # Examples
    /// ```text
    /// *abc?
    /// ```
    Glob,

    // Constants
    /// `null()`
    Null,

    /// `true()`
    True,

    /// `false()`
    False,

    /// `empty()`
    Empty,

    /// Type cast name preceding a colon
    ///
    /// # Examples
    /// ```text
    /// string:3
    /// date:empty()
    /// ```
    Type,

    /// Character that starts no token. Only ever reported in a syntax error.
    Unknown,
}

impl TokenKind {
    pub const ALL: [TokenKind; 21] = [
        TokenKind::End,
        TokenKind::Operator,
        TokenKind::OpenParenthesis,
        TokenKind::CloseParenthesis,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Ampersand,
        TokenKind::VerticalBar,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::String,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::Date,
        TokenKind::Glob,
        TokenKind::Null,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Empty,
        TokenKind::Type,
        TokenKind::Unknown,
    ];

    /// Stable symbolic name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::End => "T_END",
            TokenKind::Operator => "T_OPERATOR",
            TokenKind::OpenParenthesis => "T_OPEN_PARENTHESIS",
            TokenKind::CloseParenthesis => "T_CLOSE_PARENTHESIS",
            TokenKind::Comma => "T_COMMA",
            TokenKind::Colon => "T_COLON",
            TokenKind::Ampersand => "T_AMPERSAND",
            TokenKind::VerticalBar => "T_VERTICAL_BAR",
            TokenKind::Plus => "T_PLUS",
            TokenKind::Minus => "T_MINUS",
            TokenKind::String => "T_STRING",
            TokenKind::Integer => "T_INTEGER",
            TokenKind::Float => "T_FLOAT",
            TokenKind::Date => "T_DATE",
            TokenKind::Glob => "T_GLOB",
            TokenKind::Null => "T_NULL",
            TokenKind::True => "T_TRUE",
            TokenKind::False => "T_FALSE",
            TokenKind::Empty => "T_EMPTY",
            TokenKind::Type => "T_TYPE",
            TokenKind::Unknown => "T_UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown token type '{}'", s))
    }
}

/// A classified, decoded slice of the query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    value: String,
    position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            position,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Offset of the first character in the original, undecoded input.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }

    pub fn test(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({}) at {}", self.value, self.kind, self.position)
    }
}
