use crate::token::{Token, TokenKind};
use thiserror::Error;

/// The single error raised while producing or consuming a token stream.
///
/// Covers malformed spans (an unterminated escape, a truncated date) as well
/// as well-formed tokens that are not admissible where they appear.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected token \"{value}\" ({kind}) at position {position}")]
pub struct SyntaxError {
    value: String,
    kind: TokenKind,
    position: usize,
}

impl SyntaxError {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        SyntaxError {
            value: value.into(),
            kind,
            position,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl From<&Token> for SyntaxError {
    fn from(token: &Token) -> Self {
        SyntaxError::new(token.kind(), token.value(), token.position())
    }
}
