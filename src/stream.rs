//! Cursor-based access to a fully lexed query.

use crate::error::SyntaxError;
use crate::token::{Token, TokenKind};

/// Tokens of one query in lexical order, closed by a [`TokenKind::End`] sentinel.
///
/// The stream carries a single forward-only cursor for the parser. The
/// tokens themselves are never mutated once pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Builds a stream, appending the end sentinel at `end`.
    pub(crate) fn new(mut tokens: Vec<Token>, end: usize) -> Self {
        tokens.push(Token::new(TokenKind::End, "", end));
        TokenStream { tokens, cursor: 0 }
    }

    /// Number of tokens including the end sentinel.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A stream always holds at least its sentinel.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Advances the cursor and returns the token it was on.
    ///
    /// The cursor stays on the end sentinel once it gets there.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &Token {
        let index = self.cursor;
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        &self.tokens[index]
    }

    /// Peeks `n` tokens past the cursor, clamped to the end sentinel.
    pub fn look_ahead(&self, n: usize) -> &Token {
        let index = self.cursor.saturating_add(n).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub fn test(&self, kind: TokenKind) -> bool {
        self.current().test(kind)
    }

    pub fn test_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current().kind())
    }

    /// Advances only when the current token has the given kind.
    pub fn next_if(&mut self, kind: TokenKind) -> Option<&Token> {
        if self.test(kind) {
            Some(self.next())
        } else {
            None
        }
    }

    /// Consumes a token of the given kind or fails on the current one.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&Token, SyntaxError> {
        if self.test(kind) {
            Ok(self.next())
        } else {
            Err(SyntaxError::from(self.current()))
        }
    }

    pub fn is_end(&self) -> bool {
        self.current().is_end()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates every token from the start, ignoring the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
