//! # RQL Lexer
//!
//! Turns a query string into a [`TokenStream`] in a single left-to-right pass.
//!
//! Three concerns are interleaved while scanning:
//!
//! - **Decoding**: `%XX` escapes inside literals are percent-decoded.
//! - **Classification**: spans that look alike are told apart by escaping
//!   and lookahead. `null()` is a constant, `null%28%29` is the string
//!   `"null()"`; `eq(` is an operator, `eq` is a string; `*a` is a glob.
//! - **Validation**: a small state machine knows which token kinds may
//!   follow, so `1` at the start of a query fails right away.
//!
//! ## Example
//!
//! ```
//! use rql_lexer::{Lexer, TokenKind};
//!
//! let mut stream = Lexer::new("a=eq=1").tokenize().unwrap();
//! assert_eq!(stream.len(), 4);
//! assert_eq!(stream.next().kind(), TokenKind::String);
//! assert_eq!(stream.next().value(), "eq");
//! assert_eq!(stream.next().kind(), TokenKind::Integer);
//! assert!(stream.is_end());
//! ```

mod literal;
mod state;

use crate::error::SyntaxError;
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};
use literal::DateScan;
use state::{Machine, Role};

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    machine: Machine,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            machine: Machine::new(),
        }
    }

    /// Scans the whole input. Any error aborts the stream.
    pub fn tokenize(mut self) -> Result<TokenStream, SyntaxError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(ch) = self.current_char() else {
                break;
            };

            let (token, role) = self.next_token(ch)?;
            if let Err(e) = self.machine.accept(&token, role) {
                tracing::debug!(token = %token, "inadmissible token");
                return Err(e);
            }
            tracing::trace!(
                kind = %token.kind(),
                value = token.value(),
                position = token.position(),
                "token"
            );
            tokens.push(token);
        }

        tracing::debug!(tokens = tokens.len(), "tokenized query");
        Ok(TokenStream::new(tokens, self.input.len()))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input[self.position + offset..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Emits a token covering `len` bytes from the current position.
    fn emit(&mut self, kind: TokenKind, value: impl Into<String>, len: usize) -> Token {
        let token = Token::new(kind, value, self.position);
        self.position += len;
        token
    }

    fn next_token(&mut self, ch: char) -> Result<(Token, Role), SyntaxError> {
        let token = match ch {
            '(' => self.emit(TokenKind::OpenParenthesis, "(", 1),
            ')' => self.emit(TokenKind::CloseParenthesis, ")", 1),
            ',' => self.emit(TokenKind::Comma, ",", 1),
            ':' => self.emit(TokenKind::Colon, ":", 1),
            '&' => self.emit(TokenKind::Ampersand, "&", 1),
            '|' => self.emit(TokenKind::VerticalBar, "|", 1),
            '=' | '!' | '<' | '>' => return self.read_fiql_operator(ch),
            '+' | '-' => self.read_signed(ch),
            _ => return self.read_literal(ch),
        };
        Ok((token, Role::Plain))
    }

    fn read_fiql_operator(&mut self, ch: char) -> Result<(Token, Role), SyntaxError> {
        match literal::fiql_operator(self.rest()) {
            Some((len, name)) => Ok((self.emit(TokenKind::Operator, name, len), Role::FiqlOperator)),
            None => Err(self.unknown(ch)),
        }
    }

    /// A sign joins the number after it; before anything else it stands alone.
    fn read_signed(&mut self, sign: char) -> Token {
        if let Some((len, kind)) = literal::number(self.rest()) {
            let raw = &self.rest()[..len];
            return self.emit(kind, raw, len);
        }
        let kind = if sign == '+' {
            TokenKind::Plus
        } else {
            TokenKind::Minus
        };
        self.emit(kind, sign, 1)
    }

    fn read_literal(&mut self, ch: char) -> Result<(Token, Role), SyntaxError> {
        let rest = self.rest();
        let span = literal::span(rest);
        if rest[span.len..].starts_with('%') {
            return Err(self.malformed_escape(span.len));
        }

        // Escapes are detected on the raw text and win over every other reading.
        let token = if span.escaped {
            let raw = &rest[..span.len];
            let decoded = literal::decode(raw)
                .ok_or_else(|| SyntaxError::new(TokenKind::String, raw, self.position))?;
            self.emit(TokenKind::String, decoded, span.len)
        } else {
            let token = self.read_unescaped(ch, span)?;
            if token.kind() != TokenKind::String {
                return Ok((token, Role::Plain));
            }
            token
        };

        let role = if literal::fiql_operator(self.rest()).is_some() {
            Role::Field
        } else {
            Role::Plain
        };
        Ok((token, role))
    }

    fn read_unescaped(&mut self, ch: char, span: literal::Span) -> Result<Token, SyntaxError> {
        let rest = self.rest();

        if let Some((len, kind)) = literal::constant(rest) {
            return Ok(self.emit(kind, &rest[..len], len));
        }

        match literal::date(rest) {
            DateScan::Complete(len) => {
                return Ok(self.emit(TokenKind::Date, &rest[..len], len));
            }
            DateScan::Truncated(len) => {
                return Err(SyntaxError::new(TokenKind::Date, &rest[..len], self.position));
            }
            DateScan::NotDate => {}
        }

        if let Some((len, kind)) = literal::number(rest) {
            return Ok(self.emit(kind, &rest[..len], len));
        }

        if span.len == 0 {
            return Err(self.unknown(ch));
        }

        let raw = &rest[..span.len];
        let next = self.peek_char(span.len);
        let kind = if span.wildcard {
            TokenKind::Glob
        } else if next == Some('(') && literal::is_identifier(raw) {
            TokenKind::Operator
        } else if next == Some(':') && literal::is_identifier(raw) {
            TokenKind::Type
        } else {
            TokenKind::String
        };
        Ok(self.emit(kind, raw, span.len))
    }

    /// `%` without two hex digits after it, reported with the span it ends.
    fn malformed_escape(&self, span_len: usize) -> SyntaxError {
        let rest = self.rest();
        // At most one hex digit can follow, or the span would have taken it.
        let digits = rest[span_len + 1..]
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .count();
        let end = span_len + 1 + digits;
        SyntaxError::new(TokenKind::String, &rest[..end], self.position)
    }

    fn unknown(&self, ch: char) -> SyntaxError {
        SyntaxError::new(TokenKind::Unknown, ch, self.position)
    }
}

/// Tokenizes `input` into a fully validated [`TokenStream`].
pub fn tokenize(input: &str) -> Result<TokenStream, SyntaxError> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_operator_call() {
    let stream = tokenize("eq(a,1)").unwrap();
    let kinds: Vec<TokenKind> = stream.iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Operator,
            TokenKind::OpenParenthesis,
            TokenKind::String,
            TokenKind::Comma,
            TokenKind::Integer,
            TokenKind::CloseParenthesis,
            TokenKind::End,
        ]
    );
}

#[test]
fn test_bare_integer_rejected() {
    let error = tokenize("1").unwrap_err();
    assert_eq!(error.to_string(), "Unexpected token \"1\" (T_INTEGER) at position 0");
}
