//! Pattern recognizers for literal spans.
//!
//! Each recognizer looks at the remaining input and reports how many bytes it
//! would consume, without consuming anything itself.

use crate::token::TokenKind;
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    fiql_operator: Regex,
    constant: Regex,
    date: Regex,
    date_prefix: Regex,
    number: Regex,
    span: Regex,
    date_span: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        fiql_operator: Regex::new(r"\A(?:=([A-Za-z][A-Za-z0-9_]*)=|==|!=|<>|<=|>=|<|>|=)").unwrap(),
        constant: Regex::new(r"\A(null|true|false|empty)\(\)").unwrap(),
        date: Regex::new(r"\A[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z").unwrap(),
        date_prefix: Regex::new(r"\A[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9:]*Z?").unwrap(),
        number: Regex::new(r"\A[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap(),
        span: Regex::new(
            r"\A(?:[A-Za-z0-9_.~*?]|%[0-9A-Fa-f]{2})(?:[A-Za-z0-9_.~*?-]|%[0-9A-Fa-f]{2})*",
        )
        .unwrap(),
        date_span: Regex::new(
            r"\A[0-9]{4}-[0-9]{2}-[0-9]{2}T(?:[A-Za-z0-9_.~*?-]|%[0-9A-Fa-f]{2}|:[0-9])*",
        )
        .unwrap(),
    })
}

/// Characters that may continue a literal span, escapes included.
pub(crate) fn is_literal_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '~' | '*' | '?' | '-' | '%')
}

fn ends_literal(rest: &str, len: usize) -> bool {
    !rest[len..].starts_with(is_literal_char)
}

/// A FIQL comparison at the start of `rest`: bytes consumed and canonical operator name.
pub(crate) fn fiql_operator(rest: &str) -> Option<(usize, String)> {
    let captures = patterns().fiql_operator.captures(rest)?;
    let whole = captures.get(0)?;
    let name = match (captures.get(1), whole.as_str()) {
        (Some(named), _) => named.as_str(),
        (None, "=" | "==") => "eq",
        (None, "!=" | "<>") => "ne",
        (None, "<") => "lt",
        (None, ">") => "gt",
        (None, "<=") => "le",
        (None, ">=") => "ge",
        _ => return None,
    };
    Some((whole.end(), name.to_string()))
}

/// One of the four reserved constants, written with its `()` suffix.
pub(crate) fn constant(rest: &str) -> Option<(usize, TokenKind)> {
    let captures = patterns().constant.captures(rest)?;
    let kind = match captures.get(1)?.as_str() {
        "null" => TokenKind::Null,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "empty" => TokenKind::Empty,
        _ => return None,
    };
    Some((captures.get(0)?.end(), kind))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateScan {
    Complete(usize),
    /// `YYYY-MM-DDT` seen but the time part never completes.
    Truncated(usize),
    NotDate,
}

pub(crate) fn date(rest: &str) -> DateScan {
    let patterns = patterns();
    if let Some(found) = patterns.date.find(rest)
        && ends_literal(rest, found.end())
    {
        return DateScan::Complete(found.end());
    }
    match patterns.date_prefix.find(rest) {
        Some(found) => DateScan::Truncated(found.end()),
        None => DateScan::NotDate,
    }
}

/// A signed or unsigned number standing alone as a literal.
///
/// Integers have neither fraction nor exponent. A match that runs straight
/// into more literal characters is not a number at all.
pub(crate) fn number(rest: &str) -> Option<(usize, TokenKind)> {
    let found = patterns().number.find(rest)?;
    if !ends_literal(rest, found.end()) {
        return None;
    }
    let kind = if found.as_str().contains(['.', 'e', 'E']) {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };
    Some((found.end(), kind))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub len: usize,
    pub escaped: bool,
    pub wildcard: bool,
}

/// The longest run of literal characters and `%XX` escapes.
///
/// Once a span opens like a date (`YYYY-MM-DDT`) it also runs through the
/// colons of the time part, so an escape anywhere in a date is seen.
pub(crate) fn span(rest: &str) -> Span {
    let patterns = patterns();
    let len = patterns
        .date_span
        .find(rest)
        .or_else(|| patterns.span.find(rest))
        .map_or(0, |found| found.end());
    let raw = &rest[..len];
    Span {
        len,
        escaped: raw.contains('%'),
        wildcard: raw.contains(['*', '?']),
    }
}

/// Operator and type names.
pub(crate) fn is_identifier(raw: &str) -> bool {
    let mut chars = raw.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Decodes every `%XX` escape. `None` when the bytes are not UTF-8.
pub(crate) fn decode(raw: &str) -> Option<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
