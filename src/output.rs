//! Rendering of token streams for display and interchange.
//!
//! - **Text** via [`to_text()`] - one token per line, aligned columns
//! - **JSON** via [`to_json()`] and [`to_json_pretty()`] - an array of
//!   `{"type", "value", "position"}` objects, end sentinel included
//!
//! # Examples
//!
//! ```
//! use rql_lexer::{tokenize, output::to_json};
//!
//! let stream = tokenize("b==2").unwrap();
//! assert_eq!(
//!     to_json(&stream),
//!     r#"[{"position":0,"type":"T_STRING","value":"b"},{"position":1,"type":"T_OPERATOR","value":"eq"},{"position":3,"type":"T_INTEGER","value":"2"},{"position":4,"type":"T_END","value":""}]"#
//! );
//! ```

use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};
use serde_json::{Map, Value, json};

/// Converts a token to its JSON object form.
pub fn token_to_json(token: &Token) -> Value {
    json!({
        "type": token.kind().name(),
        "value": token.value(),
        "position": token.position(),
    })
}

/// Reads a token back from its JSON object form.
pub fn token_from_json(value: &Value) -> Result<Token, String> {
    let object: &Map<String, Value> = value
        .as_object()
        .ok_or_else(|| format!("expected token object, got {}", value))?;
    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or("missing token type")?
        .parse::<TokenKind>()?;
    let text = object
        .get("value")
        .and_then(Value::as_str)
        .ok_or("missing token value")?;
    let position = object
        .get("position")
        .and_then(Value::as_u64)
        .ok_or("missing token position")?;
    Ok(Token::new(kind, text, position as usize))
}

pub fn stream_to_json(stream: &TokenStream) -> Value {
    Value::Array(stream.iter().map(token_to_json).collect())
}

pub fn to_json(stream: &TokenStream) -> String {
    stream_to_json(stream).to_string()
}

pub fn to_json_pretty(stream: &TokenStream) -> String {
    // Serializing a Value built from strings and integers cannot fail
    serde_json::to_string_pretty(&stream_to_json(stream)).unwrap_or_default()
}

/// One line per token: position, kind name, quoted value.
pub fn to_text(stream: &TokenStream) -> String {
    let width = stream
        .iter()
        .map(|token| token.kind().name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for token in stream {
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:?}\n",
            token.position(),
            token.kind().name(),
            token.value(),
            width = width
        ));
    }
    out
}
