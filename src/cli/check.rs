//! Tokenize and validate RQL queries

use super::CliError;
use crate::output::{to_json, to_json_pretty, to_text};
use crate::{TokenStream, tokenize};
use std::str::FromStr;

/// How the token stream is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

/// Options for the tokenize command
#[derive(Debug, Clone, Default)]
pub struct TokenizeOptions {
    /// The RQL query to tokenize
    pub query: String,
    /// Output format
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

fn lex(query: &str) -> Result<TokenStream, CliError> {
    let query = query.trim_end_matches(['\n', '\r']);
    let stream = tokenize(query)?;
    tracing::info!(tokens = stream.len(), "query tokenized");
    Ok(stream)
}

/// Tokenize a query and render the stream
pub fn execute_tokenize(options: &TokenizeOptions) -> Result<String, CliError> {
    let stream = lex(&options.query)?;
    let rendered = match (options.format, options.pretty) {
        (OutputFormat::Text, _) => to_text(&stream),
        (OutputFormat::Json, false) => to_json(&stream),
        (OutputFormat::Json, true) => to_json_pretty(&stream),
    };
    Ok(rendered)
}

/// Validate a query without printing its tokens
pub fn execute_check(query: &str) -> Result<(), CliError> {
    lex(query).map(|_| ())
}
