// tests/cli_tests.rs

#![cfg(feature = "cli")]

use rql_lexer::cli::{CliError, OutputFormat, TokenizeOptions, execute_check, execute_tokenize, get_doc_category, get_docs_overview};
use rql_lexer::output::token_from_json;
use rql_lexer::{TokenKind, tokenize};

fn options(query: &str, format: OutputFormat, pretty: bool) -> TokenizeOptions {
    TokenizeOptions {
        query: query.to_string(),
        format,
        pretty,
    }
}

#[test]
fn test_tokenize_json_matches_stream() {
    let rendered = execute_tokenize(&options("a=in=(1,b)", OutputFormat::Json, false)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let tokens: Vec<_> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|value| token_from_json(value).unwrap())
        .collect();

    let stream = tokenize("a=in=(1,b)").unwrap();
    assert_eq!(tokens.as_slice(), stream.tokens());
    assert_eq!(tokens[1].kind(), TokenKind::Operator);
    assert_eq!(tokens[1].value(), "in");
}

#[test]
fn test_tokenize_pretty_json() {
    let rendered = execute_tokenize(&options("eq(a,1)", OutputFormat::Json, true)).unwrap();
    assert!(rendered.contains("\n  {"));
    assert!(rendered.contains("\"type\": \"T_OPERATOR\""));
}

#[test]
fn test_tokenize_text() {
    let rendered = execute_tokenize(&options("eq(a,null%28%29)", OutputFormat::Text, false)).unwrap();
    let line = rendered.lines().nth(4).unwrap();
    assert!(line.contains("T_STRING"));
    assert!(line.ends_with("\"null()\""));
}

#[test]
fn test_tokenize_error() {
    let error = execute_tokenize(&options("1", OutputFormat::Text, false)).unwrap_err();
    assert!(matches!(error, CliError::Syntax(_)));
}

#[test]
fn test_check() {
    assert!(execute_check("(eq(a,b)|lt(c,d))").is_ok());
    let error = execute_check("a=eq=-abc").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Syntax error: Unexpected token \"-\" (T_MINUS) at position 5"
    );
}

#[test]
fn test_docs() {
    assert!(get_docs_overview().contains("DOCUMENTATION CATEGORIES"));
    for category in ["syntax", "operators", "fiql", "literals", "encoding"] {
        assert!(get_doc_category(category).is_ok(), "Failed for category: {}", category);
    }
    assert!(matches!(get_doc_category("queries"), Err(CliError::UnknownCategory(_))));
}
