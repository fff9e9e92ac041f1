//! CLI support for rql-lexer
//!
//! Provides programmatic access to the `rql` command functionality for
//! embedding in other tools.

mod check;
mod docs;

pub use check::{OutputFormat, TokenizeOptions, execute_check, execute_tokenize};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Query failed to tokenize
    #[error("Syntax error: {0}")]
    Syntax(#[from] crate::SyntaxError),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No query provided
    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoQuery,
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'rql docs' to see available categories.")]
    UnknownCategory(String),
}
