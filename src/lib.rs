pub mod error;
pub mod lexer;
pub mod output;
pub mod stream;
pub mod token;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::SyntaxError;
pub use lexer::{Lexer, tokenize};
pub use output::{to_json, to_json_pretty, to_text};
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
