//! # SimpleDraw Parser
//!
//! Tokenizer and recursive-descent parser for the SimpleDraw language.
//!
//! ## Usage
//!
//! ```
//! # use simpledraw_parser::{parse_source, SyntaxError};
//!
//! fn main() -> Result<(), SyntaxError> {
//!     let source = "Paper 100\nPen 3\nLine 50 10 10 90\n";
//!
//!     let program = parse_source(source)?;
//!     assert_eq!(program.len(), 3);
//!     Ok(())
//! }
//! ```

pub mod error;
mod lexer;
mod parser;
mod span;
pub mod tokens;

pub use error::{ErrorCode, Expected, SyntaxError};
pub use lexer::tokenize;
pub use parser::parse;
pub use span::Span;
pub use tokens::{PositionedToken, Token, TokenKind, TokenValue};

use simpledraw_core::ast::Program;

/// Tokenize and parse source text in one step.
///
/// Use [`tokenize`] and [`parse`] separately when the token stream is
/// needed as well.
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let tokens = tokenize(source);
    parse(&tokens)
}
