//! Error types for the SimpleDraw parser.
//!
//! Lexing never fails, so the only error the parser reports is a
//! [`SyntaxError`]: the first token that does not fit the grammar. Every
//! syntax error carries an [`ErrorCode`] for documentation and searchability.

mod error_code;
mod syntax_error;

pub use error_code::ErrorCode;
pub use syntax_error::{Expected, SyntaxError};
