//! Error types for SimpleDraw operations.
//!
//! [`SimpleDrawError`] wraps every failure a compilation or an export can
//! produce.

use std::io;

use thiserror::Error;

use simpledraw_parser::SyntaxError;

/// The main error type for SimpleDraw operations.
///
/// The `Syntax` variant keeps the source text next to the error so callers
/// can render the offending snippet.
#[derive(Debug, Error)]
pub enum SimpleDrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Syntax { err: SyntaxError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl SimpleDrawError {
    /// Create a new `Syntax` error with the associated source code.
    pub fn new_syntax_error(err: SyntaxError, src: impl Into<String>) -> Self {
        Self::Syntax {
            err,
            src: src.into(),
        }
    }
}
