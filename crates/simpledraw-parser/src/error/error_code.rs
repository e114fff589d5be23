//! Error codes for SimpleDraw diagnostics.
//!
//! Parser errors use the `E1xx` range.

use std::fmt;

/// Error codes for categorizing syntax errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unexpected token.
    ///
    /// A statement was started but one of its arguments is not the
    /// expected token.
    E100,

    /// Unexpected end of input.
    ///
    /// The input ended in the middle of a statement.
    E101,

    /// Unknown statement.
    ///
    /// A statement must start with `Paper`, `Pen`, `Line`, `Circle` or `Rect`.
    E102,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "unexpected end of input",
            ErrorCode::E102 => "unknown statement",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
