use std::fmt;

use thiserror::Error;

use crate::{error::ErrorCode, span::Span, tokens::TokenKind};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token, e.g. the `NUMBER` argument of a `Line`.
    Token(TokenKind),
    /// The start of a statement (one of the keywords).
    Statement,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{kind}"),
            Expected::Statement => f.write_str("statement"),
        }
    }
}

/// A syntax error at the first token that does not fit the grammar.
///
/// The source text is not stored here; the container error type
/// (e.g. `SimpleDrawError`) keeps it for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct SyntaxError {
    expected: Expected,
    found: TokenKind,
    line: usize,
    column: usize,
    span: Span,
}

impl SyntaxError {
    pub(crate) fn new(
        expected: Expected,
        found: TokenKind,
        line: usize,
        column: usize,
        span: Span,
    ) -> Self {
        Self {
            expected,
            found,
            line,
            column,
            span,
        }
    }

    /// What the parser expected at the offending token.
    pub fn expected(&self) -> Expected {
        self.expected
    }

    /// Kind of the offending token.
    pub fn found(&self) -> TokenKind {
        self.found
    }

    /// 1-based line of the offending token.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the offending token.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte span of the offending token.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn code(&self) -> ErrorCode {
        match (self.expected, self.found) {
            (_, TokenKind::End) => ErrorCode::E101,
            (Expected::Statement, _) => ErrorCode::E102,
            (Expected::Token(_), _) => ErrorCode::E100,
        }
    }

    /// Human readable description of the offending token.
    pub fn found_description(&self) -> &'static str {
        match self.found {
            TokenKind::End => "end of input",
            kind => kind.name(),
        }
    }

    /// Full error message including the position.
    pub fn message(&self) -> String {
        format!(
            "expected {}, found {} at line {}, column {}",
            self.expected,
            self.found_description(),
            self.line,
            self.column
        )
    }

    /// Suggestion for fixing the error.
    pub fn help(&self) -> &'static str {
        match self.expected {
            Expected::Token(TokenKind::Number) => {
                "arguments are numbers such as `10` or `10.5`; `Line` and `Rect` take 4, `Circle` takes 3, `Paper` and `Pen` take 1"
            }
            Expected::Token(_) => "check the statement syntax",
            Expected::Statement => {
                "statements start with `Paper`, `Pen`, `Line`, `Circle` or `Rect` (keywords are case-sensitive)"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_input_message() {
        let err = SyntaxError::new(
            Expected::Token(TokenKind::Number),
            TokenKind::End,
            1,
            6,
            Span::new(5..5),
        );
        assert_eq!(
            err.to_string(),
            "expected NUMBER, found end of input at line 1, column 6"
        );
        assert_eq!(err.code(), ErrorCode::E101);
    }

    #[test]
    fn test_error_codes() {
        let unexpected = SyntaxError::new(
            Expected::Token(TokenKind::Number),
            TokenKind::String,
            2,
            6,
            Span::new(10..15),
        );
        assert_eq!(unexpected.code(), ErrorCode::E100);
        assert_eq!(unexpected.found_description(), "STRING");

        let statement = SyntaxError::new(
            Expected::Statement,
            TokenKind::Unknown,
            1,
            1,
            Span::new(0..4),
        );
        assert_eq!(statement.code(), ErrorCode::E102);
        assert_eq!(
            statement.to_string(),
            "expected statement, found UNKNOWN at line 1, column 1"
        );
    }
}
