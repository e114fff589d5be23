//! Recursive-descent parser from tokens to the SimpleDraw AST.
//!
//! There is one production per statement keyword, each taking a fixed
//! number of `NUMBER` arguments. `NEWLINE` tokens between statements are
//! skipped, but statements do not need to be separated by them. The first
//! token that does not fit aborts the parse; there is no recovery.

use log::debug;
use winnow::{
    Parser as _,
    combinator::{dispatch, fail, peek},
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use simpledraw_core::{
    Number,
    ast::{Circle, Line, Paper, Pen, Program, Rect, Statement},
};

use crate::{
    error::{Expected, SyntaxError},
    span::Span,
    tokens::{PositionedToken, Token, TokenKind},
};

/// Type alias for winnow TokenSlice with our positioned tokens
type Input<'src> = TokenSlice<'src, PositionedToken<'src>>;
type IResult<O> = Result<O, ErrMode<ContextError<Expected>>>;

/// Kind of the next token, without consuming it
fn peek_kind(input: &mut Input<'_>) -> IResult<TokenKind> {
    peek(any)
        .map(|token: &PositionedToken<'_>| token.kind())
        .parse_next(input)
}

/// Consume a token of the given kind
fn expect(input: &mut Input<'_>, kind: TokenKind) -> IResult<()> {
    any.verify(|token: &PositionedToken<'_>| token.kind() == kind)
        .void()
        .context(Expected::Token(kind))
        .parse_next(input)
}

/// Parse a numeric argument
fn number(input: &mut Input<'_>) -> IResult<Number> {
    any.verify_map(|token: &PositionedToken<'_>| match token.token {
        Token::Number(value) => Some(value),
        _ => None,
    })
    .context(Expected::Token(TokenKind::Number))
    .parse_next(input)
}

/// `Paper <size>`; the size is truncated to an integer
fn paper(input: &mut Input<'_>) -> IResult<Paper> {
    expect(input, TokenKind::Paper)?;
    let size = number(input)?;
    Ok(Paper {
        size: size.to_int(),
    })
}

/// `Pen <width>`; the width is truncated to an integer
fn pen(input: &mut Input<'_>) -> IResult<Pen> {
    expect(input, TokenKind::Pen)?;
    let width = number(input)?;
    Ok(Pen {
        width: width.to_int(),
    })
}

fn line(input: &mut Input<'_>) -> IResult<Line> {
    expect(input, TokenKind::Line)?;
    let (x1, y1, x2, y2) = (number, number, number, number).parse_next(input)?;
    Ok(Line { x1, y1, x2, y2 })
}

fn circle(input: &mut Input<'_>) -> IResult<Circle> {
    expect(input, TokenKind::Circle)?;
    let (x, y, radius) = (number, number, number).parse_next(input)?;
    Ok(Circle { x, y, radius })
}

fn rect(input: &mut Input<'_>) -> IResult<Rect> {
    expect(input, TokenKind::Rect)?;
    let (x, y, width, height) = (number, number, number, number).parse_next(input)?;
    Ok(Rect {
        x,
        y,
        width,
        height,
    })
}

/// Parse one statement, selected by its leading keyword
fn statement(input: &mut Input<'_>) -> IResult<Statement> {
    dispatch! {peek_kind;
        TokenKind::Paper => paper.map(Statement::Paper),
        TokenKind::Pen => pen.map(Statement::Pen),
        TokenKind::Line => line.map(Statement::Line),
        TokenKind::Circle => circle.map(Statement::Circle),
        TokenKind::Rect => rect.map(Statement::Rect),
        _ => fail.context(Expected::Statement),
    }
    .parse_next(input)
}

/// Parse statements until the end marker, skipping blank lines
fn program(input: &mut Input<'_>) -> IResult<Program> {
    let mut statements = Vec::new();
    loop {
        match peek_kind(input)? {
            TokenKind::End => break,
            TokenKind::Newline => {
                input.next_token();
            }
            _ => statements.push(statement(input)?),
        }
    }
    Ok(Program::new(statements))
}

/// Convert a winnow error into a [`SyntaxError`] at the offending token.
///
/// Failing parsers leave the input positioned at the token they rejected,
/// so the remaining token count identifies it.
fn convert_error(
    error: ErrMode<ContextError<Expected>>,
    tokens: &[PositionedToken<'_>],
    current_remaining: usize,
) -> SyntaxError {
    let expected = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().next().copied(),
        ErrMode::Incomplete(_) => None,
    }
    .unwrap_or(Expected::Statement);

    let offset = tokens.len() - current_remaining;
    match tokens.get(offset) {
        Some(token) => SyntaxError::new(
            expected,
            token.kind(),
            token.line,
            token.column,
            token.span,
        ),
        // Ran off a token stream without an end marker
        None => {
            let (line, column, span) = tokens
                .last()
                .map(|token| (token.line, token.column, token.span))
                .unwrap_or((1, 1, Span::default()));
            SyntaxError::new(expected, TokenKind::End, line, column, span)
        }
    }
}

/// Build a [`Program`] from tokens produced by [`crate::tokenize`].
pub fn parse<'src>(tokens: &'src [PositionedToken<'src>]) -> Result<Program, SyntaxError> {
    let mut token_slice = TokenSlice::new(tokens);

    match program(&mut token_slice) {
        Ok(program) => {
            debug!(statements_count = program.len(); "Parsed program");
            Ok(program)
        }
        Err(e) => {
            let current_remaining = token_slice.eof_offset();
            let err = convert_error(e, tokens, current_remaining);
            debug!(code = err.code().as_str(), line = err.line(); "Syntax error");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, lexer::tokenize};

    fn parse_str(source: &str) -> Result<Program, SyntaxError> {
        let tokens = tokenize(source);
        parse(&tokens)
    }

    #[test]
    fn test_line_statement() {
        let program = parse_str("Line 10 20 30 40").unwrap();
        assert_eq!(
            program.statements(),
            &[Statement::Line(Line {
                x1: Number::Int(10),
                y1: Number::Int(20),
                x2: Number::Int(30),
                y2: Number::Int(40),
            })]
        );
    }

    #[test]
    fn test_all_statements() {
        let program =
            parse_str("Paper 150\nPen 2\nLine 10 10 140 140\nCircle 75 75 30\nRect 20 20 50 40\n")
                .unwrap();
        let keywords: Vec<_> = program.statements().iter().map(Statement::keyword).collect();
        assert_eq!(keywords, vec!["Paper", "Pen", "Line", "Circle", "Rect"]);
        assert_eq!(
            program.statements()[3],
            Statement::Circle(Circle {
                x: Number::Int(75),
                y: Number::Int(75),
                radius: Number::Int(30),
            })
        );
    }

    #[test]
    fn test_paper_and_pen_truncate() {
        let program = parse_str("Paper 100.9\nPen 2.5").unwrap();
        assert_eq!(
            program.statements(),
            &[
                Statement::Paper(Paper { size: 100 }),
                Statement::Pen(Pen { width: 2 })
            ]
        );
    }

    #[test]
    fn test_paper_out_of_range_saturates() {
        let program = parse_str("Paper 99999999999999999999").unwrap();
        assert_eq!(
            program.statements(),
            &[Statement::Paper(Paper { size: i64::MAX })]
        );
    }

    #[test]
    fn test_shape_fields_keep_floats() {
        let program = parse_str("Rect 1.5 2 3 4.25").unwrap();
        let Statement::Rect(rect) = program.statements()[0] else {
            panic!("Expected a Rect statement");
        };
        assert!(rect.x.is_float());
        assert!(rect.y.is_int());
        assert_eq!(rect.height, Number::Float(4.25));
    }

    #[test]
    fn test_statements_without_newlines() {
        let program = parse_str("Paper 100 Pen 3").unwrap();
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_blank_lines_and_comments() {
        let program = parse_str("\n\n# only a comment\n\n").unwrap();
        assert!(program.is_empty());
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_argument_at_end() {
        let err = parse_str("Paper").unwrap_err();
        assert_eq!(err.expected(), Expected::Token(TokenKind::Number));
        assert_eq!(err.found(), TokenKind::End);
        assert_eq!(err.code(), ErrorCode::E101);
        assert_eq!(
            err.to_string(),
            "expected NUMBER, found end of input at line 1, column 6"
        );
    }

    #[test]
    fn test_missing_argument_before_newline() {
        let err = parse_str("Line 1 2 3\nPen 2").unwrap_err();
        assert_eq!(err.found(), TokenKind::Newline);
        assert_eq!((err.line(), err.column()), (1, 11));
        assert_eq!(err.span(), Span::new(10..11));
        assert_eq!(err.code(), ErrorCode::E100);
    }

    #[test]
    fn test_string_argument() {
        let err = parse_str("Paper 100\nCircle 10 \"big\" 5").unwrap_err();
        assert_eq!(err.expected(), Expected::Token(TokenKind::Number));
        assert_eq!(err.found(), TokenKind::String);
        assert_eq!((err.line(), err.column()), (2, 11));
    }

    #[test]
    fn test_unknown_statement() {
        let err = parse_str("Paper 100\nTriangle 1 2 3").unwrap_err();
        assert_eq!(err.expected(), Expected::Statement);
        assert_eq!(err.found(), TokenKind::Unknown);
        assert_eq!(err.code(), ErrorCode::E102);
        assert_eq!((err.line(), err.column()), (2, 1));
    }

    #[test]
    fn test_stray_number() {
        let err = parse_str("Pen 1 2").unwrap_err();
        assert_eq!(err.expected(), Expected::Statement);
        assert_eq!(err.found(), TokenKind::Number);
        assert_eq!(err.column(), 7);
    }

    #[test]
    fn test_tokens_without_end_marker() {
        let tokens = tokenize("Paper");
        let err = parse(&tokens[..1]).unwrap_err();
        assert_eq!(err.found(), TokenKind::End);
        assert_eq!(err.expected(), Expected::Token(TokenKind::Number));
    }
}
