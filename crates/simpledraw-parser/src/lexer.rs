//! Lexical analyzer for SimpleDraw source text.
//!
//! The lexer converts source text into a flat stream of [`PositionedToken`]s
//! for parsing. Whitespace and `#` comments are skipped; every other
//! character ends up in some token, so lexing never fails. Input the
//! language does not understand degrades to [`Token::Unknown`] and is left
//! for the parser to reject.
//!
//! The public entry point is [`tokenize`].

use std::num::ParseFloatError;

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{alt, opt},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{any, one_of, take_till, take_while},
};

use simpledraw_core::Number;

use crate::{
    span::Span,
    tokens::{self, PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O>;

/// Skip a run of spaces, tabs and carriage returns
fn whitespace(input: &mut Input<'_>) -> IResult<()> {
    take_while(1.., [' ', '\t', '\r']).void().parse_next(input)
}

/// Skip a comment from `#` up to, but not including, the end of the line
fn line_comment(input: &mut Input<'_>) -> IResult<()> {
    ('#', take_while(0.., |c: char| c != '\n'))
        .void()
        .parse_next(input)
}

fn newline<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    '\n'.value(Token::Newline).parse_next(input)
}

/// Convert the text of a number literal into its value.
///
/// Literals with a decimal point are floats. Integer literals that do not
/// fit in `i64` fall back to a float.
fn number_value(text: &str) -> Result<Number, ParseFloatError> {
    if text.contains('.') {
        return text.parse::<f64>().map(Number::Float);
    }
    match text.parse::<i64>() {
        Ok(value) => Ok(Number::Int(value)),
        Err(_) => text.parse::<f64>().map(Number::Float),
    }
}

/// Parse a number literal: ASCII digits with at most one decimal point.
///
/// A second `.` is not part of the literal (`1.2.3` lexes as `1.2`, `.`, `3`).
fn number_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(0.., |c: char| c.is_ascii_digit()))),
    )
        .take()
        .try_map(number_value)
        .map(Token::Number)
        .parse_next(input)
}

/// Parse a string literal in single or double quotes.
///
/// There are no escapes. A string without its closing quote runs to the
/// end of the input.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let quote = one_of(['"', '\'']).parse_next(input)?;
    let content = take_till(0.., quote).parse_next(input)?;
    opt(quote).parse_next(input)?;
    Ok(Token::StringLiteral(content))
}

/// Parse a word: keywords or an unknown identifier-like word
fn word<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    (
        one_of(|c: char| c.is_alphabetic()),
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_'),
    )
        .take()
        .map(|word: &'a str| tokens::keyword(word).unwrap_or(Token::Unknown(word)))
        .parse_next(input)
}

/// Any other single character
fn unknown_char<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    any.take().map(Token::Unknown).parse_next(input)
}

/// Parse the next token, or `None` for skipped whitespace and comments
fn lex_token<'a>(input: &mut Input<'a>) -> IResult<Option<Token<'a>>> {
    alt((
        whitespace.value(None),
        line_comment.value(None),
        newline.map(Some),
        number_literal.map(Some),
        string_literal.map(Some),
        word.map(Some),
        unknown_char.map(Some), // Must come last, matches anything
    ))
    .parse_next(input)
}

/// Lexer state: the tokens produced so far and the current line/column.
struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<PositionedToken<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            line: 1,
            column: 1,
        }
    }

    /// Move the line/column cursor over consumed text.
    fn advance(&mut self, consumed: &str) {
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn tokenize(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            let start = input.current_token_start();
            let (line, column) = (self.line, self.column);

            match lex_token(&mut input) {
                Ok(token) => {
                    let end = input.current_token_start();
                    let source = self.source;
                    self.advance(&source[start..end]);
                    if let Some(token) = token {
                        trace!(token:?, line, column; "Token");
                        self.tokens
                            .push(PositionedToken::new(token, Span::new(start..end), line, column));
                    }
                }
                Err(_) => {
                    // Unreachable in practice: `unknown_char` accepts any character.
                    if let Some(c) = input.next_token() {
                        self.advance(c.encode_utf8(&mut [0; 4]));
                    }
                }
            }
        }
    }

    /// Append the end marker and return the tokens.
    fn finish(mut self) -> Vec<PositionedToken<'a>> {
        let end = self.source.len();
        self.tokens.push(PositionedToken::new(
            Token::End,
            Span::new(end..end),
            self.line,
            self.column,
        ));
        self.tokens
    }
}

/// Tokenize SimpleDraw source text.
///
/// The result always ends with exactly one [`Token::End`]. Tokenizing never
/// fails: characters outside the language become [`Token::Unknown`].
pub fn tokenize(source: &str) -> Vec<PositionedToken<'_>> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize(LocatingSlice::new(source));
    let tokens = lexer.finish();
    debug!(tokens_count = tokens.len(); "Tokenized source");
    tokens
}
