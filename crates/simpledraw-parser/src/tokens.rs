use std::fmt;

use simpledraw_core::Number;

use crate::span::Span;

/// Token types for the SimpleDraw language
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    // Keywords
    Paper,
    Pen,
    Line,
    Circle,
    Rect,

    // Literals
    Number(Number),
    StringLiteral(&'src str),

    Newline,
    /// Marks the end of the token stream; always the last token.
    End,

    /// A word or character with no meaning in the language.
    Unknown(&'src str),
}

impl Token<'_> {
    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Paper => TokenKind::Paper,
            Token::Pen => TokenKind::Pen,
            Token::Line => TokenKind::Line,
            Token::Circle => TokenKind::Circle,
            Token::Rect => TokenKind::Rect,
            Token::Number(_) => TokenKind::Number,
            Token::StringLiteral(_) => TokenKind::String,
            Token::Newline => TokenKind::Newline,
            Token::End => TokenKind::End,
            Token::Unknown(_) => TokenKind::Unknown,
        }
    }
}

/// Looks up a keyword token by its exact, case-sensitive spelling.
pub(crate) fn keyword<'src>(word: &str) -> Option<Token<'src>> {
    match word {
        "Paper" => Some(Token::Paper),
        "Pen" => Some(Token::Pen),
        "Line" => Some(Token::Line),
        "Circle" => Some(Token::Circle),
        "Rect" => Some(Token::Rect),
        _ => None,
    }
}

/// Payload-free token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Paper,
    Pen,
    Line,
    Circle,
    Rect,
    Number,
    String,
    Newline,
    End,
    Unknown,
}

impl TokenKind {
    /// Upper-case name used in listings and exports (e.g. `"PAPER"`).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Paper => "PAPER",
            TokenKind::Pen => "PEN",
            TokenKind::Line => "LINE",
            TokenKind::Circle => "CIRCLE",
            TokenKind::Rect => "RECT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Newline => "NEWLINE",
            TokenKind::End => "END",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value carried by a token, as shown in listings and exports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue<'src> {
    Number(Number),
    Text(&'src str),
}

impl fmt::Display for TokenValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(number) => write!(f, "{number}"),
            TokenValue::Text(text) => f.write_str(text),
        }
    }
}

/// A token with position information for winnow integration
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
    /// 1-based line of the first character.
    pub line: usize,
    /// 1-based column of the first character, counted in characters.
    pub column: usize,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span, line: usize, column: usize) -> Self {
        Self {
            token,
            span,
            line,
            column,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }

    /// Returns the token value; keywords carry their spelling and `End` has none.
    pub fn value(&self) -> Option<TokenValue<'src>> {
        match self.token {
            Token::Paper => Some(TokenValue::Text("Paper")),
            Token::Pen => Some(TokenValue::Text("Pen")),
            Token::Line => Some(TokenValue::Text("Line")),
            Token::Circle => Some(TokenValue::Text("Circle")),
            Token::Rect => Some(TokenValue::Text("Rect")),
            Token::Number(number) => Some(TokenValue::Number(number)),
            Token::StringLiteral(text) | Token::Unknown(text) => Some(TokenValue::Text(text)),
            Token::Newline => Some(TokenValue::Text("\\n")),
            Token::End => None,
        }
    }
}

impl fmt::Display for PositionedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, ", self.kind())?;
        match self.value() {
            Some(value) => write!(f, "{value}")?,
            None => f.write_str("None")?,
        }
        write!(f, ", L{}:C{})", self.line, self.column)
    }
}
