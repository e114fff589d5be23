//! Abstract syntax tree for SimpleDraw programs.
//!
//! A [`Program`] is always the root and owns an ordered list of
//! [`Statement`]s. Every statement is a leaf holding only numeric fields,
//! with a fixed arity per keyword:
//!
//! | Keyword  | Node        | Fields                      |
//! |----------|-------------|-----------------------------|
//! | `Paper`  | [`Paper`]   | `size`                      |
//! | `Pen`    | [`Pen`]     | `width`                     |
//! | `Line`   | [`Line`]    | `x1`, `y1`, `x2`, `y2`      |
//! | `Circle` | [`Circle`]  | `x`, `y`, `radius`          |
//! | `Rect`   | [`Rect`]    | `x`, `y`, `width`, `height` |
//!
//! [`Statement`] is a closed enum, so every traversal that matches on it
//! exhaustively has to handle a newly added statement kind.

use std::fmt;

use crate::number::Number;

/// Root node of a parsed program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    /// Creates a program from its statements, in document order.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Returns the statements in document order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Returns the number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns `true` if the program has no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A single top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Paper(Paper),
    Pen(Pen),
    Line(Line),
    Circle(Circle),
    Rect(Rect),
}

impl Statement {
    /// Source keyword that introduces this statement.
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Paper(_) => "Paper",
            Statement::Pen(_) => "Pen",
            Statement::Line(_) => "Line",
            Statement::Circle(_) => "Circle",
            Statement::Rect(_) => "Rect",
        }
    }
}

/// `Paper <size>`: canvas size, cast to an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paper {
    pub size: i64,
}

/// `Pen <width>`: stroke width, cast to an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub width: i64,
}

/// `Line <x1> <y1> <x2> <y2>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: Number,
    pub y1: Number,
    pub x2: Number,
    pub y2: Number,
}

/// `Circle <x> <y> <radius>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: Number,
    pub y: Number,
    pub radius: Number,
}

/// `Rect <x> <y> <width> <height>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: Number,
    pub y: Number,
    pub width: Number,
    pub height: Number,
}

/// The drawable statement kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Rect,
}

impl ShapeKind {
    /// Source keyword of the shape (`"Line"`, `"Circle"`, `"Rect"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Circle => "Circle",
            ShapeKind::Rect => "Rect",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Line {
    /// Named fields in declaration order.
    pub fn fields(&self) -> [(&'static str, Number); 4] {
        [
            ("x1", self.x1),
            ("y1", self.y1),
            ("x2", self.x2),
            ("y2", self.y2),
        ]
    }
}

impl Circle {
    /// Named fields in declaration order.
    pub fn fields(&self) -> [(&'static str, Number); 3] {
        [("x", self.x), ("y", self.y), ("radius", self.radius)]
    }
}

impl Rect {
    /// Named fields in declaration order.
    pub fn fields(&self) -> [(&'static str, Number); 4] {
        [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ]
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.keyword();
        match self {
            Statement::Paper(paper) => write!(f, "{keyword}(size={})", paper.size),
            Statement::Pen(pen) => write!(f, "{keyword}(width={})", pen.width),
            Statement::Line(line) => write_fields(f, keyword, &line.fields()),
            Statement::Circle(circle) => write_fields(f, keyword, &circle.fields()),
            Statement::Rect(rect) => write_fields(f, keyword, &rect.fields()),
        }
    }
}

fn write_fields(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    fields: &[(&'static str, Number)],
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (index, (field, value)) in fields.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{field}={value}")?;
    }
    f.write_str(")")
}

/// Renders the tree with one statement per indented line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program:")?;
        for statement in &self.statements {
            writeln!(f, "  {statement}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Statement {
        Statement::Line(Line {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
        })
    }

    #[test]
    fn test_program_accessors() {
        let program = Program::new(vec![Statement::Paper(Paper { size: 100 }), line(1, 2, 3, 4)]);
        assert_eq!(program.len(), 2);
        assert!(!program.is_empty());
        assert!(Program::default().is_empty());
    }

    #[test]
    fn test_statement_keyword() {
        assert_eq!(Statement::Pen(Pen { width: 3 }).keyword(), "Pen");
        assert_eq!(line(0, 0, 1, 1).keyword(), "Line");
    }

    #[test]
    fn test_statement_display() {
        assert_eq!(
            line(10, 20, 30, 40).to_string(),
            "Line(x1=10, y1=20, x2=30, y2=40)"
        );
        let circle = Statement::Circle(Circle {
            x: Number::Int(50),
            y: Number::Int(50),
            radius: Number::Float(20.5),
        });
        assert_eq!(circle.to_string(), "Circle(x=50, y=50, radius=20.5)");
    }

    #[test]
    fn test_program_display() {
        let program = Program::new(vec![Statement::Paper(Paper { size: 100 })]);
        assert_eq!(program.to_string(), "Program:\n  Paper(size=100)\n");
    }

    #[test]
    fn test_shape_kind_as_str() {
        assert_eq!(ShapeKind::Line.as_str(), "Line");
        assert_eq!(ShapeKind::Circle.to_string(), "Circle");
        assert_eq!(ShapeKind::Rect.as_str(), "Rect");
    }
}
