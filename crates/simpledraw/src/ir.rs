//! Intermediate representation of a drawing.
//!
//! The IR is a flat list of [`Instruction`]s, one per statement and in
//! document order. Arguments are positional; the fourth value of `LINE`
//! and `RECT` lives in the `result` slot.
//!
//! ```text
//! PAPER size
//! PEN   width
//! LINE   x1, y1, x2 | y2
//! CIRCLE x,  y,  r
//! RECT   x,  y,  w  | h
//! ```

mod optimize;

use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use simpledraw_core::{
    Number,
    ast::{Program, Statement},
};

/// Instruction opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Opcode {
    Paper,
    Pen,
    Line,
    Circle,
    Rect,
}

impl Opcode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Paper => "PAPER",
            Opcode::Pen => "PEN",
            Opcode::Line => "LINE",
            Opcode::Circle => "CIRCLE",
            Opcode::Rect => "RECT",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single IR instruction.
///
/// Two instructions are equal when the opcode and all four slots are equal,
/// comparing values numerically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Instruction {
    pub op: Opcode,
    pub arg1: Option<Number>,
    pub arg2: Option<Number>,
    pub arg3: Option<Number>,
    pub result: Option<Number>,
}

impl Instruction {
    pub fn new(
        op: Opcode,
        arg1: Option<Number>,
        arg2: Option<Number>,
        arg3: Option<Number>,
        result: Option<Number>,
    ) -> Self {
        Self {
            op,
            arg1,
            arg2,
            arg3,
            result,
        }
    }

    /// The instruction for a single statement.
    pub fn from_statement(statement: &Statement) -> Self {
        match statement {
            Statement::Paper(paper) => {
                Self::new(Opcode::Paper, Some(Number::Int(paper.size)), None, None, None)
            }
            Statement::Pen(pen) => {
                Self::new(Opcode::Pen, Some(Number::Int(pen.width)), None, None, None)
            }
            Statement::Line(line) => Self::new(
                Opcode::Line,
                Some(line.x1),
                Some(line.y1),
                Some(line.x2),
                Some(line.y2),
            ),
            Statement::Circle(circle) => Self::new(
                Opcode::Circle,
                Some(circle.x),
                Some(circle.y),
                Some(circle.radius),
                None,
            ),
            Statement::Rect(rect) => Self::new(
                Opcode::Rect,
                Some(rect.x),
                Some(rect.y),
                Some(rect.width),
                Some(rect.height),
            ),
        }
    }
}

/// Writes an optional slot; absent values print as `None`.
struct Slot(Option<Number>);

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(number) => write!(f, "{number}"),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a1, a2, a3, r) = (
            Slot(self.arg1),
            Slot(self.arg2),
            Slot(self.arg3),
            Slot(self.result),
        );
        match self.op {
            Opcode::Paper | Opcode::Pen => write!(f, "{} {a1}", self.op),
            Opcode::Circle => write!(f, "{} {a1}, {a2}, {a3}", self.op),
            Opcode::Line | Opcode::Rect => write!(f, "{} {a1}, {a2}, {a3}, {r}", self.op),
        }
    }
}

/// An ordered instruction sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntermediateCode {
    instructions: Vec<Instruction>,
}

impl IntermediateCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates one instruction per statement, in document order.
    pub fn generate(program: &Program) -> Self {
        let mut code = Self::new();
        for statement in program.statements() {
            code.emit(Instruction::from_statement(statement));
        }
        debug!(instructions_count = code.len(); "Intermediate code generated");
        code
    }

    /// Appends an instruction.
    pub fn emit(&mut self, instruction: Instruction) -> &Instruction {
        trace!(instruction:%; "Emitting instruction");
        self.instructions.push(instruction);
        &self.instructions[self.instructions.len() - 1]
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl From<Vec<Instruction>> for IntermediateCode {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

/// Renders the numbered listing, one instruction per line.
impl fmt::Display for IntermediateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "{index:3}: {instruction}")?;
        }
        Ok(())
    }
}
