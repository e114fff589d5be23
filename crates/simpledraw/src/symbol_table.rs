//! Symbol table built from a parsed program.
//!
//! The table records two kinds of symbols:
//!
//! - **Configuration** values (`paper_size`, `pen_width`). Declaring one
//!   again overwrites the value but keeps its original position.
//! - **Shapes**, named `{Keyword}_{n}` with a counter that starts at 1, is
//!   shared by all shape kinds and never reuses a number.
//!
//! Symbols iterate in insertion order.

use std::fmt;

use indexmap::IndexMap;
use log::{debug, trace};

use simpledraw_core::{
    Number,
    ast::{Program, ShapeKind, Statement},
};

/// Name of the configuration symbol declared by `Paper`.
pub const PAPER_SIZE: &str = "paper_size";
/// Name of the configuration symbol declared by `Pen`.
pub const PEN_WIDTH: &str = "pen_width";

const VALUE_WIDTH: usize = 20;

/// Category of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Config,
    Shape,
    /// Reserved; the language has no variables yet.
    Variable,
}

impl SymbolKind {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolKind::Config => "CONFIG",
            SymbolKind::Shape => "SHAPE",
            SymbolKind::Variable => "VARIABLE",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value stored in a symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolValue {
    /// A single configuration value.
    Scalar(Number),
    /// Named shape fields in declaration order.
    Fields(IndexMap<&'static str, Number>),
}

impl SymbolValue {
    /// Returns the scalar value, if this is one.
    pub fn as_scalar(&self) -> Option<Number> {
        match self {
            SymbolValue::Scalar(number) => Some(*number),
            SymbolValue::Fields(_) => None,
        }
    }

    /// Returns a named field of a shape value.
    pub fn field(&self, name: &str) -> Option<Number> {
        match self {
            SymbolValue::Scalar(_) => None,
            SymbolValue::Fields(fields) => fields.get(name).copied(),
        }
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolValue::Scalar(number) => write!(f, "{number}"),
            SymbolValue::Fields(fields) => {
                f.write_str("{")?;
                for (index, (name, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A named entry in the [`SymbolTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: String,
    kind: SymbolKind,
    value: SymbolValue,
    line: usize,
    data_type: &'static str,
}

impl Symbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn value(&self) -> &SymbolValue {
        &self.value
    }

    /// 1-based index of the declaring statement.
    pub fn line(&self) -> usize {
        self.line
    }

    /// `int`/`float` for configuration values, the shape keyword for shapes.
    pub fn data_type(&self) -> &'static str {
        self.data_type
    }
}

/// Symbol counts by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub configs: usize,
    pub shapes: usize,
    pub variables: usize,
}

/// Mapping from symbol names to [`Symbol`]s, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
    shape_counter: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table by walking the program's statements in order.
    ///
    /// The "line" of every symbol is the 1-based index of its statement.
    pub fn from_program(program: &Program) -> Self {
        let mut table = Self::new();
        for (index, statement) in program.statements().iter().enumerate() {
            let line = index + 1;
            match statement {
                Statement::Paper(paper) => {
                    table.add_config(PAPER_SIZE, Number::Int(paper.size), line);
                }
                Statement::Pen(pen) => {
                    table.add_config(PEN_WIDTH, Number::Int(pen.width), line);
                }
                Statement::Line(shape) => {
                    table.add_shape(ShapeKind::Line, shape.fields(), line);
                }
                Statement::Circle(shape) => {
                    table.add_shape(ShapeKind::Circle, shape.fields(), line);
                }
                Statement::Rect(shape) => {
                    table.add_shape(ShapeKind::Rect, shape.fields(), line);
                }
            }
        }
        debug!(symbols_count = table.len(); "Symbol table built");
        table
    }

    /// Declares a configuration value.
    ///
    /// Re-declaring an existing name replaces it in place.
    pub fn add_config(&mut self, name: &str, value: Number, line: usize) -> &Symbol {
        trace!(name, value:%, line; "Adding config symbol");
        self.insert(Symbol {
            name: name.to_string(),
            kind: SymbolKind::Config,
            value: SymbolValue::Scalar(value),
            line,
            data_type: value.type_name(),
        })
    }

    /// Declares a new shape named after its kind and the next counter value.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        fields: impl IntoIterator<Item = (&'static str, Number)>,
        line: usize,
    ) -> &Symbol {
        self.shape_counter += 1;
        let name = format!("{}_{}", kind.as_str(), self.shape_counter);
        trace!(name, line; "Adding shape symbol");
        self.insert(Symbol {
            name,
            kind: SymbolKind::Shape,
            value: SymbolValue::Fields(fields.into_iter().collect()),
            line,
            data_type: kind.as_str(),
        })
    }

    fn insert(&mut self, symbol: Symbol) -> &Symbol {
        let entry = self.symbols.entry(symbol.name.clone());
        match entry {
            indexmap::map::Entry::Occupied(mut occupied) => {
                occupied.insert(symbol);
                occupied.into_mut()
            }
            indexmap::map::Entry::Vacant(vacant) => vacant.insert(symbol),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Replaces the value of an existing symbol.
    ///
    /// Returns `None` if `name` is not declared. A configuration symbol's
    /// data type follows the new value.
    pub fn update(&mut self, name: &str, value: SymbolValue) -> Option<&Symbol> {
        let symbol = self.symbols.get_mut(name)?;
        if let (SymbolKind::Config, SymbolValue::Scalar(number)) = (symbol.kind, &value) {
            symbol.data_type = number.type_name();
        }
        symbol.value = value;
        Some(symbol)
    }

    /// Scalar value of a configuration symbol, if declared.
    pub fn config_value(&self, name: &str) -> Option<Number> {
        self.get(name).and_then(|symbol| symbol.value.as_scalar())
    }

    pub fn statistics(&self) -> Statistics {
        let count = |kind| self.symbols.values().filter(|s| s.kind == kind).count();
        Statistics {
            total: self.symbols.len(),
            configs: count(SymbolKind::Config),
            shapes: count(SymbolKind::Shape),
            variables: count(SymbolKind::Variable),
        }
    }

    /// Iterates over symbols in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Truncates `text` to the value column width, marking the cut with `...`.
fn truncate_value(text: &str) -> String {
    if text.chars().count() <= VALUE_WIDTH {
        return text.to_string();
    }
    let kept: String = text.chars().take(VALUE_WIDTH - 3).collect();
    format!("{kept}...")
}

/// Renders the table with one row per symbol.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} {:<15} {:<15} {:<20} {:<10}",
            "Name", "Kind", "Data Type", "Value", "Line"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;
        for symbol in self.iter() {
            writeln!(
                f,
                "{:<20} {:<15} {:<15} {:<20} {:<10}",
                symbol.name,
                symbol.kind.name(),
                symbol.data_type,
                truncate_value(&symbol.value.to_string()),
                symbol.line
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use simpledraw_core::ast::{Circle, Line, Paper, Pen};

    use super::*;

    fn line_fields() -> [(&'static str, Number); 4] {
        Line {
            x1: Number::Int(10),
            y1: Number::Int(20),
            x2: Number::Int(30),
            y2: Number::Int(40),
        }
        .fields()
    }

    #[test]
    fn test_config_redeclaration_overwrites() {
        let mut table = SymbolTable::new();
        table.add_config(PAPER_SIZE, Number::Int(100), 1);
        table.add_config(PEN_WIDTH, Number::Int(1), 2);
        table.add_config(PAPER_SIZE, Number::Int(200), 3);

        assert_eq!(table.len(), 2);
        let paper = table.get(PAPER_SIZE).unwrap();
        assert_eq!(paper.value(), &SymbolValue::Scalar(Number::Int(200)));
        assert_eq!(paper.line(), 3);
        // Keeps its original position
        assert_eq!(table.iter().next().unwrap().name(), PAPER_SIZE);
    }

    #[test]
    fn test_shape_names_share_counter() {
        let mut table = SymbolTable::new();
        assert_eq!(table.add_shape(ShapeKind::Line, line_fields(), 1).name(), "Line_1");
        assert_eq!(table.add_shape(ShapeKind::Line, line_fields(), 2).name(), "Line_2");
        let circle = Circle {
            x: Number::Int(5),
            y: Number::Int(5),
            radius: Number::Int(2),
        };
        let symbol = table.add_shape(ShapeKind::Circle, circle.fields(), 3);
        assert_eq!(symbol.name(), "Circle_3");
        assert_eq!(symbol.data_type(), "Circle");
        assert_eq!(symbol.kind(), SymbolKind::Shape);
    }

    #[test]
    fn test_float_fields() {
        let mut table = SymbolTable::new();
        let circle = Circle {
            x: Number::Float(12.25),
            y: Number::Int(5),
            radius: Number::Float(0.1),
        };
        let symbol = table.add_shape(ShapeKind::Circle, circle.fields(), 1);

        let radius = symbol.value().field("radius").unwrap();
        assert!(radius.is_float());
        float_cmp::assert_approx_eq!(f64, radius.as_f64(), 0.1);
        float_cmp::assert_approx_eq!(f64, symbol.value().field("x").unwrap().as_f64(), 12.25);
        assert_eq!(symbol.value().field("width"), None);
    }

    #[test]
    fn test_data_type_follows_value() {
        let mut table = SymbolTable::new();
        assert_eq!(table.add_config("scale", Number::Float(1.5), 1).data_type(), "float");
        assert_eq!(table.add_config(PEN_WIDTH, Number::Int(3), 2).data_type(), "int");
    }

    #[test]
    fn test_get_and_exists() {
        let mut table = SymbolTable::new();
        table.add_config(PEN_WIDTH, Number::Int(3), 1);
        assert!(table.exists(PEN_WIDTH));
        assert!(!table.exists(PAPER_SIZE));
        assert!(table.get("Line_1").is_none());
        assert_eq!(table.config_value(PEN_WIDTH), Some(Number::Int(3)));
        assert_eq!(table.config_value(PAPER_SIZE), None);
    }

    #[test]
    fn test_update() {
        let mut table = SymbolTable::new();
        table.add_config(PAPER_SIZE, Number::Int(100), 1);

        let updated = table
            .update(PAPER_SIZE, SymbolValue::Scalar(Number::Float(150.5)))
            .unwrap();
        assert_eq!(updated.value().as_scalar(), Some(Number::Float(150.5)));
        assert_eq!(updated.data_type(), "float");
        assert_eq!(updated.line(), 1);

        assert!(
            table
                .update("missing", SymbolValue::Scalar(Number::Int(1)))
                .is_none()
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_statistics() {
        let mut table = SymbolTable::new();
        table.add_config(PAPER_SIZE, Number::Int(100), 1);
        table.add_shape(ShapeKind::Line, line_fields(), 2);
        table.add_shape(ShapeKind::Line, line_fields(), 3);

        assert_eq!(
            table.statistics(),
            Statistics {
                total: 3,
                configs: 1,
                shapes: 2,
                variables: 0,
            }
        );
        assert_eq!(SymbolTable::new().statistics(), Statistics::default());
    }

    #[test]
    fn test_from_program() {
        let program = Program::new(vec![
            Statement::Paper(Paper { size: 100 }),
            Statement::Pen(Pen { width: 3 }),
            Statement::Line(Line {
                x1: Number::Int(50),
                y1: Number::Int(10),
                x2: Number::Int(10),
                y2: Number::Int(90),
            }),
            Statement::Pen(Pen { width: 5 }),
        ]);
        let table = SymbolTable::from_program(&program);

        let names: Vec<_> = table.iter().map(Symbol::name).collect();
        assert_eq!(names, vec![PAPER_SIZE, PEN_WIDTH, "Line_1"]);

        let pen = table.get(PEN_WIDTH).unwrap();
        assert_eq!(pen.value().as_scalar(), Some(Number::Int(5)));
        assert_eq!(pen.line(), 4);

        let line = table.get("Line_1").unwrap();
        assert_eq!(line.line(), 3);
        assert_eq!(line.value().field("y2"), Some(Number::Int(90)));
        assert_eq!(line.value().field("radius"), None);
    }

    #[test]
    fn test_value_display() {
        let value = SymbolValue::Fields(line_fields().into_iter().collect());
        assert_eq!(value.to_string(), "{x1: 10, y1: 20, x2: 30, y2: 40}");
        assert_eq!(truncate_value(&value.to_string()), "{x1: 10, y1: 20, ...");
        assert_eq!(truncate_value("100"), "100");
    }

    #[test]
    fn test_table_display() {
        let mut table = SymbolTable::new();
        table.add_config(PAPER_SIZE, Number::Int(100), 1);
        let listing = table.to_string();
        let row = listing.lines().nth(2).unwrap();
        assert!(row.starts_with("paper_size"));
        assert!(row.contains("CONFIG"));
        assert!(row.contains("int"));
    }
}
