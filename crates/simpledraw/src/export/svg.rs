//! SVG rendering of intermediate code.
//!
//! The canvas is `paper_size × paper_size` with a full-size background
//! rectangle drawn first. All shapes sit in one group that carries the
//! stroke color and the `pen_width` stroke width, with no fill. `PAPER` and
//! `PEN` instructions draw nothing; their values are read from the symbol
//! table, falling back to the configured canvas defaults.

use log::{debug, info, warn};
use svg::{
    Document, Node,
    node::element::{self as svg_element, Group},
};

use simpledraw_core::{Number, color::Color};

use super::Error;
use crate::{
    config::AppConfig,
    ir::{Instruction, IntermediateCode, Opcode},
    symbol_table::{PAPER_SIZE, PEN_WIDTH, SymbolTable},
};

/// Renders intermediate code to an SVG document.
///
/// The renderer holds only resolved style settings, so one instance can
/// render any number of drawings.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    background: Color,
    stroke: Color,
    default_paper_size: i64,
    default_pen_width: i64,
}

impl SvgRenderer {
    /// Creates a renderer from the canvas and style settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color cannot be parsed.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let style = config.style();
        Ok(Self {
            background: style.background_color().map_err(Error::Render)?,
            stroke: style.stroke_color().map_err(Error::Render)?,
            default_paper_size: config.canvas().default_paper_size(),
            default_pen_width: config.canvas().default_pen_width(),
        })
    }

    /// Builds the SVG document for `code`.
    pub fn render(&self, code: &IntermediateCode, symbols: &SymbolTable) -> Document {
        let paper_size = symbols
            .config_value(PAPER_SIZE)
            .unwrap_or(Number::Int(self.default_paper_size));
        let pen_width = symbols
            .config_value(PEN_WIDTH)
            .unwrap_or(Number::Int(self.default_pen_width));
        info!(paper_size:%, pen_width:%; "Rendering SVG");

        let doc = Document::new()
            .set("width", paper_size)
            .set("height", paper_size);

        let background = svg_element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", &self.background);

        let mut shapes = Group::new()
            .set("stroke", &self.stroke)
            .set("stroke-width", pen_width)
            .set("fill", "none");

        let mut elements_count = 0;
        for element in code.iter().filter_map(Self::shape_element) {
            shapes = shapes.add(element);
            elements_count += 1;
        }
        debug!(elements_count; "Shapes rendered");

        doc.add(background).add(shapes)
    }

    /// Renders `code` straight to a string.
    pub fn render_to_string(&self, code: &IntermediateCode, symbols: &SymbolTable) -> String {
        self.render(code, symbols).to_string()
    }

    /// The element drawn by an instruction, or `None` for instructions that
    /// draw nothing.
    fn shape_element(instruction: &Instruction) -> Option<Box<dyn Node>> {
        let slots = (
            instruction.arg1,
            instruction.arg2,
            instruction.arg3,
            instruction.result,
        );
        match (instruction.op, slots) {
            (Opcode::Paper | Opcode::Pen, _) => None,
            (Opcode::Line, (Some(x1), Some(y1), Some(x2), Some(y2))) => Some(Box::new(
                svg_element::Line::new()
                    .set("x1", x1)
                    .set("y1", y1)
                    .set("x2", x2)
                    .set("y2", y2),
            )),
            (Opcode::Circle, (Some(cx), Some(cy), Some(r), _)) => Some(Box::new(
                svg_element::Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", r),
            )),
            (Opcode::Rect, (Some(x), Some(y), Some(width), Some(height))) => Some(Box::new(
                svg_element::Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", width)
                    .set("height", height),
            )),
            (op, _) => {
                warn!(op:%, instruction:%; "Skipping instruction with missing arguments");
                None
            }
        }
    }
}
