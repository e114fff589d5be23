//! SimpleDraw - a tiny drawing language compiled to SVG.
//!
//! Source text goes through tokenizing, parsing, symbol collection and
//! intermediate code generation. The resulting instruction list can be
//! rendered to SVG or exported as JSON.

pub mod config;
pub mod export;
pub mod ir;
pub mod report;
pub mod symbol_table;

mod error;

pub use simpledraw_core::{Number, ast, color};
pub use simpledraw_parser::{PositionedToken, SyntaxError, TokenKind};

pub use error::SimpleDrawError;

use log::{debug, info, trace};

use config::AppConfig;
use export::svg::SvgRenderer;
use ir::IntermediateCode;
use report::Report;
use symbol_table::SymbolTable;

/// Compiler for SimpleDraw programs.
///
/// Holds only configuration, so a single instance can compile any number
/// of sources.
///
/// # Examples
///
/// ```rust
/// use simpledraw::{Compiler, config::AppConfig};
///
/// let source = "Paper 100\nPen 3\nLine 50 10 10 90\n";
///
/// let compiler = Compiler::new(AppConfig::default());
/// let compilation = compiler.compile(source).expect("Failed to compile");
/// assert_eq!(compilation.code().len(), 3);
///
/// let svg = compiler.render_svg(&compilation).expect("Failed to render");
/// assert!(svg.contains("<line"));
/// ```
#[derive(Debug, Default)]
pub struct Compiler {
    config: AppConfig,
}

impl Compiler {
    /// Create a new compiler with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compile source text into tokens, a syntax tree, a symbol table and
    /// intermediate code.
    ///
    /// The optimizer runs unless `[compiler] optimize` is off.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleDrawError::Syntax`] when the source does not parse.
    /// Nothing else is produced in that case.
    pub fn compile<'src>(&self, source: &'src str) -> Result<Compilation<'src>, SimpleDrawError> {
        info!("Compiling source");

        let tokens = simpledraw_parser::tokenize(source);
        let program = simpledraw_parser::parse(&tokens)
            .map_err(|err| SimpleDrawError::new_syntax_error(err, source))?;
        debug!(statements_count = program.len(); "Program parsed");
        trace!(program:?; "Parsed program");

        let symbols = SymbolTable::from_program(&program);
        let mut code = IntermediateCode::generate(&program);
        let removed = if self.config.compiler().optimize() {
            code.optimize()
        } else {
            debug!("Optimization disabled");
            0
        };

        info!(
            tokens_count = tokens.len(),
            symbols_count = symbols.len(),
            instructions_count = code.len(),
            removed;
            "Compilation finished"
        );

        Ok(Compilation {
            tokens,
            program,
            symbols,
            code,
            removed,
        })
    }

    /// Render a compilation to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleDrawError::Export`] if the configured style cannot be
    /// used.
    pub fn render_svg(&self, compilation: &Compilation<'_>) -> Result<String, SimpleDrawError> {
        let renderer = SvgRenderer::new(&self.config)?;
        let svg = renderer.render_to_string(compilation.code(), compilation.symbols());
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// The token stream as pretty-printed JSON.
    pub fn tokens_json(&self, compilation: &Compilation<'_>) -> Result<String, SimpleDrawError> {
        Ok(export::json::tokens_to_json(compilation.tokens())?)
    }

    /// The intermediate code as pretty-printed JSON.
    pub fn instructions_json(
        &self,
        compilation: &Compilation<'_>,
    ) -> Result<String, SimpleDrawError> {
        Ok(export::json::instructions_to_json(compilation.code())?)
    }
}

/// Every artifact of one successful compilation.
#[derive(Debug, Clone)]
pub struct Compilation<'src> {
    tokens: Vec<PositionedToken<'src>>,
    program: ast::Program,
    symbols: SymbolTable,
    code: IntermediateCode,
    removed: usize,
}

impl<'src> Compilation<'src> {
    /// The token stream, end marker included.
    pub fn tokens(&self) -> &[PositionedToken<'src>] {
        &self.tokens
    }

    pub fn program(&self) -> &ast::Program {
        &self.program
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The intermediate code after optimization.
    pub fn code(&self) -> &IntermediateCode {
        &self.code
    }

    /// How many instructions the optimizer removed.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Stage-by-stage listing of this compilation.
    pub fn report(&self) -> Report<'_, 'src> {
        Report::new(self)
    }
}
