//! Human-readable listings of each compilation stage.

use std::fmt;

use simpledraw_parser::PositionedToken;

use crate::Compilation;

const RULE_WIDTH: usize = 70;

/// Numbered token listing, one `index: Token(KIND, value, Lline:Ccol)` per line.
pub struct TokenListing<'a, 'src>(pub &'a [PositionedToken<'src>]);

impl fmt::Display for TokenListing<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.0.iter().enumerate() {
            writeln!(f, "{index:3}: {token}")?;
        }
        Ok(())
    }
}

/// Full report of a successful compilation.
///
/// Prints the token stream, the syntax tree, the symbol table and the final
/// intermediate code, each under its own heading.
pub struct Report<'a, 'src> {
    compilation: &'a Compilation<'src>,
}

impl<'a, 'src> Report<'a, 'src> {
    pub fn new(compilation: &'a Compilation<'src>) -> Self {
        Self { compilation }
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(f, "{rule}")?;
    writeln!(f, "{title:^RULE_WIDTH$}")?;
    writeln!(f, "{rule}")
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compilation = self.compilation;

        heading(f, "LEXICAL ANALYSIS")?;
        write!(f, "{}", TokenListing(compilation.tokens()))?;

        writeln!(f)?;
        heading(f, "SYNTAX ANALYSIS")?;
        write!(f, "{}", compilation.program())?;

        writeln!(f)?;
        heading(f, "SYMBOL TABLE")?;
        write!(f, "{}", compilation.symbols())?;
        let stats = compilation.symbols().statistics();
        writeln!(
            f,
            "Total: {} (configs: {}, shapes: {}, variables: {})",
            stats.total, stats.configs, stats.shapes, stats.variables
        )?;

        writeln!(f)?;
        heading(f, "INTERMEDIATE CODE")?;
        write!(f, "{}", compilation.code())?;
        if compilation.removed() > 0 {
            writeln!(
                f,
                "Optimization: {} instruction(s) removed",
                compilation.removed()
            )?;
        }
        Ok(())
    }
}
