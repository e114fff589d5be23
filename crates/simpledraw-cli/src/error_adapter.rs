//! Error adapter for converting SimpleDrawError to miette diagnostics.
//!
//! This module bridges the library's error types and miette's graphical
//! report rendering used by the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use simpledraw::{SimpleDrawError, SyntaxError};

/// Adapter for a syntax error together with its source text.
pub struct SyntaxErrorAdapter<'a> {
    err: &'a SyntaxError,
    src: &'a str,
}

impl<'a> SyntaxErrorAdapter<'a> {
    pub fn new(err: &'a SyntaxError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for SyntaxErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SyntaxErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl std::error::Error for SyntaxErrorAdapter<'_> {}

impl MietteDiagnostic for SyntaxErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.help()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let message = self.err.code().description().to_string();
        let label = LabeledSpan::new_primary_with_span(Some(message), span_to_miette(self.err));
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`SimpleDrawError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a SimpleDrawError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SimpleDrawError::Io(_) => "simpledraw::io",
            SimpleDrawError::Syntax { .. } => return None,
            SimpleDrawError::Config(_) => "simpledraw::config",
            SimpleDrawError::Export(_) => "simpledraw::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A syntax error with a source snippet.
    Syntax(SyntaxErrorAdapter<'a>),
    /// A plain error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Syntax(s) => fmt::Display::fmt(s, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Syntax(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Syntax(s) => s.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Syntax(s) => s.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Syntax(s) => s.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Syntax(s) => s.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Byte span of the offending token; empty for the end-of-input token.
fn span_to_miette(err: &SyntaxError) -> SourceSpan {
    let span = err.span();
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`SimpleDrawError`] into reportable errors.
pub fn to_reportables(err: &SimpleDrawError) -> Vec<Reportable<'_>> {
    match err {
        SimpleDrawError::Syntax { err: syntax, src } => {
            vec![Reportable::Syntax(SyntaxErrorAdapter::new(syntax, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
