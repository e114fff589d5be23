//! Export of compilation results.
//!
//! This is the last stage of the SimpleDraw pipeline:
//!
//! ```text
//! Source Text
//!     ↓ tokenize / parse
//! AST
//!     ↓ symbol table + code generation
//! Intermediate Code
//!     ↓ export (this module)
//! SVG image, JSON artifacts
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG image via [`svg::SvgRenderer`]
//! - [`json`]: JSON listings of tokens and instructions
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`SimpleDrawError::Export`] at the crate boundary.
//!
//! [`SimpleDrawError::Export`]: crate::SimpleDrawError::Export

pub mod json;
pub mod svg;

use thiserror::Error;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering failure, such as an unusable style setting.
    #[error("Render error: {0}")]
    Render(String),

    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
