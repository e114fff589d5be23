//! SimpleDraw Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! SimpleDraw pipeline. It includes:
//!
//! - **Numbers**: Integer-or-float literal values ([`number::Number`])
//! - **AST**: The syntax tree produced by the parser ([`ast`] module)
//! - **Colors**: CSS color handling for rendering ([`color::Color`])

pub mod ast;
pub mod color;
pub mod number;

pub use number::Number;
