//! JSON listings of tokens and instructions.
//!
//! Tokens are written as `{"type", "value", "line"}` records and
//! instructions as `{"op", "arg1", "arg2", "arg3", "result"}` records.
//! Absent values are `null`. Output is pretty-printed.

use log::debug;
use serde::Serialize;

use simpledraw_core::Number;
use simpledraw_parser::{PositionedToken, TokenValue};

use super::Error;
use crate::ir::IntermediateCode;

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ValueRecord<'a> {
    Number(Number),
    Text(&'a str),
}

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: Option<ValueRecord<'a>>,
    line: usize,
}

impl<'a> From<&PositionedToken<'a>> for TokenRecord<'a> {
    fn from(token: &PositionedToken<'a>) -> Self {
        Self {
            kind: token.kind().name(),
            value: token.value().map(|value| match value {
                TokenValue::Number(number) => ValueRecord::Number(number),
                TokenValue::Text(text) => ValueRecord::Text(text),
            }),
            line: token.line,
        }
    }
}

/// Serializes the token stream, end marker included.
pub fn tokens_to_json(tokens: &[PositionedToken<'_>]) -> Result<String, Error> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    let json = serde_json::to_string_pretty(&records)?;
    debug!(records_count = records.len(); "Tokens serialized");
    Ok(json)
}

/// Serializes the instruction list.
pub fn instructions_to_json(code: &IntermediateCode) -> Result<String, Error> {
    let json = serde_json::to_string_pretty(code.instructions())?;
    debug!(records_count = code.len(); "Instructions serialized");
    Ok(json)
}
