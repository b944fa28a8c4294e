//! Type-safe parameter vocabulary for the dsmadmc runner.
//!
//! This module replaces stringly-typed option values with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::Deserialize;
use strum::{Display, EnumString};

/// Query output layout forced on the administrative client.
///
/// Maps to the client's `-DISPL=` option. The canonical spellings are the
/// client's minimal-abbreviation forms (`LISt`, `TABle`); parsing accepts
/// any casing of the abbreviated or full words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DisplayMode {
    #[strum(to_string = "LISt", serialize = "list")]
    List,
    #[strum(to_string = "TABle", serialize = "table")]
    Table,
}

/// Command text as supplied by the host engine.
///
/// The host may hand over a single string or a sequence of tokens; a
/// sequence is coerced token-by-token to canonical string form and joined
/// with single spaces before any further processing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CommandInput {
    Text(String),
    Tokens(Vec<serde_json::Value>),
}

impl CommandInput {
    /// Flatten to the single command string the compiler operates on.
    pub fn into_text(self) -> String {
        match self {
            CommandInput::Text(text) => text,
            CommandInput::Tokens(tokens) => tokens
                .into_iter()
                .map(|token| match token {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
