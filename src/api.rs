//! String-boundary API for host applications.
//!
//! Embedders that only want a serialized result can call through here instead
//! of touching the data model.

use crate::models::ParseOptions;
use crate::parser::FountainParser;

/// Parses Fountain text and returns the output record as a JSON string.
pub fn parse_fountain_text(text: &str, include_tokens: bool) -> String {
    let options = ParseOptions::with_tokens(include_tokens);
    let result = FountainParser::new().parse(text, &options);
    serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
}
