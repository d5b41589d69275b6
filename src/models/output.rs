use serde::{Deserialize, Serialize};
use crate::models::token::Token;

/// The structured result of one parse call.
///
/// Scalar title-page fields are last-token-wins; `authors` accumulates across
/// `author` and `authors` tokens; `scenes` lists every scene heading's
/// rendered text in document order. The two HTML fields hold the joined
/// title-page and script-body fragments. `tokens` is only attached when the
/// caller asked for it via [`ParseOptions`](crate::models::ParseOptions).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseOutput {
    pub title: String,
    pub credit: String,
    pub authors: Vec<String>,
    pub source: String,
    pub notes: String,
    pub draft_date: String,
    pub date: String,
    pub contact: String,
    pub copyright: String,

    pub scenes: Vec<String>,

    pub title_page_html: String,
    pub script_html: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token>>,
}

impl ParseOutput {
    pub fn new() -> Self {
        Self::default()
    }
}
