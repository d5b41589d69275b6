use serde::{Deserialize, Serialize};

/// Parse configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Attach the full token stream to the output record.
    pub tokens: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: bool) -> Self {
        ParseOptions { tokens }
    }
}
