pub mod models;
pub mod utils;
pub mod parser;
pub mod api;

pub use models::{
    Token,
    TokenKind,
    DualPosition,
    ParseOptions,
    ParseOutput
};

pub use parser::{
    FountainParser,
    tokenize,
    lexer
};

pub use api::parse_fountain_text;

/// Parses Fountain screenplay text into HTML fragments and a structured
/// output record.
///
/// # Arguments
///
/// * `script` - the full screenplay text
/// * `options` - parse configuration
///
/// # Returns
///
/// The assembled [`ParseOutput`].
pub fn parse(script: &str, options: &ParseOptions) -> ParseOutput {
    FountainParser::new().parse(script, options)
}

/// Like [`parse`], but invokes `callback` synchronously with the finished
/// output immediately before returning that same output.
pub fn parse_with_callback<F>(script: &str, options: &ParseOptions, callback: F) -> ParseOutput
where
    F: FnOnce(&ParseOutput),
{
    let output = parse(script, options);
    callback(&output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let options = ParseOptions::default();
        let result = parse("INT. ROOM - DAY\n\nHello, world!", &options);
        assert_eq!(result.scenes, vec!["INT. ROOM - DAY"]);
        assert_eq!(
            result.script_html,
            "<h2>INT. ROOM - DAY</h2><p>Hello, world!</p>"
        );
    }
}
