use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{ParseOptions, ParseOutput, TokenKind};
use crate::parser::text_processor::lexer;
use crate::parser::tokenizer::tokenize;

lazy_static! {
    // strips every HTML tag the inline lexer may have produced
    static ref HTML_TAG: Regex = Regex::new(r"(?s)<.*?>").unwrap();
}

/// Walks the token stream once and assembles the parse output: title-page
/// HTML, script-body HTML and the structured metadata record.
pub struct FountainParser;

impl FountainParser {
    pub fn new() -> Self {
        FountainParser
    }

    pub fn parse(&self, script: &str, options: &ParseOptions) -> ParseOutput {
        let mut tokens = tokenize(script);
        let mut title_page_html: Vec<String> = Vec::new();
        let mut script_html: Vec<String> = Vec::new();
        let mut output = ParseOutput::new();

        for token in tokens.iter_mut() {
            token.text = lexer(token.text.as_deref());
            let text = token.text.clone().unwrap_or_default();

            match token.kind {
                TokenKind::Title => {
                    title_page_html.push(format!("<h1>{}</h1>", text));
                    let plain = text.replacen("<br />", " ", 1);
                    output.title = HTML_TAG.replace_all(&plain, "").to_string();
                }
                TokenKind::Credit => {
                    title_page_html.push(format!("<p class=\"credit\">{}</p>", text));
                    output.credit = text;
                }
                TokenKind::Author => {
                    title_page_html.push(format!("<p class=\"authors\">{}</p>", text));
                    output.authors.push(text);
                }
                TokenKind::Authors => {
                    title_page_html.push(format!("<p class=\"authors\">{}</p>", text));
                    let joined = text.replacen("<br />", "\n", 1).replacen(", ", ",", 1);
                    output
                        .authors
                        .extend(joined.split(['\n', ',']).map(str::to_string));
                }
                TokenKind::Source => {
                    title_page_html.push(format!("<p class=\"source\">{}</p>", text));
                    output.source = text;
                }
                TokenKind::Notes => {
                    title_page_html.push(format!("<p class=\"notes\">{}</p>", text));
                    output.notes = text;
                }
                TokenKind::DraftDate => {
                    title_page_html.push(format!("<p class=\"draft-date\">{}</p>", text));
                    output.draft_date = text;
                }
                TokenKind::Date => {
                    title_page_html.push(format!("<p class=\"date\">{}</p>", text));
                    output.date = text;
                }
                TokenKind::Contact => {
                    title_page_html.push(format!("<p class=\"contact\">{}</p>", text));
                    output.contact = text;
                }
                TokenKind::Copyright => {
                    title_page_html.push(format!("<p class=\"copyright\">{}</p>", text));
                    output.copyright = text;
                }

                TokenKind::SceneHeading => {
                    let anchor = match &token.scene_number {
                        Some(number) => format!(" id=\"{}\">", number),
                        None => ">".to_string(),
                    };
                    script_html.push(format!("<h2{}{}</h2>", anchor, text));
                    output.scenes.push(text);
                }
                TokenKind::Transition => {
                    script_html.push(format!("<p class=\"transition\">{}</p>", text));
                }

                TokenKind::DualDialogueBegin => {
                    script_html.push("<div class=\"dual-dialogue\">".to_string());
                }
                TokenKind::DialogueBegin => {
                    let class = match token.dual {
                        Some(side) => format!("dialogue {}", side.as_str()),
                        None => "dialogue".to_string(),
                    };
                    script_html.push(format!("<div class=\"{}\">", class));
                }
                TokenKind::Character => {
                    let name = text.strip_prefix('@').unwrap_or(&text);
                    script_html.push(format!("<h4>{}</h4>", name));
                }
                TokenKind::Parenthetical => {
                    script_html.push(format!("<p class=\"parenthetical\">{}</p>", text));
                }
                TokenKind::Dialogue => {
                    script_html.push(format!("<p>{}</p>", text));
                }
                TokenKind::DialogueEnd => {
                    script_html.push("</div>".to_string());
                }
                TokenKind::DualDialogueEnd => {
                    script_html.push("</div>".to_string());
                }

                TokenKind::Section => {
                    script_html.push(format!(
                        "<p class=\"section\" data-depth=\"{}\">{}</p>",
                        token.depth.unwrap_or_default(),
                        text
                    ));
                }
                TokenKind::Synopsis => {
                    script_html.push(format!("<p class=\"synopsis\">{}</p>", text));
                }

                TokenKind::Note => {
                    script_html.push(format!("<!-- {} -->", text));
                }
                TokenKind::BoneyardBegin => {
                    script_html.push("<!-- ".to_string());
                }
                TokenKind::BoneyardEnd => {
                    script_html.push(" -->".to_string());
                }

                TokenKind::Lyrics => {
                    script_html.push(format!("<p class=\"lyrics\">{}</p>", text));
                }
                TokenKind::Action => {
                    script_html.push(format!("<p>{}</p>", text));
                }
                TokenKind::Centered => {
                    script_html.push(format!("<p class=\"centered\">{}</p>", text));
                }

                TokenKind::PageBreak => {
                    script_html.push("<hr />".to_string());
                }
                TokenKind::LineBreak => {
                    script_html.push("<br />".to_string());
                }
            }
        }

        output.title_page_html = title_page_html.join("");
        output.script_html = script_html.join("");

        if options.tokens {
            output.tokens = Some(tokens);
        }

        output
    }
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new()
    }
}
