use fountain_html::models::TokenKind;
use fountain_html::{lexer, parse, parse_fountain_text, parse_with_callback, ParseOptions};

const SCRIPT: &str = "\
Title: Big Fish
Credit: written by
Author: John August

INT. TRAILER HOME - DAY

This is the home of THE BOY BAND, AKA DAN and JACK.

DAN
Hey Jack.

JACK ^
Hey Dan.

> BURN TO WHITE. <

===

THE END";

#[test]
fn test_parse_always_produces_a_result() {
    for script in ["", "\n\n\n", "}{|\\", SCRIPT] {
        let result = parse(script, &ParseOptions::default());
        assert!(result.tokens.is_none());
        let _ = result.script_html;
    }
}

#[test]
fn test_title_page_output() {
    let result = parse(SCRIPT, &ParseOptions::default());

    assert_eq!(result.title, "Big Fish");
    assert_eq!(result.credit, "written by");
    assert_eq!(result.authors, vec!["John August"]);
    assert_eq!(
        result.title_page_html,
        "<h1>Big Fish</h1><p class=\"credit\">written by</p><p class=\"authors\">John August</p>"
    );
}

#[test]
fn test_title_is_tag_stripped() {
    let result = parse("Title: _**BRICK & STEEL**_", &ParseOptions::default());

    assert_eq!(
        result.title_page_html,
        "<h1><strong><span style=\"text-decoration:underline\">BRICK & STEEL</span></strong></h1>"
    );
    assert_eq!(result.title, "BRICK & STEEL");
}

#[test]
fn test_multi_line_title_joins_with_a_space() {
    let result = parse("Title:\n\tBRICK\n\t& STEEL", &ParseOptions::default());
    assert_eq!(result.title, "BRICK & STEEL");
}

#[test]
fn test_metadata_overwrite_is_last_token_wins() {
    let result = parse("Title: One\n\nTitle: Two", &ParseOptions::default());
    assert_eq!(result.title, "Two");
    assert_eq!(result.title_page_html, "<h1>One</h1><h1>Two</h1>");
}

#[test]
fn test_authors_accumulate() {
    let result = parse(
        "Author: Jane Doe\nAuthors: Bob, Alice",
        &ParseOptions::default(),
    );
    assert_eq!(result.authors, vec!["Jane Doe", "Bob", "Alice"]);
}

#[test]
fn test_scenes_match_scene_heading_tokens_in_order() {
    let script = "INT. A - DAY\n\nAction.\n\nEXT. B - NIGHT\n\nMore action.";
    let result = parse(script, &ParseOptions::with_tokens(true));

    let heading_texts: Vec<String> = result
        .tokens
        .as_ref()
        .unwrap()
        .iter()
        .filter(|t| t.is_kind(TokenKind::SceneHeading))
        .map(|t| t.text.clone().unwrap())
        .collect();

    assert_eq!(result.scenes, heading_texts);
    assert_eq!(result.scenes, vec!["INT. A - DAY", "EXT. B - NIGHT"]);
}

#[test]
fn test_scene_number_becomes_anchor() {
    let result = parse("INT. HOUSE - DAY #1#", &ParseOptions::default());
    assert_eq!(result.script_html, "<h2 id=\"1\">INT. HOUSE - DAY</h2>");
}

#[test]
fn test_dual_dialogue_html() {
    let script = "BRICK\nScrew retirement.\n\nSTEEL ^\nScrew retirement.";
    let result = parse(script, &ParseOptions::default());

    assert_eq!(
        result.script_html,
        "<div class=\"dual-dialogue\">\
         <div class=\"dialogue left\"><h4>BRICK</h4><p>Screw retirement.</p></div>\
         <div class=\"dialogue right\"><h4>STEEL</h4><p>Screw retirement.</p></div>\
         </div>"
    );
}

#[test]
fn test_dual_dialogue_tokens_are_balanced() {
    // cue names need two or more characters: a one-character cue trips the
    // double-space drop rule and reads as action
    let script = "BRICK\nOne.\n\nSTEEL ^\nTwo.\n\nAction.\n\nDAN\nThree.\n\nJACK ^\nFour.";
    let result = parse(script, &ParseOptions::with_tokens(true));
    let tokens = result.tokens.unwrap();

    let mut dual_depth: i32 = 0;
    let mut dialogue_depth: i32 = 0;
    let mut nested_pairs = 0;
    for token in &tokens {
        match token.kind {
            TokenKind::DualDialogueBegin => dual_depth += 1,
            TokenKind::DualDialogueEnd => dual_depth -= 1,
            TokenKind::DialogueBegin => {
                dialogue_depth += 1;
                if dual_depth > 0 {
                    nested_pairs += 1;
                }
            }
            TokenKind::DialogueEnd => dialogue_depth -= 1,
            _ => {}
        }
        assert!(dual_depth >= 0 && dual_depth <= 1);
        assert!(dialogue_depth >= 0);
    }
    assert_eq!(dual_depth, 0);
    assert_eq!(dialogue_depth, 0);
    // two dual groups, each wrapping two ordinary dialogue blocks
    assert_eq!(nested_pairs, 4);
}

#[test]
fn test_character_at_prefix_is_stripped_in_html() {
    let result = parse("@McClane\nYippee ki-yay!", &ParseOptions::default());
    assert_eq!(
        result.script_html,
        "<div class=\"dialogue\"><h4>McClane</h4><p>Yippee ki-yay!</p></div>"
    );
}

#[test]
fn test_inline_note_renders_as_comment() {
    let result = parse("It was [[too]] quiet.", &ParseOptions::default());
    assert_eq!(result.script_html, "<p>It was <!-- too --> quiet.</p>");
}

#[test]
fn test_boneyard_renders_as_comment_span() {
    let result = parse("/*\nhidden stuff\n*/", &ParseOptions::default());
    assert_eq!(result.script_html, "<!-- <p>hidden stuff</p> -->");
}

#[test]
fn test_tokens_option() {
    let with = parse(SCRIPT, &ParseOptions::with_tokens(true));
    let without = parse(SCRIPT, &ParseOptions::default());

    assert!(with.tokens.is_some());
    assert!(without.tokens.is_none());
    // attached tokens carry the rendered text
    let tokens = with.tokens.unwrap();
    assert!(tokens
        .iter()
        .any(|t| t.is_kind(TokenKind::Centered) && t.text.as_deref() == Some("BURN TO WHITE.")));
}

#[test]
fn test_callback_receives_the_returned_output() {
    let mut seen_html = String::new();
    let result = parse_with_callback(SCRIPT, &ParseOptions::default(), |output| {
        seen_html = output.script_html.clone();
    });
    assert_eq!(seen_html, result.script_html);
}

#[test]
fn test_json_api() {
    let json = parse_fountain_text(SCRIPT, false);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["title"], "Big Fish");
    assert!(value.get("tokens").is_none());

    let json = parse_fountain_text(SCRIPT, true);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["tokens"][0]["kind"], "title");
}

// inline lexer behavior

#[test]
fn test_lexer_short_circuits_on_empty_input() {
    assert_eq!(lexer(None), None);
    assert_eq!(lexer(Some("")), None);
}

#[test]
fn test_lexer_is_identity_on_clean_text() {
    assert_eq!(
        lexer(Some("  Plain action text. ")),
        Some("Plain action text.".to_string())
    );
}

#[test]
fn test_lexer_emphasis_cascade() {
    assert_eq!(lexer(Some("**bold**")), Some("<strong>bold</strong>".to_string()));
    assert_eq!(lexer(Some("*italic*")), Some("<em>italic</em>".to_string()));
    assert_eq!(
        lexer(Some("_underline_")),
        Some("<span style=\"text-decoration:underline\">underline</span>".to_string())
    );
    assert_eq!(
        lexer(Some("_*both*_")),
        Some("<em><span style=\"text-decoration:underline\">both</span></em>".to_string())
    );
}

#[test]
fn test_lexer_bold_italic_precedence() {
    assert_eq!(
        lexer(Some("***bold italic***")),
        Some("<strong><em>bold italic</em></strong>".to_string())
    );
}

#[test]
fn test_lexer_escaped_markers_stay_literal() {
    assert_eq!(
        lexer(Some(r"\*not italic\*")),
        Some("*not italic*".to_string())
    );
    assert_eq!(
        lexer(Some(r"rate: 5\*\*")),
        Some("rate: 5**".to_string())
    );
}

#[test]
fn test_lexer_rewrites_one_run_per_category() {
    assert_eq!(
        lexer(Some("_one_ and _two_")),
        Some(
            "<span style=\"text-decoration:underline\">one</span> and _two_".to_string()
        )
    );
}

#[test]
fn test_lexer_turns_newlines_into_breaks() {
    assert_eq!(
        lexer(Some("one\ntwo")),
        Some("one<br />two".to_string())
    );
}
