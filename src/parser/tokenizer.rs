use crate::models::{DualPosition, Token, TokenKind};
use crate::utils::TOKEN_REGEX;

/// Maps a title-page keyword ("Draft date", "Authors", ...) to its token kind.
fn title_page_kind(key: &str) -> Option<TokenKind> {
    match key.trim().to_lowercase().replacen(' ', "_", 1).as_str() {
        "title" => Some(TokenKind::Title),
        "credit" => Some(TokenKind::Credit),
        "author" => Some(TokenKind::Author),
        "authors" => Some(TokenKind::Authors),
        "source" => Some(TokenKind::Source),
        "notes" => Some(TokenKind::Notes),
        "draft_date" => Some(TokenKind::DraftDate),
        "date" => Some(TokenKind::Date),
        "contact" => Some(TokenKind::Contact),
        "copyright" => Some(TokenKind::Copyright),
        _ => None,
    }
}

/// A scene heading or character cue whose first double space sits at its very
/// end is treated as invisible and dropped from its rule.
fn trailing_double_space(text: &str) -> bool {
    let first = text.find("  ").map(|i| i as isize).unwrap_or(-1);
    first == text.len() as isize - 2
}

/// Splits a dialogue body into dialogue runs and `(...)` parentheticals,
/// keeping the parentheticals as their own entries.
fn split_dialogue_body(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for caps in TOKEN_REGEX["parenthetical_split"].captures_iter(body) {
        let whole = caps.get(0).unwrap();
        parts.push(&body[last..whole.start()]);
        parts.push(caps.get(1).unwrap().as_str());
        last = whole.end();
    }
    parts.push(&body[last..]);
    parts
}

/// Scans raw screenplay text into an ordered token stream.
///
/// The text is split into blocks on blank lines and scanned bottom-up so that
/// a dual-dialogue marker (`^`) can wrap the block above it; the stream is
/// reversed into source order before returning. Classification never fails:
/// anything unrecognized falls through to `action`.
pub fn tokenize(script: &str) -> Vec<Token> {
    let src = TOKEN_REGEX["standardizer"].replace_all(script, "\n");
    let src = TOKEN_REGEX["boneyard_isolate"].replace_all(&src, "\n${1}\n");
    let src = TOKEN_REGEX["cleaner"].replace_all(&src, "");
    let src = TOKEN_REGEX["whitespacer"].replace_all(&src, "");
    let blocks: Vec<&str> = TOKEN_REGEX["splitter"].split(&src).collect();

    let mut tokens: Vec<Token> = Vec::new();
    let mut dual = false;
    let mut in_boneyard = false;

    for &line in blocks.iter().rev() {
        // boneyard markers; scanning bottom-up, `*/` opens the span and
        // `/*` closes it
        if let Some(caps) = TOKEN_REGEX["boneyard"].captures(line) {
            if &caps[1] == "/*" {
                tokens.push(Token::marker(TokenKind::BoneyardBegin));
                in_boneyard = false;
            } else {
                tokens.push(Token::marker(TokenKind::BoneyardEnd));
                in_boneyard = true;
            }
            continue;
        }

        // commented-out text keeps its place in the stream but skips
        // classification; the renderer's comment wrapping hides it
        if in_boneyard {
            tokens.push(Token::new(TokenKind::Action, line));
            continue;
        }

        // title page
        if TOKEN_REGEX["title_page"].is_match(line) {
            let keyed = TOKEN_REGEX["title_page"].replace_all(line, "\n${1}");
            let mut entries: Vec<&str> = TOKEN_REGEX["splitter"].split(&keyed).collect();
            entries.reverse();
            for entry in entries {
                let entry = TOKEN_REGEX["cleaner"].replace_all(entry, "");
                let mut parts = TOKEN_REGEX["title_value"].splitn(&entry, 3);
                let key = parts.next().unwrap_or("");
                // colon-less fragments and unknown keywords are skipped
                if let (Some(kind), Some(value)) = (title_page_kind(key), parts.next()) {
                    tokens.push(Token::new(kind, value.trim()));
                }
            }
            continue;
        }

        // scene headings, plain or forced with a leading dot
        if let Some(caps) = TOKEN_REGEX["scene_heading"].captures(line) {
            let matched = caps.get(1).or_else(|| caps.get(2)).unwrap();
            let mut text = matched.as_str().to_string();

            if !trailing_double_space(&text) {
                let mut scene_number = None;
                if let Some(num) = TOKEN_REGEX["scene_number"].captures(&text) {
                    scene_number = Some(num[2].to_string());
                    text = TOKEN_REGEX["scene_number"].replace(&text, "").to_string();
                }
                let mut token = Token::new(TokenKind::SceneHeading, &text);
                token.scene_number = scene_number;
                tokens.push(token);
            }
            continue;
        }

        // centered text; the > < fences are stripped from the whole match
        if let Some(whole) = TOKEN_REGEX["centered"].find(line) {
            let text = TOKEN_REGEX["angle_brackets"].replace_all(whole.as_str(), "");
            tokens.push(Token::new(TokenKind::Centered, &text));
            continue;
        }

        // transitions
        if let Some(caps) = TOKEN_REGEX["transition"].captures(line) {
            let text = caps.get(1).or_else(|| caps.get(2)).unwrap();
            tokens.push(Token::new(TokenKind::Transition, text.as_str()));
            continue;
        }

        // dialogue blocks - character cue, parentheticals and dialogue.
        // pushed backwards because the scan runs bottom-up.
        if let Some(caps) = TOKEN_REGEX["dialogue"].captures(line) {
            let cue = caps.get(1).unwrap().as_str();
            if !trailing_double_space(cue) {
                let dual_right = caps.get(2).is_some();
                if dual_right {
                    tokens.push(Token::marker(TokenKind::DualDialogueEnd));
                }
                tokens.push(Token::marker(TokenKind::DialogueEnd));

                let mut parts = split_dialogue_body(caps.get(3).unwrap().as_str());
                parts.reverse();
                for text in parts {
                    if !text.is_empty() {
                        let kind = if TOKEN_REGEX["parenthetical"].is_match(text) {
                            TokenKind::Parenthetical
                        } else {
                            TokenKind::Dialogue
                        };
                        tokens.push(Token::new(kind, text));
                    }
                }

                tokens.push(Token::new(TokenKind::Character, cue.trim()));
                let mut begin = Token::marker(TokenKind::DialogueBegin);
                begin.dual = if dual_right {
                    Some(DualPosition::Right)
                } else if dual {
                    Some(DualPosition::Left)
                } else {
                    None
                };
                tokens.push(begin);

                if dual {
                    tokens.push(Token::marker(TokenKind::DualDialogueBegin));
                }
                dual = dual_right;
                continue;
            }
            // a cue ending in a double space reads as action instead
        }

        // sections
        if let Some(caps) = TOKEN_REGEX["section"].captures(line) {
            let mut token = Token::new(TokenKind::Section, &caps[2]);
            token.depth = Some(caps[1].len());
            tokens.push(token);
            continue;
        }

        // synopses; a leading = must not open a ==== page-break run
        if let Some(caps) = TOKEN_REGEX["synopsis"].captures(line) {
            if !line.starts_with("==") {
                tokens.push(Token::new(TokenKind::Synopsis, &caps[1]));
                continue;
            }
        }

        // lyrics
        if let Some(caps) = TOKEN_REGEX["lyrics"].captures(line) {
            tokens.push(Token::new(TokenKind::Lyrics, &caps[1]));
            continue;
        }

        // notes
        if let Some(caps) = TOKEN_REGEX["note"].captures(line) {
            tokens.push(Token::new(TokenKind::Note, &caps[1]));
            continue;
        }

        // page breaks
        if TOKEN_REGEX["page_break"].is_match(line) {
            tokens.push(Token::marker(TokenKind::PageBreak));
            continue;
        }

        // line breaks
        if TOKEN_REGEX["line_break"].is_match(line) {
            tokens.push(Token::marker(TokenKind::LineBreak));
            continue;
        }

        tokens.push(Token::new(TokenKind::Action, line));
    }

    tokens.reverse();
    tokens
}
