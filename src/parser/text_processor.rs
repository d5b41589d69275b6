use crate::utils::{EMPHASIS_STYLES, INLINE_HTML, INLINE_REGEX};

/// Rewrites inline markup within a single token's text into HTML.
///
/// The cascade order is load-bearing: notes and escapes first, then literal
/// line breaks, then the emphasis categories from longest marker to shortest.
/// Each emphasis category is tested against the current string state and
/// replaced at most once per call, so a second `**bold**` run on the same
/// line stays as typed.
///
/// Empty or absent input short-circuits to `None`.
pub fn lexer(text: Option<&str>) -> Option<String> {
    let text = text?;
    if text.is_empty() {
        return None;
    }

    let mut s = INLINE_REGEX["note_inline"]
        .replace_all(text, INLINE_HTML["note_inline"])
        .to_string();

    // escaped markers are parked in placeholders so the emphasis rules
    // cannot see them, and restored at the very end
    s = s
        .replace(r"\*", "[star]")
        .replace(r"\_", "[underline]")
        .replace('\n', "<br />");

    for style in EMPHASIS_STYLES.iter() {
        let pattern = &INLINE_REGEX[style];
        if pattern.is_match(&s) {
            s = pattern.replace(&s, INLINE_HTML[style]).to_string();
        }
    }

    Some(
        s.replace("[star]", "*")
            .replace("[underline]", "_")
            .trim()
            .to_string(),
    )
}
