use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

/// Emphasis categories in the order the inline lexer must try them.
///
/// Longer combined markers come first: testing plain bold before
/// bold-italic would turn `***x***` into mismatched nested tags.
pub const EMPHASIS_STYLES: [&str; 7] = [
    "bold_italic_underline",
    "bold_underline",
    "italic_underline",
    "bold_italic",
    "bold",
    "italic",
    "underline",
];

lazy_static! {
    // Block/token classification patterns, applied per block by the tokenizer.
    pub static ref TOKEN_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("title_page", Regex::new(r"(?im)^((?:title|credit|authors?|source|notes|draft date|date|contact|copyright):)").unwrap());
        map.insert("title_value", Regex::new(r":\n*").unwrap());

        map.insert("scene_heading", Regex::new(r"(?i)^((?:\*{0,3}_?)?(?:int|ext|est|i/e)[. ].+)|^\.([^.\n].*)").unwrap());
        map.insert("scene_number", Regex::new(r"( *#(.+)# *)").unwrap());

        map.insert("transition", Regex::new(r"^((?:FADE (?:TO BLACK|OUT)|CUT TO BLACK)\.|.+ TO:)|^> *(.+)").unwrap());

        // a cue is either all-caps or forced with a leading @, followed by the
        // spoken body on the next line; a trailing ^ marks the right-hand side
        // of a dual-dialogue pair
        map.insert("dialogue", Regex::new(r"^(@[^\n\^]*|[A-Z*_]+[0-9A-Z (._\-')]*)(\^)?\n([\s\S]+)").unwrap());
        map.insert("parenthetical", Regex::new(r"^(\(.+\))$").unwrap());
        map.insert("parenthetical_split", Regex::new(r"(\(.+\))\n+").unwrap());

        map.insert("centered", Regex::new(r"^> *(.+) *<(\n.+)*").unwrap());
        map.insert("angle_brackets", Regex::new(r"[><]").unwrap());

        map.insert("section", Regex::new(r"^(#+) *(.*)").unwrap());
        map.insert("synopsis", Regex::new(r"^= *(.*)").unwrap());
        map.insert("lyrics", Regex::new(r"^~ *(.*)").unwrap());

        map.insert("note", Regex::new(r"^\[\[([^\[\n].*)\]\]$").unwrap());
        map.insert("boneyard", Regex::new(r"^(/\*|\*/)$").unwrap());
        map.insert("boneyard_isolate", Regex::new(r"(?m)^(/\*|\*/) *$").unwrap());

        map.insert("page_break", Regex::new(r"^={3,}$").unwrap());
        map.insert("line_break", Regex::new(r"^ {2}$").unwrap());

        // pre-processing
        map.insert("splitter", Regex::new(r"\n{2,}").unwrap());
        map.insert("cleaner", Regex::new(r"^\n+|\n+$").unwrap());
        map.insert("standardizer", Regex::new(r"\r\n|\r").unwrap());
        map.insert("whitespacer", Regex::new(r"(?m)^(?:\t+| {3,})").unwrap());
        map
    };

    // Inline markup patterns, applied within a single token's text.
    pub static ref INLINE_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("note_inline", Regex::new(r"\[\[([^\[][\s\S]*?)\]\]").unwrap());
        map.insert("bold_italic_underline", Regex::new(r"(_\*{3}|\*{3}_)(.+?)(\*{3}_|_\*{3})").unwrap());
        map.insert("bold_underline", Regex::new(r"(_\*{2}|\*{2}_)(.+?)(\*{2}_|_\*{2})").unwrap());
        map.insert("italic_underline", Regex::new(r"(?:_\*|\*_)(.+?)(\*_|_\*)").unwrap());
        map.insert("bold_italic", Regex::new(r"(\*{3})(.+?)(\*{3})").unwrap());
        map.insert("bold", Regex::new(r"(\*{2})(.+?)(\*{2})").unwrap());
        map.insert("italic", Regex::new(r"(\*)(.+?)(\*)").unwrap());
        map.insert("underline", Regex::new(r"(_)(.+?)(_)").unwrap());
        map
    };

    // Replacement templates keyed like INLINE_REGEX.
    pub static ref INLINE_HTML: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("note_inline", "<!-- ${1} -->");
        map.insert("bold_italic_underline", "<strong><em><span style=\"text-decoration:underline\">${2}</span></em></strong>");
        map.insert("bold_underline", "<strong><span style=\"text-decoration:underline\">${2}</span></strong>");
        map.insert("italic_underline", "<em><span style=\"text-decoration:underline\">${1}</span></em>");
        map.insert("bold_italic", "<strong><em>${2}</em></strong>");
        map.insert("bold", "<strong>${2}</strong>");
        map.insert("italic", "<em>${2}</em>");
        map.insert("underline", "<span style=\"text-decoration:underline\">${2}</span>");
        map
    };
}
