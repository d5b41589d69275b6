use serde::{Deserialize, Serialize};

/// The closed set of token kinds the tokenizer can emit.
///
/// Serialized names match the wire format of the original parser
/// (`scene_heading`, `dual_dialogue_begin`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // title page fields
    Title,
    Credit,
    Author,
    Authors,
    Source,
    Notes,
    DraftDate,
    Date,
    Contact,
    Copyright,

    // structural
    SceneHeading,
    Transition,
    Section,
    Synopsis,
    PageBreak,
    LineBreak,

    // dialogue blocks
    DialogueBegin,
    Character,
    Parenthetical,
    Dialogue,
    DialogueEnd,
    DualDialogueBegin,
    DualDialogueEnd,

    // annotations
    Note,
    BoneyardBegin,
    BoneyardEnd,

    // everything else
    Lyrics,
    Action,
    Centered,
}

/// Side of a dual-dialogue pair a dialogue block is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DualPosition {
    Left,
    Right,
}

impl DualPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DualPosition::Left => "left",
            DualPosition::Right => "right",
        }
    }
}

/// One classified unit of screenplay text.
///
/// `text` is the raw source text until the parser runs the inline lexer over
/// it; structural markers (`dialogue_end`, `page_break`, ...) carry no text at
/// all. The remaining fields only apply to specific kinds: `scene_number` to
/// scene headings, `dual` to dialogue block openers, `depth` to sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual: Option<DualPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str) -> Self {
        Token {
            kind,
            text: Some(text.to_string()),
            scene_number: None,
            dual: None,
            depth: None,
        }
    }

    /// A token with no text payload (block delimiters, page breaks, ...).
    pub fn marker(kind: TokenKind) -> Self {
        Token {
            kind,
            text: None,
            scene_number: None,
            dual: None,
            depth: None,
        }
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
