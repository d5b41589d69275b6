pub mod fountain_constants;

pub use fountain_constants::{EMPHASIS_STYLES, INLINE_HTML, INLINE_REGEX, TOKEN_REGEX};
