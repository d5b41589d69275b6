pub mod token;
pub mod options;
pub mod output;

pub use token::{Token, TokenKind, DualPosition};
pub use options::ParseOptions;
pub use output::ParseOutput;
