pub mod tokenizer;
pub mod text_processor;
pub mod fountain_parser;

pub use fountain_parser::FountainParser;
pub use text_processor::lexer;
pub use tokenizer::tokenize;
