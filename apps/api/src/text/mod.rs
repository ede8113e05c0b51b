// Shared text primitives: tokenization and HTML escaping.
// Every module that scans or marks up user text goes through these.

pub mod html;
pub mod tokenizer;

pub use html::escape_html;
pub use tokenizer::{lowercase_words, tokenize, words, Token};
