//! phpcons_scanner: Lexer/tokenizer for PHP source text.
//!
//! Classifies raw source text into the token categories `token_get_all`
//! produces, eagerly and in one pass:
//! - open/close tags and inline HTML passthrough
//! - variables, identifiers, namespace separators
//! - string literals with their raw quoted text preserved
//! - comments, doc comments, attributes
//! - multi-character operators and kindless single-character punctuation
//!
//! The lexer is tolerant by design: malformed input yields diagnostics and a
//! best-effort token stream, never a panic or an error return. Downstream
//! declaration extraction treats a garbled file as "nothing declared".

mod char_codes;
mod lexer;
mod token;
mod token_kind;

pub use lexer::Lexer;
pub use token::{SearchKey, Token};
pub use token_kind::TokenKind;
