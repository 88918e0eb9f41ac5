//! phpcons_source: Token-stream introspection of a single PHP source file.
//!
//! A [`Source`] wraps one file's token stream behind a small combinator set
//! (find a token by kind or text, accumulate token content up to a
//! terminator) and answers three structural questions on top of them: the
//! declared namespace, the declared class name, and the literal initializer
//! of a named property. No parsing, no AST; everything is forward pattern
//! matching over the flat token stream with a single advancing cursor.

mod queries;
mod source;

pub use queries::qualify;
pub use source::Source;
