//! phpcons_core: Core utilities for the phpcons source introspector.
//!
//! Provides text spans and line maps used by the scanner, the declaration
//! extractor, and diagnostics.

pub mod text;

pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
