//! Token records produced by the lexer.

use crate::token_kind::TokenKind;
use phpcons_core::text::TextSpan;

/// A single scanned token: its category, its raw source text, and where it
/// came from. `kind` is `None` for single-character punctuation, the same
/// shape `token_get_all` gives those tokens.
#[derive(Debug, Clone)]
pub struct Token {
    /// The lexical category, or `None` for bare punctuation.
    pub kind: Option<TokenKind>,
    /// The raw source text of the token. String literals keep their quotes.
    pub text: String,
    /// Where the token sits in the source text.
    pub span: TextSpan,
}

/// The key a token is matched against during scanning: its kind when it has
/// one, otherwise its literal text. This unifies "match by category" and
/// "match by exact character" into one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey<'a> {
    Kind(TokenKind),
    Text(&'a str),
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: TextSpan) -> Self {
        Self {
            kind: Some(kind),
            text: text.into(),
            span,
        }
    }

    /// A kindless single-character punctuation token.
    pub fn punct(text: impl Into<String>, span: TextSpan) -> Self {
        Self {
            kind: None,
            text: text.into(),
            span,
        }
    }

    /// The key match predicates compare against.
    pub fn search_key(&self) -> SearchKey<'_> {
        match self.kind {
            Some(kind) => SearchKey::Kind(kind),
            None => SearchKey::Text(&self.text),
        }
    }

    /// Whether this token's search key is one of the given keys.
    pub fn matches(&self, keys: &[SearchKey<'_>]) -> bool {
        keys.contains(&self.search_key())
    }

    /// Whether this token is of the given kind.
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == Some(kind)
    }

    /// Whether this token is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind == Some(TokenKind::Whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_key() {
        let ident = Token::new(TokenKind::Identifier, "Foo", TextSpan::new(0, 3));
        assert_eq!(ident.search_key(), SearchKey::Kind(TokenKind::Identifier));

        let semi = Token::punct(";", TextSpan::new(3, 1));
        assert_eq!(semi.search_key(), SearchKey::Text(";"));
    }

    #[test]
    fn test_matches() {
        let semi = Token::punct(";", TextSpan::new(0, 1));
        assert!(semi.matches(&[SearchKey::Text(";"), SearchKey::Text("{")]));
        assert!(!semi.matches(&[SearchKey::Kind(TokenKind::Identifier)]));
    }
}
