//! Declaration queries built on the scan combinators.

use crate::source::Source;
use phpcons_scanner::{SearchKey, TokenKind};

/// Kinds that make up a qualified name after the `namespace` keyword.
const NAME_KINDS: [TokenKind; 2] = [TokenKind::Identifier, TokenKind::NsSeparator];

/// Visibility keywords that open a property declaration.
const VISIBILITY_KEYS: [SearchKey<'static>; 3] = [
    SearchKey::Kind(TokenKind::PrivateKeyword),
    SearchKey::Kind(TokenKind::ProtectedKeyword),
    SearchKey::Kind(TokenKind::PublicKeyword),
];

impl Source {
    /// The declared namespace in canonical absolute form, always prefixed
    /// with the namespace separator. None when the file declares none.
    pub fn namespace(&mut self) -> Option<String> {
        self.find_token(&[SearchKey::Kind(TokenKind::NamespaceKeyword)])?;
        let name = self.token_content(&NAME_KINDS, None)?;
        if name.starts_with('\\') {
            Some(name)
        } else {
            Some(format!("\\{}", name))
        }
    }

    /// The name of the first class or trait declared in the file. Later
    /// declarations in a multi-class file are not seen.
    pub fn short_class_name(&mut self) -> Option<String> {
        self.find_token(&[
            SearchKey::Kind(TokenKind::ClassKeyword),
            SearchKey::Kind(TokenKind::TraitKeyword),
        ])?;
        self.token_content(&[TokenKind::Identifier], None)
    }

    /// The fully qualified class name: declared namespace joined to the
    /// short name with a separator, without a leading separator. A file in
    /// the global namespace yields the bare short name.
    pub fn class_name(&mut self) -> Option<String> {
        let namespace = self.namespace();
        let short = self.short_class_name()?;
        Some(qualify(namespace.as_deref(), &short))
    }

    /// The raw initializer text of the first property whose name matches
    /// one of `names`, quotes and all (`'test:1'`). Candidate names may be
    /// given with or without the `$` sigil.
    ///
    /// Always starts its own full-file scan, so it can be asked repeatedly
    /// for different names on the same instance. Returns None when no
    /// matching declaration exists; a declaration without an initializer
    /// yields an empty string.
    pub fn property(&mut self, names: &[&str]) -> Option<String> {
        self.reset();
        let variables: Vec<String> = names
            .iter()
            .map(|name| {
                if name.starts_with('$') {
                    (*name).to_string()
                } else {
                    format!("${}", name)
                }
            })
            .collect();
        self.find_token_where(&VISIBILITY_KEYS, |scanner, index| {
            let variable = scanner.token_content(&[TokenKind::Variable], Some(index))?;
            if variables.iter().any(|name| *name == variable) {
                scanner.position()
            } else {
                None
            }
        })?;
        let value = self.token_content_until(&[SearchKey::Text(";")], &["="]);
        Some(value.unwrap_or_default())
    }

    /// Like [`property`](Self::property), with surrounding quote characters
    /// trimmed off the value.
    pub fn string_property(&mut self, names: &[&str]) -> Option<String> {
        self.property(names)
            .map(|value| value.trim_matches(|c| c == '\'' || c == '"').to_string())
    }
}

/// Join a namespace and a short class name into a fully qualified name
/// without a leading separator.
pub fn qualify(namespace: Option<&str>, short: &str) -> String {
    match namespace {
        Some(namespace) => format!("{}\\{}", namespace.trim_start_matches('\\'), short),
        None => short.to_string(),
    }
}
