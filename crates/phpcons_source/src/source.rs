//! The scan cursor and its combinators.

use phpcons_core::{LineAndColumn, LineMap, TextPos};
use phpcons_diagnostics::DiagnosticCollection;
use phpcons_scanner::{Lexer, SearchKey, Token, TokenKind};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Texts that end a content scan no matter what has been accumulated.
const CONTENT_TERMINATORS: [&str; 3] = ["{", ";", "("];

/// One PHP source file, tokenized eagerly at construction, with a mutable
/// scan cursor over the token stream.
///
/// The cursor starts at -1 (before the first token), moves only forward,
/// and is shared by successive queries on the same instance. The namespace
/// and class queries are meant to run once each, in order, on a fresh
/// instance; the property query resets the cursor itself so it can be asked
/// repeatedly for different names.
pub struct Source {
    path: Option<PathBuf>,
    tokens: Vec<Token>,
    cursor: isize,
    diagnostics: DiagnosticCollection,
    line_map: LineMap,
}

impl Source {
    /// Tokenize the given source text. Text that does not open with a PHP
    /// tag gets one prepended, so bare snippets still tokenize as script.
    pub fn new(text: &str) -> Self {
        let script;
        let text = if text.starts_with("<?") {
            text
        } else {
            script = format!("<?php {}", text);
            &script
        };
        let (tokens, diagnostics) = Lexer::new(text).tokenize();
        Self {
            path: None,
            tokens,
            cursor: -1,
            diagnostics,
            line_map: LineMap::new(text),
        }
    }

    /// Tokenize a list of source lines, joined with the platform line
    /// separator.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let separator = if cfg!(windows) { "\r\n" } else { "\n" };
        let text = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join(separator);
        Self::new(&text)
    }

    /// Read and tokenize a file. Only the read itself can fail; malformed
    /// PHP yields diagnostics, not an error.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut source = Self::new(&text);
        source.path = Some(path.to_path_buf());
        let file = path.display().to_string();
        let mut located = DiagnosticCollection::new();
        for diagnostic in source.diagnostics.into_diagnostics() {
            located.add(diagnostic.in_file(&file));
        }
        source.diagnostics = located;
        Ok(source)
    }

    /// The file this source was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Diagnostics recorded during tokenization.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Line and column of a text offset, for diagnostic display. Offsets
    /// refer to the text as scanned, including any prepended open tag.
    pub fn line_and_column(&self, pos: TextPos) -> LineAndColumn {
        self.line_map.line_and_column_of(pos)
    }

    /// The token stream.
    pub fn token_stream(&self) -> &[Token] {
        &self.tokens
    }

    /// Move the cursor back before the first token.
    pub fn reset(&mut self) {
        self.cursor = -1;
    }

    /// The current cursor position, or None when at the start sentinel.
    pub fn position(&self) -> Option<usize> {
        if self.cursor < 0 {
            None
        } else {
            Some(self.cursor as usize)
        }
    }

    /// First index of a forward scan: one past `start`, or one past the
    /// cursor when no explicit start is given.
    fn scan_start(&self, start: Option<usize>) -> usize {
        match start {
            Some(index) => index + 1,
            None => (self.cursor + 1) as usize,
        }
    }

    /// Iterate `(index, token)` pairs forward from one past `start` (or the
    /// cursor). Finite, forward-only; never revisits earlier indices.
    pub fn tokens(&self, start: Option<usize>) -> impl Iterator<Item = (usize, &Token)> {
        let from = self.scan_start(start);
        self.tokens.iter().enumerate().skip(from)
    }

    /// Find the next token matching one of `keys`, scanning forward from
    /// one past the cursor. On a match the cursor lands on the found token
    /// and its index is returned; otherwise the cursor is left unchanged.
    pub fn find_token(&mut self, keys: &[SearchKey]) -> Option<usize> {
        let found = self
            .tokens(None)
            .find(|(_, token)| token.matches(keys))
            .map(|(index, _)| index)?;
        self.cursor = found as isize;
        Some(found)
    }

    /// Like [`find_token`](Self::find_token), but each candidate must also
    /// pass `accept`, which may run nested scans of its own and returns the
    /// cursor position those scans should leave behind. When `accept`
    /// declines a candidate, any cursor movement it caused is rolled back
    /// before the scan moves on.
    pub fn find_token_where(
        &mut self,
        keys: &[SearchKey],
        mut accept: impl FnMut(&mut Source, usize) -> Option<usize>,
    ) -> Option<usize> {
        let mut index = self.scan_start(None);
        while index < self.tokens.len() {
            if self.tokens[index].matches(keys) {
                let saved = self.cursor;
                match accept(self, index) {
                    Some(landing) => {
                        self.cursor = landing as isize;
                        return Some(index);
                    }
                    None => self.cursor = saved,
                }
            }
            index += 1;
        }
        None
    }

    /// Concatenate the text of every token whose kind is in `kinds`,
    /// scanning forward from one past `start` (or the cursor). Tokens of
    /// other kinds are skipped silently, with two exceptions: whitespace
    /// ends the scan once anything has been accumulated, and `{`, `;`, `(`
    /// end it unconditionally. The cursor lands on the last accumulated
    /// token.
    ///
    /// This is how a qualified name spread over identifier and separator
    /// tokens comes back as one string.
    pub fn token_content(&mut self, kinds: &[TokenKind], start: Option<usize>) -> Option<String> {
        let mut content: Option<String> = None;
        let mut last = None;
        for (index, token) in self.tokens(start) {
            if CONTENT_TERMINATORS.contains(&token.text.as_str()) {
                break;
            }
            if token.is_whitespace() {
                if content.is_some() {
                    break;
                }
                continue;
            }
            if let Some(kind) = token.kind {
                if kinds.contains(&kind) {
                    content.get_or_insert_with(String::new).push_str(&token.text);
                    last = Some(index);
                }
            }
        }
        if let Some(index) = last {
            self.cursor = index as isize;
        }
        content
    }

    /// Accumulate the text of every non-whitespace token forward from one
    /// past the cursor, until a token matching `terminators` is seen
    /// (exclusive). Tokens whose text is in `skip` are passed over as long
    /// as nothing has been accumulated yet; that is how a leading `=` is
    /// dropped from a property initializer. Returns the trimmed text, or
    /// None when nothing was accumulated before the terminator.
    pub fn token_content_until(
        &mut self,
        terminators: &[SearchKey],
        skip: &[&str],
    ) -> Option<String> {
        let mut content: Option<String> = None;
        let mut last = None;
        for (index, token) in self.tokens(None) {
            if token.matches(terminators) {
                break;
            }
            if token.is_whitespace() {
                continue;
            }
            if content.is_none() && skip.contains(&token.text.as_str()) {
                continue;
            }
            content.get_or_insert_with(String::new).push_str(&token.text);
            last = Some(index);
        }
        if let Some(index) = last {
            self.cursor = index as isize;
        }
        content.map(|text| text.trim().to_string())
    }
}
