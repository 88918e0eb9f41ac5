//! The PHP lexer.
//!
//! Converts source text into the flat token stream the declaration extractor
//! scans. Tokenization is eager: the whole input is classified in one pass
//! at construction time, and every character of the input lands in exactly
//! one token (whitespace and comments included - the extractor's combinators
//! need them present, not skipped).

use crate::char_codes::*;
use crate::token::Token;
use crate::token_kind::TokenKind;
use phpcons_core::text::TextSpan;
use phpcons_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

/// Lexer state: PHP files start as inline HTML and only the regions between
/// `<?php`/`<?=` and `?>` are scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InlineHtml,
    Scripting,
}

/// The lexer turns PHP source text into tokens.
pub struct Lexer {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// Whether we are in inline HTML or scripting context.
    state: State,
    /// Tokens produced so far.
    tokens: Vec<Token>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Lexer {
    /// Create a new lexer for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            state: State::InlineHtml,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Tokenize the whole input. Never fails: malformed input produces
    /// diagnostics and a best-effort stream.
    pub fn tokenize(mut self) -> (Vec<Token>, DiagnosticCollection) {
        while !self.is_eof() {
            match self.state {
                State::InlineHtml => self.scan_inline_html(),
                State::Scripting => self.scan_token(),
            }
        }
        (self.tokens, self.diagnostics)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Convert a range of chars to a String.
    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }

    /// Push a token covering `start..pos`.
    fn push(&mut self, kind: Option<TokenKind>, start: usize) {
        let span = TextSpan::from_bounds(start as u32, self.pos as u32);
        let text = self.chars_to_string(start, self.pos);
        let token = match kind {
            Some(kind) => Token::new(kind, text, span),
            None => Token::punct(text, span),
        };
        self.tokens.push(token);
    }

    /// Record an error diagnostic covering `start..pos`.
    fn add_error(&mut self, start: usize, message: &DiagnosticMessage, args: &[&str]) {
        let span = TextSpan::from_bounds(start as u32, self.pos as u32);
        self.diagnostics.add(Diagnostic::with_span(span, message, args));
    }

    // ========================================================================
    // Inline HTML and tags
    // ========================================================================

    /// Consume inline HTML up to the next open tag.
    fn scan_inline_html(&mut self) {
        let start = self.pos;
        while !self.is_eof() {
            if self.current_char() == Some('<') && self.char_at(1) == Some('?') {
                break;
            }
            self.pos += 1;
        }
        if self.pos > start {
            self.push(Some(TokenKind::InlineHtml), start);
        }
        if !self.is_eof() {
            self.scan_open_tag();
        }
    }

    /// Consume `<?php`, `<?=`, or the short `<?` and switch to scripting.
    fn scan_open_tag(&mut self) {
        let start = self.pos;
        if self.char_at(2) == Some('=') {
            self.pos += 3;
            self.push(Some(TokenKind::OpenTagWithEcho), start);
        } else if self.is_long_open_tag() {
            self.pos += 5;
            self.push(Some(TokenKind::OpenTag), start);
        } else {
            self.pos += 2;
            self.push(Some(TokenKind::OpenTag), start);
        }
        self.state = State::Scripting;
    }

    /// Whether the text at pos is `<?php` followed by whitespace or EOF.
    fn is_long_open_tag(&self) -> bool {
        let tag = ['p', 'h', 'p'];
        for (i, expected) in tag.iter().enumerate() {
            match self.char_at(2 + i) {
                Some(c) if c.eq_ignore_ascii_case(expected) => {}
                _ => return false,
            }
        }
        match self.char_at(5) {
            None => true,
            Some(c) => is_white_space(c),
        }
    }

    // ========================================================================
    // Scripting tokens
    // ========================================================================

    /// Scan the next scripting token.
    fn scan_token(&mut self) {
        let start = self.pos;
        let ch = self.text[self.pos];

        let kind: Option<TokenKind> = match ch {
            c if is_white_space(c) => {
                while !self.is_eof() && is_white_space(self.text[self.pos]) {
                    self.pos += 1;
                }
                Some(TokenKind::Whitespace)
            }

            '/' => match self.char_at(1) {
                Some('/') => Some(self.scan_line_comment()),
                Some('*') => Some(self.scan_block_comment(start)),
                Some('=') => {
                    self.pos += 2;
                    Some(TokenKind::DivEqual)
                }
                _ => {
                    self.pos += 1;
                    None
                }
            },

            '#' => {
                if self.char_at(1) == Some('[') {
                    self.pos += 2;
                    Some(TokenKind::Attribute)
                } else {
                    self.pos += 1;
                    Some(self.scan_rest_of_line_comment())
                }
            }

            '$' => {
                if self.char_at(1).map_or(false, is_label_start) {
                    self.pos += 1;
                    self.scan_label();
                    Some(TokenKind::Variable)
                } else {
                    self.pos += 1;
                    None
                }
            }

            '\\' => {
                self.pos += 1;
                Some(TokenKind::NsSeparator)
            }

            '\'' | '"' => Some(self.scan_string(ch, start)),

            '<' => self.scan_less_than(start),
            '>' => self.scan_greater_than(),
            '=' => self.scan_equals(),
            '!' => self.scan_exclamation(),
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            '*' => self.scan_asterisk(),
            '%' => self.scan_percent(),
            '.' => self.scan_dot(),
            '&' => self.scan_ampersand(),
            '|' => self.scan_bar(),
            '^' => self.scan_caret(),
            '?' => self.scan_question(),
            ':' => self.scan_colon(),

            '0'..='9' => Some(self.scan_number()),

            c if is_label_start(c) => {
                let label_start = self.pos;
                self.scan_label();
                let text = self.chars_to_string(label_start, self.pos);
                Some(TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier))
            }

            _ => {
                self.pos += 1;
                if !matches!(
                    ch,
                    '{' | '}' | '(' | ')' | '[' | ']' | ';' | ',' | '@' | '~' | '`'
                ) {
                    self.add_error(start, &messages::INVALID_CHARACTER, &[]);
                }
                None
            }
        };

        self.push(kind, start);
    }

    /// Advance over the remainder of a PHP label (identifier characters).
    fn scan_label(&mut self) {
        self.pos += 1;
        while !self.is_eof() && is_label_part(self.text[self.pos]) {
            self.pos += 1;
        }
    }

    // ========================================================================
    // Operators
    // ========================================================================

    fn scan_less_than(&mut self, start: usize) -> Option<TokenKind> {
        if self.char_at(1) == Some('<') && self.char_at(2) == Some('<') {
            return Some(self.scan_heredoc(start));
        }
        if self.char_at(1) == Some('<') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                return Some(TokenKind::ShiftLeftEqual);
            }
            self.pos += 2;
            return Some(TokenKind::ShiftLeft);
        }
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('>') {
                self.pos += 3;
                return Some(TokenKind::Spaceship);
            }
            self.pos += 2;
            return Some(TokenKind::IsSmallerOrEqual);
        }
        if self.char_at(1) == Some('>') {
            self.pos += 2;
            return Some(TokenKind::IsNotEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_greater_than(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('>') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                return Some(TokenKind::ShiftRightEqual);
            }
            self.pos += 2;
            return Some(TokenKind::ShiftRight);
        }
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::IsGreaterOrEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_equals(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                return Some(TokenKind::IsIdentical);
            }
            self.pos += 2;
            return Some(TokenKind::IsEqual);
        }
        if self.char_at(1) == Some('>') {
            self.pos += 2;
            return Some(TokenKind::DoubleArrow);
        }
        self.pos += 1;
        None
    }

    fn scan_exclamation(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('=') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                return Some(TokenKind::IsNotIdentical);
            }
            self.pos += 2;
            return Some(TokenKind::IsNotEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_plus(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('+') {
            self.pos += 2;
            return Some(TokenKind::Inc);
        }
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::PlusEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_minus(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('>') {
            self.pos += 2;
            return Some(TokenKind::ObjectOperator);
        }
        if self.char_at(1) == Some('-') {
            self.pos += 2;
            return Some(TokenKind::Dec);
        }
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::MinusEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_asterisk(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('*') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                return Some(TokenKind::PowEqual);
            }
            self.pos += 2;
            return Some(TokenKind::Pow);
        }
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::MulEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_percent(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::ModEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_dot(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('.') && self.char_at(2) == Some('.') {
            self.pos += 3;
            return Some(TokenKind::Ellipsis);
        }
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::ConcatEqual);
        }
        if self.char_at(1).map_or(false, is_digit) {
            return Some(self.scan_number());
        }
        self.pos += 1;
        None
    }

    fn scan_ampersand(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('&') {
            self.pos += 2;
            return Some(TokenKind::BooleanAnd);
        }
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::AndEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_bar(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('|') {
            self.pos += 2;
            return Some(TokenKind::BooleanOr);
        }
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::OrEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_caret(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('=') {
            self.pos += 2;
            return Some(TokenKind::XorEqual);
        }
        self.pos += 1;
        None
    }

    fn scan_question(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some('>') {
            self.pos += 2;
            self.state = State::InlineHtml;
            return Some(TokenKind::CloseTag);
        }
        if self.char_at(1) == Some('-') && self.char_at(2) == Some('>') {
            self.pos += 3;
            return Some(TokenKind::NullsafeObjectOperator);
        }
        if self.char_at(1) == Some('?') {
            if self.char_at(2) == Some('=') {
                self.pos += 3;
                return Some(TokenKind::CoalesceEqual);
            }
            self.pos += 2;
            return Some(TokenKind::Coalesce);
        }
        self.pos += 1;
        None
    }

    fn scan_colon(&mut self) -> Option<TokenKind> {
        if self.char_at(1) == Some(':') {
            self.pos += 2;
            return Some(TokenKind::DoubleColon);
        }
        self.pos += 1;
        None
    }

    // ========================================================================
    // Comments
    // ========================================================================

    fn scan_line_comment(&mut self) -> TokenKind {
        self.pos += 2; // skip //
        self.scan_rest_of_line_comment()
    }

    /// Consume up to the end of line or a `?>` close tag (exclusive).
    fn scan_rest_of_line_comment(&mut self) -> TokenKind {
        while !self.is_eof() {
            let ch = self.text[self.pos];
            if is_line_break(ch) {
                break;
            }
            if ch == '?' && self.char_at(1) == Some('>') {
                break;
            }
            self.pos += 1;
        }
        TokenKind::Comment
    }

    fn scan_block_comment(&mut self, start: usize) -> TokenKind {
        let is_doc = self.char_at(2) == Some('*') && self.char_at(3) != Some('/');
        self.pos += 2; // skip /*
        loop {
            if self.is_eof() {
                self.add_error(start, &messages::UNTERMINATED_COMMENT, &[]);
                break;
            }
            if self.text[self.pos] == '*' && self.char_at(1) == Some('/') {
                self.pos += 2;
                break;
            }
            self.pos += 1;
        }
        if is_doc {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        }
    }

    // ========================================================================
    // Literals
    // ========================================================================

    /// Scan a quoted string. The token keeps the raw source text including
    /// the quotes; no escape processing or interpolation splitting happens
    /// here - declaration extraction wants the literal initializer text.
    fn scan_string(&mut self, quote: char, start: usize) -> TokenKind {
        self.pos += 1; // opening quote
        loop {
            match self.current_char() {
                None => {
                    self.add_error(start, &messages::UNTERMINATED_STRING_LITERAL, &[]);
                    break;
                }
                Some('\\') => {
                    self.pos += 1;
                    if !self.is_eof() {
                        self.pos += 1;
                    }
                }
                Some(c) if c == quote => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.pos += 1,
            }
        }
        TokenKind::StringLiteral
    }

    /// Scan a heredoc or nowdoc as one raw string token, `<<<` and closing
    /// label included.
    fn scan_heredoc(&mut self, start: usize) -> TokenKind {
        self.pos += 3; // <<<
        while matches!(self.current_char(), Some(' ') | Some('\t')) {
            self.pos += 1;
        }
        let quote = match self.current_char() {
            Some(q @ ('\'' | '"')) => {
                self.pos += 1;
                Some(q)
            }
            _ => None,
        };
        let label_start = self.pos;
        while !self.is_eof() && is_label_part(self.text[self.pos]) {
            self.pos += 1;
        }
        let label = self.chars_to_string(label_start, self.pos);
        if label.is_empty() {
            self.add_error(start, &messages::UNEXPECTED_END_OF_TEXT, &[]);
            return TokenKind::StringLiteral;
        }
        if let Some(q) = quote {
            if self.current_char() == Some(q) {
                self.pos += 1;
            }
        }
        // Rest of the opening line.
        while !self.is_eof() && !is_line_break(self.text[self.pos]) {
            self.pos += 1;
        }
        loop {
            if self.is_eof() {
                self.add_error(start, &messages::UNTERMINATED_HEREDOC, &[&label]);
                break;
            }
            self.consume_line_break();
            // The closing label may be indented (PHP 7.3 flexible syntax).
            let mut p = self.pos;
            while matches!(self.text.get(p), Some(' ') | Some('\t')) {
                p += 1;
            }
            if self.label_matches_at(p, &label) {
                self.pos = p + label.chars().count();
                break;
            }
            while !self.is_eof() && !is_line_break(self.text[self.pos]) {
                self.pos += 1;
            }
        }
        TokenKind::StringLiteral
    }

    /// Whether the closing heredoc label sits at position `p`.
    fn label_matches_at(&self, p: usize, label: &str) -> bool {
        for (i, expected) in label.chars().enumerate() {
            if self.text.get(p + i) != Some(&expected) {
                return false;
            }
        }
        match self.text.get(p + label.chars().count()) {
            None => true,
            Some(&c) => !is_label_part(c),
        }
    }

    fn consume_line_break(&mut self) {
        if self.current_char() == Some('\r') {
            self.pos += 1;
        }
        if self.current_char() == Some('\n') {
            self.pos += 1;
        }
    }

    fn scan_number(&mut self) -> TokenKind {
        if self.text[self.pos] == '0' {
            match self.char_at(1) {
                Some('x') | Some('X') => {
                    self.pos += 2;
                    self.scan_digits_with(is_hex_digit);
                    return TokenKind::IntegerLiteral;
                }
                Some('b') | Some('B') => {
                    self.pos += 2;
                    self.scan_digits_with(|c| c == '0' || c == '1');
                    return TokenKind::IntegerLiteral;
                }
                Some('o') | Some('O') => {
                    self.pos += 2;
                    self.scan_digits_with(is_octal_digit);
                    return TokenKind::IntegerLiteral;
                }
                _ => {}
            }
        }

        let mut float = false;
        self.scan_digits_with(is_digit);

        if self.current_char() == Some('.') && self.char_at(1).map_or(false, is_digit) {
            float = true;
            self.pos += 1;
            self.scan_digits_with(is_digit);
        } else if self.current_char() == Some('.')
            && !matches!(self.char_at(1), Some('.') | Some('='))
        {
            // Trailing-dot floats like `1.`, but `1..` and `1.=` leave the
            // dot to the operator scanner.
            float = true;
            self.pos += 1;
        }

        if let Some('e') | Some('E') = self.current_char() {
            let mut lookahead = 1;
            if matches!(self.char_at(1), Some('+') | Some('-')) {
                lookahead = 2;
            }
            if self.char_at(lookahead).map_or(false, is_digit) {
                float = true;
                self.pos += lookahead;
                self.scan_digits_with(is_digit);
            }
        }

        if float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        }
    }

    /// Consume digits matching `accept`, allowing `_` separators.
    fn scan_digits_with(&mut self, accept: impl Fn(char) -> bool) {
        while !self.is_eof() {
            let ch = self.text[self.pos];
            if ch == '_' || accept(ch) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }
}
