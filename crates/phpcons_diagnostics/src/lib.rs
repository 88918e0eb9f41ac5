//! phpcons_diagnostics: Diagnostic messages and reporting infrastructure.
//!
//! The lexer never fails hard on malformed input; it records diagnostics and
//! keeps scanning so that directory discovery can treat a broken file as
//! "no declaration found" instead of aborting. Diagnostics carry structured
//! information about what the scanner stumbled over and where.

use phpcons_core::text::TextSpan;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g. 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic with a span.
    pub fn with_span(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: Some(span),
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Attach a file path to this diagnostic.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(
            f,
            "{} PC{}: {}",
            self.category, self.code, self.message_text
        )
    }
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template.
fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while scanning.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

}

// ============================================================================
// Diagnostic messages emitted by the scanner
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage {
                code: $code,
                category: DiagnosticCategory::Error,
                message: $msg,
            }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage {
                code: $code,
                category: DiagnosticCategory::Warning,
                message: $msg,
            }
        };
    }

    pub const INVALID_CHARACTER: DiagnosticMessage =
        diag!(1001, Error, "Invalid character.");
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage =
        diag!(1002, Error, "Unterminated string literal.");
    pub const UNTERMINATED_COMMENT: DiagnosticMessage =
        diag!(1003, Error, "Unterminated comment.");
    pub const UNTERMINATED_HEREDOC: DiagnosticMessage =
        diag!(1004, Error, "Unterminated heredoc: closing label '{0}' not found.");
    pub const UNEXPECTED_END_OF_TEXT: DiagnosticMessage =
        diag!(1005, Error, "Unexpected end of text.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message(
            "Unterminated heredoc: closing label '{0}' not found.",
            &["EOT"],
        );
        assert_eq!(msg, "Unterminated heredoc: closing label 'EOT' not found.");
    }

    #[test]
    fn test_format_message_no_args() {
        let msg = format_message("Invalid character.", &[]);
        assert_eq!(msg, "Invalid character.");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::with_span(
            TextSpan::new(12, 1),
            &messages::INVALID_CHARACTER,
            &[],
        )
        .in_file("App/FooCommand.php");
        assert_eq!(
            diag.to_string(),
            "App/FooCommand.php(12): error PC1001: Invalid character."
        );
    }

    #[test]
    fn test_collection_errors() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::with_span(
            TextSpan::new(20, 1),
            &messages::INVALID_CHARACTER,
            &[],
        ));
        collection.add(Diagnostic::with_span(
            TextSpan::new(3, 1),
            &messages::UNTERMINATED_STRING_LITERAL,
            &[],
        ));
        assert_eq!(collection.len(), 2);
        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 2);
        // Insertion order is preserved.
        assert_eq!(collection.diagnostics()[0].span.unwrap().start, 20);
    }
}
