//! phpcons_signature: parser for the console signature mini-language.
//!
//! A signature string packs a command's name, arguments, and options into
//! one line:
//!
//! ```text
//! user:create {name} {email?} {--force} {--role=user}
//! ```
//!
//! The leading word up to the first whitespace or `{` is the command name.
//! Each `{...}` block declares an argument, or an option when prefixed with
//! `--`. A ` : ` inside a block separates the syntax from a free-text
//! description.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

lazy_static! {
    /// One `{...}` block, inner whitespace trimmed by the capture.
    static ref BLOCK: Regex = Regex::new(r"\{\s*([^{}]*?)\s*\}").unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature is empty")]
    Empty,
    #[error("unable to determine command name from signature `{0}`")]
    MissingName(String),
}

/// An argument declared by a signature block without a `--` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputArgument {
    pub name: String,
    pub required: bool,
    pub default: Option<String>,
    pub description: Option<String>,
}

/// How an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueMode {
    /// A bare flag; `{--force}`.
    None,
    /// A value must accompany the option; `{--role=}`.
    Required,
    /// A value may accompany the option and a default fills in; `{--role=user}`.
    Optional,
}

/// An option declared by a `{--...}` signature block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputOption {
    pub name: String,
    pub value: ValueMode,
    pub default: Option<String>,
    pub description: Option<String>,
}

/// A fully parsed signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub name: String,
    pub arguments: Vec<InputArgument>,
    pub options: Vec<InputOption>,
}

impl Signature {
    /// Parse a signature string.
    pub fn parse(signature: &str) -> Result<Signature, SignatureError> {
        let trimmed = signature.trim();
        if trimmed.is_empty() {
            return Err(SignatureError::Empty);
        }
        let name = Self::command_name(trimmed);
        if name.is_empty() {
            return Err(SignatureError::MissingName(trimmed.to_string()));
        }

        let mut arguments = Vec::new();
        let mut options = Vec::new();
        for capture in BLOCK.captures_iter(trimmed) {
            let block = &capture[1];
            if block.is_empty() {
                continue;
            }
            if let Some(option) = block.strip_prefix("--") {
                options.push(Self::parse_option(option));
            } else {
                arguments.push(Self::parse_argument(block));
            }
        }

        Ok(Signature {
            name: name.to_string(),
            arguments,
            options,
        })
    }

    /// The leading token of a signature, up to the first whitespace or `{`.
    pub fn command_name(signature: &str) -> &str {
        let trimmed = signature.trim_start();
        let end = trimmed
            .find(|c: char| c.is_whitespace() || c == '{')
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    }

    fn parse_argument(block: &str) -> InputArgument {
        let (syntax, description) = split_description(block);
        if let Some(name) = syntax.strip_suffix('?') {
            return InputArgument {
                name: name.to_string(),
                required: false,
                default: None,
                description,
            };
        }
        if let Some((name, default)) = syntax.split_once('=') {
            return InputArgument {
                name: name.to_string(),
                required: false,
                default: if default.is_empty() {
                    None
                } else {
                    Some(default.to_string())
                },
                description,
            };
        }
        InputArgument {
            name: syntax.to_string(),
            required: true,
            default: None,
            description,
        }
    }

    fn parse_option(block: &str) -> InputOption {
        let (syntax, description) = split_description(block);
        match syntax.split_once('=') {
            Some((name, "")) => InputOption {
                name: name.to_string(),
                value: ValueMode::Required,
                default: None,
                description,
            },
            Some((name, default)) => InputOption {
                name: name.to_string(),
                value: ValueMode::Optional,
                default: Some(default.to_string()),
                description,
            },
            None => InputOption {
                name: syntax.to_string(),
                value: ValueMode::None,
                default: None,
                description,
            },
        }
    }
}

/// Split a block at the first ` : ` into syntax and description.
fn split_description(block: &str) -> (&str, Option<String>) {
    match block.split_once(" : ") {
        Some((syntax, description)) => (syntax.trim(), Some(description.trim().to_string())),
        None => (block, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_signature() {
        let signature =
            Signature::parse("user:create {name} {email?} {--force} {--role=user}").unwrap();
        assert_eq!(signature.name, "user:create");
        assert_eq!(
            signature.arguments,
            vec![
                InputArgument {
                    name: "name".into(),
                    required: true,
                    default: None,
                    description: None,
                },
                InputArgument {
                    name: "email".into(),
                    required: false,
                    default: None,
                    description: None,
                },
            ]
        );
        assert_eq!(
            signature.options,
            vec![
                InputOption {
                    name: "force".into(),
                    value: ValueMode::None,
                    default: None,
                    description: None,
                },
                InputOption {
                    name: "role".into(),
                    value: ValueMode::Optional,
                    default: Some("user".into()),
                    description: None,
                },
            ]
        );
    }

    #[test]
    fn test_name_only() {
        let signature = Signature::parse("migrate").unwrap();
        assert_eq!(signature.name, "migrate");
        assert!(signature.arguments.is_empty());
        assert!(signature.options.is_empty());
    }

    #[test]
    fn test_name_stops_at_brace() {
        assert_eq!(Signature::command_name("greet{who}"), "greet");
        let signature = Signature::parse("greet{who}").unwrap();
        assert_eq!(signature.arguments[0].name, "who");
    }

    #[test]
    fn test_argument_with_default_is_optional() {
        let signature = Signature::parse("serve {port=8080}").unwrap();
        let argument = &signature.arguments[0];
        assert!(!argument.required);
        assert_eq!(argument.default.as_deref(), Some("8080"));
    }

    #[test]
    fn test_argument_with_empty_default() {
        let signature = Signature::parse("serve {port=}").unwrap();
        let argument = &signature.arguments[0];
        assert!(!argument.required);
        assert_eq!(argument.default, None);
    }

    #[test]
    fn test_descriptions() {
        let signature =
            Signature::parse("deploy {target : Where to deploy} {--dry-run : Skip side effects}")
                .unwrap();
        assert_eq!(
            signature.arguments[0].description.as_deref(),
            Some("Where to deploy")
        );
        assert_eq!(
            signature.options[0].description.as_deref(),
            Some("Skip side effects")
        );
        assert_eq!(signature.options[0].name, "dry-run");
    }

    #[test]
    fn test_option_with_required_value() {
        let signature = Signature::parse("publish {--tag=}").unwrap();
        assert_eq!(signature.options[0].value, ValueMode::Required);
        assert_eq!(signature.options[0].default, None);
    }

    #[test]
    fn test_empty_signature_is_an_error() {
        assert_eq!(Signature::parse("   "), Err(SignatureError::Empty));
    }

    #[test]
    fn test_signature_with_no_name() {
        assert!(matches!(
            Signature::parse("{arg}"),
            Err(SignatureError::MissingName(_))
        ));
    }

    #[test]
    fn test_whitespace_inside_blocks_is_trimmed() {
        let signature = Signature::parse("cache:clear { store? } { --quiet }").unwrap();
        assert_eq!(signature.arguments[0].name, "store");
        assert_eq!(signature.options[0].name, "quiet");
    }
}
