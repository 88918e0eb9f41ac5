//! TokenKind enum - the lexical categories the PHP lexer produces.
//!
//! Mirrors the `T_*` constants `token_get_all` assigns to multi-character
//! tokens. Single-character punctuation carries no kind at all (the token's
//! `kind` field is `None`); it is matched by its literal text instead.

/// The lexical category of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========================================================================
    // Tags and trivia
    // ========================================================================
    /// Text outside any PHP tag, passed through verbatim.
    InlineHtml,
    /// `<?php` or the short `<?` form.
    OpenTag,
    /// `<?=`.
    OpenTagWithEcho,
    /// `?>`.
    CloseTag,
    Whitespace,
    /// `// ...`, `# ...`, or `/* ... */`.
    Comment,
    /// `/** ... */`.
    DocComment,
    /// The `#[` attribute opener.
    Attribute,

    // ========================================================================
    // Names and literals
    // ========================================================================
    /// `$name`, dollar sign included.
    Variable,
    /// A bare label: name, unqualified class reference, or `true`/`false`/`null`.
    Identifier,
    /// The `\` between segments of a qualified name.
    NsSeparator,
    /// Any quoted string form, raw source text with quotes preserved.
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,

    // ========================================================================
    // Multi-character operators
    // ========================================================================
    /// `->`
    ObjectOperator,
    /// `?->`
    NullsafeObjectOperator,
    /// `=>`
    DoubleArrow,
    /// `::`
    DoubleColon,
    /// `...`
    Ellipsis,
    /// `??`
    Coalesce,
    /// `??=`
    CoalesceEqual,
    /// `==`
    IsEqual,
    /// `===`
    IsIdentical,
    /// `!=` or `<>`
    IsNotEqual,
    /// `!==`
    IsNotIdentical,
    /// `<=`
    IsSmallerOrEqual,
    /// `>=`
    IsGreaterOrEqual,
    /// `<=>`
    Spaceship,
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// `**`
    Pow,
    /// `**=`
    PowEqual,
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    MulEqual,
    /// `/=`
    DivEqual,
    /// `%=`
    ModEqual,
    /// `.=`
    ConcatEqual,
    /// `&=`
    AndEqual,
    /// `|=`
    OrEqual,
    /// `^=`
    XorEqual,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `<<=`
    ShiftLeftEqual,
    /// `>>=`
    ShiftRightEqual,
    /// `&&`
    BooleanAnd,
    /// `||`
    BooleanOr,

    // ========================================================================
    // Keywords
    // ========================================================================
    AbstractKeyword,
    AsKeyword,
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    CloneKeyword,
    ConstKeyword,
    ContinueKeyword,
    DeclareKeyword,
    DefaultKeyword,
    DoKeyword,
    EchoKeyword,
    ElseKeyword,
    ElseifKeyword,
    EnumKeyword,
    ExtendsKeyword,
    FinalKeyword,
    FinallyKeyword,
    FnKeyword,
    ForKeyword,
    ForeachKeyword,
    FunctionKeyword,
    GlobalKeyword,
    IfKeyword,
    ImplementsKeyword,
    IncludeKeyword,
    IncludeOnceKeyword,
    InstanceofKeyword,
    InsteadofKeyword,
    InterfaceKeyword,
    ListKeyword,
    /// `and`
    LogicalAndKeyword,
    /// `or`
    LogicalOrKeyword,
    /// `xor`
    LogicalXorKeyword,
    MatchKeyword,
    NamespaceKeyword,
    NewKeyword,
    PrintKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReadonlyKeyword,
    RequireKeyword,
    RequireOnceKeyword,
    ReturnKeyword,
    StaticKeyword,
    SwitchKeyword,
    ThrowKeyword,
    TraitKeyword,
    TryKeyword,
    UseKeyword,
    VarKeyword,
    WhileKeyword,
    YieldKeyword,
}

impl TokenKind {
    /// Map a label to its keyword kind, if it is one. PHP keywords are
    /// case-insensitive, so `CLASS` and `Class` both map to `ClassKeyword`.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        let lower = text.to_ascii_lowercase();
        match lower.as_str() {
            "abstract" => Some(TokenKind::AbstractKeyword),
            "and" => Some(TokenKind::LogicalAndKeyword),
            "as" => Some(TokenKind::AsKeyword),
            "break" => Some(TokenKind::BreakKeyword),
            "case" => Some(TokenKind::CaseKeyword),
            "catch" => Some(TokenKind::CatchKeyword),
            "class" => Some(TokenKind::ClassKeyword),
            "clone" => Some(TokenKind::CloneKeyword),
            "const" => Some(TokenKind::ConstKeyword),
            "continue" => Some(TokenKind::ContinueKeyword),
            "declare" => Some(TokenKind::DeclareKeyword),
            "default" => Some(TokenKind::DefaultKeyword),
            "do" => Some(TokenKind::DoKeyword),
            "echo" => Some(TokenKind::EchoKeyword),
            "else" => Some(TokenKind::ElseKeyword),
            "elseif" => Some(TokenKind::ElseifKeyword),
            "enum" => Some(TokenKind::EnumKeyword),
            "extends" => Some(TokenKind::ExtendsKeyword),
            "final" => Some(TokenKind::FinalKeyword),
            "finally" => Some(TokenKind::FinallyKeyword),
            "fn" => Some(TokenKind::FnKeyword),
            "for" => Some(TokenKind::ForKeyword),
            "foreach" => Some(TokenKind::ForeachKeyword),
            "function" => Some(TokenKind::FunctionKeyword),
            "global" => Some(TokenKind::GlobalKeyword),
            "if" => Some(TokenKind::IfKeyword),
            "implements" => Some(TokenKind::ImplementsKeyword),
            "include" => Some(TokenKind::IncludeKeyword),
            "include_once" => Some(TokenKind::IncludeOnceKeyword),
            "instanceof" => Some(TokenKind::InstanceofKeyword),
            "insteadof" => Some(TokenKind::InsteadofKeyword),
            "interface" => Some(TokenKind::InterfaceKeyword),
            "list" => Some(TokenKind::ListKeyword),
            "match" => Some(TokenKind::MatchKeyword),
            "namespace" => Some(TokenKind::NamespaceKeyword),
            "new" => Some(TokenKind::NewKeyword),
            "or" => Some(TokenKind::LogicalOrKeyword),
            "print" => Some(TokenKind::PrintKeyword),
            "private" => Some(TokenKind::PrivateKeyword),
            "protected" => Some(TokenKind::ProtectedKeyword),
            "public" => Some(TokenKind::PublicKeyword),
            "readonly" => Some(TokenKind::ReadonlyKeyword),
            "require" => Some(TokenKind::RequireKeyword),
            "require_once" => Some(TokenKind::RequireOnceKeyword),
            "return" => Some(TokenKind::ReturnKeyword),
            "static" => Some(TokenKind::StaticKeyword),
            "switch" => Some(TokenKind::SwitchKeyword),
            "throw" => Some(TokenKind::ThrowKeyword),
            "trait" => Some(TokenKind::TraitKeyword),
            "try" => Some(TokenKind::TryKeyword),
            "use" => Some(TokenKind::UseKeyword),
            "var" => Some(TokenKind::VarKeyword),
            "while" => Some(TokenKind::WhileKeyword),
            "xor" => Some(TokenKind::LogicalXorKeyword),
            "yield" => Some(TokenKind::YieldKeyword),
            _ => None,
        }
    }

}
