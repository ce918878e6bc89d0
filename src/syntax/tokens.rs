//! Token types and lookup tables
//!
//! This module defines the closed set of token types the lexer can
//! produce, the keyword and operator tables used while scanning, and the
//! category and color-role groupings consumed by the renderers.

use std::fmt;

/// Token types produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Keywords - control flow
    KeywordIf,
    KeywordElse,
    KeywordFor,
    KeywordWhile,
    KeywordLoop,
    KeywordBreak,
    KeywordContinue,
    KeywordReturn,
    KeywordMatch,

    // Keywords - declarations
    KeywordFn,
    KeywordLet,
    KeywordConst,
    KeywordVar,
    KeywordStruct,
    KeywordEnum,
    KeywordTrait,
    KeywordImpl,
    KeywordType,

    // Keywords - modifiers
    KeywordPub,
    KeywordPriv,
    KeywordMut,
    KeywordStatic,
    KeywordAsync,
    KeywordAwait,

    // Keywords - actors, modules and the rest
    KeywordActor,
    KeywordSpawn,
    KeywordSend,
    KeywordReceive,
    KeywordUse,
    KeywordMod,
    KeywordAs,
    KeywordIn,
    KeywordWhere,
    KeywordSelf,
    KeywordSuper,
    KeywordCrate,
    KeywordUnsafe,

    // Literals
    String,
    StringSingle,
    StringTemplate,
    StringRaw,
    NumberInteger,
    NumberFloat,
    NumberHex,
    NumberBinary,
    NumberOctal,
    BooleanTrue,
    BooleanFalse,
    Null,

    // Identifiers
    Identifier,
    FunctionName,
    TypeName,
    Variable,
    Parameter,
    Property,
    Constant,

    // Comments
    CommentLine,
    CommentBlock,
    CommentDoc,

    // Operators
    OperatorArithmetic,
    OperatorComparison,
    OperatorLogical,
    OperatorAssignment,
    OperatorBitwise,
    OperatorRange,
    OperatorArrow,

    // Punctuation
    ParenOpen,
    ParenClose,
    BracketOpen,
    BracketClose,
    BraceOpen,
    BraceClose,
    Semicolon,
    Comma,
    Dot,
    Colon,
    DoubleColon,

    // Structural
    Whitespace,
    Newline,
    Eof,
    Error,
}

/// Coarse grouping of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Literal,
    Identifier,
    Comment,
    Operator,
    Punctuation,
    Structural,
}

/// Semantic color role a token is painted with
///
/// Two roles fall back when a theme leaves the optional `constant` color
/// unset: `LiteralConstant` (booleans, null) falls back to the keyword
/// color and `NamedConstant` falls back to the variable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Keyword,
    String,
    Number,
    LiteralConstant,
    Comment,
    Function,
    Type,
    Variable,
    NamedConstant,
    Operator,
    Punctuation,
    Error,
}

/// Literal constructs that can run off the end of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    TemplateString,
    RawString,
    BlockComment,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiteralKind::String => "string",
            LiteralKind::TemplateString => "template string",
            LiteralKind::RawString => "raw string",
            LiteralKind::BlockComment => "block comment",
        };
        f.write_str(name)
    }
}

impl TokenType {
    /// Every token type, in declaration order
    pub const ALL: [TokenType; 81] = [
        TokenType::KeywordIf,
        TokenType::KeywordElse,
        TokenType::KeywordFor,
        TokenType::KeywordWhile,
        TokenType::KeywordLoop,
        TokenType::KeywordBreak,
        TokenType::KeywordContinue,
        TokenType::KeywordReturn,
        TokenType::KeywordMatch,
        TokenType::KeywordFn,
        TokenType::KeywordLet,
        TokenType::KeywordConst,
        TokenType::KeywordVar,
        TokenType::KeywordStruct,
        TokenType::KeywordEnum,
        TokenType::KeywordTrait,
        TokenType::KeywordImpl,
        TokenType::KeywordType,
        TokenType::KeywordPub,
        TokenType::KeywordPriv,
        TokenType::KeywordMut,
        TokenType::KeywordStatic,
        TokenType::KeywordAsync,
        TokenType::KeywordAwait,
        TokenType::KeywordActor,
        TokenType::KeywordSpawn,
        TokenType::KeywordSend,
        TokenType::KeywordReceive,
        TokenType::KeywordUse,
        TokenType::KeywordMod,
        TokenType::KeywordAs,
        TokenType::KeywordIn,
        TokenType::KeywordWhere,
        TokenType::KeywordSelf,
        TokenType::KeywordSuper,
        TokenType::KeywordCrate,
        TokenType::KeywordUnsafe,
        TokenType::String,
        TokenType::StringSingle,
        TokenType::StringTemplate,
        TokenType::StringRaw,
        TokenType::NumberInteger,
        TokenType::NumberFloat,
        TokenType::NumberHex,
        TokenType::NumberBinary,
        TokenType::NumberOctal,
        TokenType::BooleanTrue,
        TokenType::BooleanFalse,
        TokenType::Null,
        TokenType::Identifier,
        TokenType::FunctionName,
        TokenType::TypeName,
        TokenType::Variable,
        TokenType::Parameter,
        TokenType::Property,
        TokenType::Constant,
        TokenType::CommentLine,
        TokenType::CommentBlock,
        TokenType::CommentDoc,
        TokenType::OperatorArithmetic,
        TokenType::OperatorComparison,
        TokenType::OperatorLogical,
        TokenType::OperatorAssignment,
        TokenType::OperatorBitwise,
        TokenType::OperatorRange,
        TokenType::OperatorArrow,
        TokenType::ParenOpen,
        TokenType::ParenClose,
        TokenType::BracketOpen,
        TokenType::BracketClose,
        TokenType::BraceOpen,
        TokenType::BraceClose,
        TokenType::Semicolon,
        TokenType::Comma,
        TokenType::Dot,
        TokenType::Colon,
        TokenType::DoubleColon,
        TokenType::Whitespace,
        TokenType::Newline,
        TokenType::Eof,
        TokenType::Error,
    ];

    /// Dotted scope name, e.g. `keyword.control.if`
    ///
    /// Rendered markup derives its CSS classes from these names, so they
    /// must stay stable.
    pub fn scope(&self) -> &'static str {
        match self {
            TokenType::KeywordIf => "keyword.control.if",
            TokenType::KeywordElse => "keyword.control.else",
            TokenType::KeywordFor => "keyword.control.for",
            TokenType::KeywordWhile => "keyword.control.while",
            TokenType::KeywordLoop => "keyword.control.loop",
            TokenType::KeywordBreak => "keyword.control.break",
            TokenType::KeywordContinue => "keyword.control.continue",
            TokenType::KeywordReturn => "keyword.control.return",
            TokenType::KeywordMatch => "keyword.control.match",
            TokenType::KeywordFn => "keyword.declaration.function",
            TokenType::KeywordLet => "keyword.declaration.let",
            TokenType::KeywordConst => "keyword.declaration.const",
            TokenType::KeywordVar => "keyword.declaration.var",
            TokenType::KeywordStruct => "keyword.declaration.struct",
            TokenType::KeywordEnum => "keyword.declaration.enum",
            TokenType::KeywordTrait => "keyword.declaration.trait",
            TokenType::KeywordImpl => "keyword.declaration.impl",
            TokenType::KeywordType => "keyword.declaration.type",
            TokenType::KeywordPub => "keyword.modifier.pub",
            TokenType::KeywordPriv => "keyword.modifier.priv",
            TokenType::KeywordMut => "keyword.modifier.mut",
            TokenType::KeywordStatic => "keyword.modifier.static",
            TokenType::KeywordAsync => "keyword.modifier.async",
            TokenType::KeywordAwait => "keyword.modifier.await",
            TokenType::KeywordActor => "keyword.special.actor",
            TokenType::KeywordSpawn => "keyword.special.spawn",
            TokenType::KeywordSend => "keyword.special.send",
            TokenType::KeywordReceive => "keyword.special.receive",
            TokenType::KeywordUse => "keyword.special.use",
            TokenType::KeywordMod => "keyword.special.mod",
            TokenType::KeywordAs => "keyword.special.as",
            TokenType::KeywordIn => "keyword.special.in",
            TokenType::KeywordWhere => "keyword.special.where",
            TokenType::KeywordSelf => "keyword.special.self",
            TokenType::KeywordSuper => "keyword.special.super",
            TokenType::KeywordCrate => "keyword.special.crate",
            TokenType::KeywordUnsafe => "keyword.special.unsafe",
            TokenType::String => "string.quoted.double",
            TokenType::StringSingle => "string.quoted.single",
            TokenType::StringTemplate => "string.template",
            TokenType::StringRaw => "string.raw",
            TokenType::NumberInteger => "constant.numeric.integer",
            TokenType::NumberFloat => "constant.numeric.float",
            TokenType::NumberHex => "constant.numeric.hex",
            TokenType::NumberBinary => "constant.numeric.binary",
            TokenType::NumberOctal => "constant.numeric.octal",
            TokenType::BooleanTrue => "constant.boolean.true",
            TokenType::BooleanFalse => "constant.boolean.false",
            TokenType::Null => "constant.null",
            TokenType::Identifier => "identifier",
            TokenType::FunctionName => "entity.name.function",
            TokenType::TypeName => "entity.name.type",
            TokenType::Variable => "variable",
            TokenType::Parameter => "variable.parameter",
            TokenType::Property => "variable.property",
            TokenType::Constant => "variable.constant",
            TokenType::CommentLine => "comment.line",
            TokenType::CommentBlock => "comment.block",
            TokenType::CommentDoc => "comment.documentation",
            TokenType::OperatorArithmetic => "keyword.operator.arithmetic",
            TokenType::OperatorComparison => "keyword.operator.comparison",
            TokenType::OperatorLogical => "keyword.operator.logical",
            TokenType::OperatorAssignment => "keyword.operator.assignment",
            TokenType::OperatorBitwise => "keyword.operator.bitwise",
            TokenType::OperatorRange => "keyword.operator.range",
            TokenType::OperatorArrow => "keyword.operator.arrow",
            TokenType::ParenOpen => "punctuation.paren.open",
            TokenType::ParenClose => "punctuation.paren.close",
            TokenType::BracketOpen => "punctuation.bracket.open",
            TokenType::BracketClose => "punctuation.bracket.close",
            TokenType::BraceOpen => "punctuation.brace.open",
            TokenType::BraceClose => "punctuation.brace.close",
            TokenType::Semicolon => "punctuation.terminator.semicolon",
            TokenType::Comma => "punctuation.separator.comma",
            TokenType::Dot => "punctuation.accessor.dot",
            TokenType::Colon => "punctuation.separator.colon",
            TokenType::DoubleColon => "punctuation.accessor.double-colon",
            TokenType::Whitespace => "whitespace",
            TokenType::Newline => "newline",
            TokenType::Eof => "eof",
            TokenType::Error => "error",
        }
    }

    /// CSS class for rendered markup (scope with `.` replaced by `-`)
    pub fn css_class(&self) -> String {
        self.scope().replace('.', "-")
    }

    /// Look up a token type by its scope name
    pub fn from_scope(scope: &str) -> Option<Self> {
        TokenType::ALL.iter().copied().find(|t| t.scope() == scope)
    }

    /// Coarse category of this token type
    pub fn category(&self) -> Category {
        match self {
            TokenType::KeywordIf
            | TokenType::KeywordElse
            | TokenType::KeywordFor
            | TokenType::KeywordWhile
            | TokenType::KeywordLoop
            | TokenType::KeywordBreak
            | TokenType::KeywordContinue
            | TokenType::KeywordReturn
            | TokenType::KeywordMatch
            | TokenType::KeywordFn
            | TokenType::KeywordLet
            | TokenType::KeywordConst
            | TokenType::KeywordVar
            | TokenType::KeywordStruct
            | TokenType::KeywordEnum
            | TokenType::KeywordTrait
            | TokenType::KeywordImpl
            | TokenType::KeywordType
            | TokenType::KeywordPub
            | TokenType::KeywordPriv
            | TokenType::KeywordMut
            | TokenType::KeywordStatic
            | TokenType::KeywordAsync
            | TokenType::KeywordAwait
            | TokenType::KeywordActor
            | TokenType::KeywordSpawn
            | TokenType::KeywordSend
            | TokenType::KeywordReceive
            | TokenType::KeywordUse
            | TokenType::KeywordMod
            | TokenType::KeywordAs
            | TokenType::KeywordIn
            | TokenType::KeywordWhere
            | TokenType::KeywordSelf
            | TokenType::KeywordSuper
            | TokenType::KeywordCrate
            | TokenType::KeywordUnsafe => Category::Keyword,

            TokenType::String
            | TokenType::StringSingle
            | TokenType::StringTemplate
            | TokenType::StringRaw
            | TokenType::NumberInteger
            | TokenType::NumberFloat
            | TokenType::NumberHex
            | TokenType::NumberBinary
            | TokenType::NumberOctal
            | TokenType::BooleanTrue
            | TokenType::BooleanFalse
            | TokenType::Null => Category::Literal,

            TokenType::Identifier
            | TokenType::FunctionName
            | TokenType::TypeName
            | TokenType::Variable
            | TokenType::Parameter
            | TokenType::Property
            | TokenType::Constant => Category::Identifier,

            TokenType::CommentLine | TokenType::CommentBlock | TokenType::CommentDoc => {
                Category::Comment
            }

            TokenType::OperatorArithmetic
            | TokenType::OperatorComparison
            | TokenType::OperatorLogical
            | TokenType::OperatorAssignment
            | TokenType::OperatorBitwise
            | TokenType::OperatorRange
            | TokenType::OperatorArrow => Category::Operator,

            TokenType::ParenOpen
            | TokenType::ParenClose
            | TokenType::BracketOpen
            | TokenType::BracketClose
            | TokenType::BraceOpen
            | TokenType::BraceClose
            | TokenType::Semicolon
            | TokenType::Comma
            | TokenType::Dot
            | TokenType::Colon
            | TokenType::DoubleColon => Category::Punctuation,

            TokenType::Whitespace | TokenType::Newline | TokenType::Eof | TokenType::Error => {
                Category::Structural
            }
        }
    }

    /// Color role used to paint this token, if any
    ///
    /// Plain identifiers and structural tokens other than `Error` are not
    /// painted by the document renderer.
    pub fn color_role(&self) -> Option<ColorRole> {
        match self {
            TokenType::String
            | TokenType::StringSingle
            | TokenType::StringTemplate
            | TokenType::StringRaw => Some(ColorRole::String),

            TokenType::NumberInteger
            | TokenType::NumberFloat
            | TokenType::NumberHex
            | TokenType::NumberBinary
            | TokenType::NumberOctal => Some(ColorRole::Number),

            TokenType::BooleanTrue | TokenType::BooleanFalse | TokenType::Null => {
                Some(ColorRole::LiteralConstant)
            }

            TokenType::FunctionName => Some(ColorRole::Function),
            TokenType::TypeName => Some(ColorRole::Type),
            TokenType::Variable | TokenType::Parameter | TokenType::Property => {
                Some(ColorRole::Variable)
            }
            TokenType::Constant => Some(ColorRole::NamedConstant),
            TokenType::Identifier => None,

            TokenType::Error => Some(ColorRole::Error),
            TokenType::Whitespace | TokenType::Newline | TokenType::Eof => None,

            other => match other.category() {
                Category::Keyword => Some(ColorRole::Keyword),
                Category::Comment => Some(ColorRole::Comment),
                Category::Operator => Some(ColorRole::Operator),
                Category::Punctuation => Some(ColorRole::Punctuation),
                Category::Literal | Category::Identifier | Category::Structural => None,
            },
        }
    }

    /// Whether this is a language keyword (operators are not keywords)
    pub fn is_keyword(&self) -> bool {
        self.category() == Category::Keyword
    }

    /// Whether this is a comment variant
    pub fn is_comment(&self) -> bool {
        self.category() == Category::Comment
    }

    /// Whether this is a string literal variant
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            TokenType::String
                | TokenType::StringSingle
                | TokenType::StringTemplate
                | TokenType::StringRaw
        )
    }

    /// Whether this is a numeric literal variant
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            TokenType::NumberInteger
                | TokenType::NumberFloat
                | TokenType::NumberHex
                | TokenType::NumberBinary
                | TokenType::NumberOctal
        )
    }

    /// Whether this is an operator variant
    pub fn is_operator(&self) -> bool {
        self.category() == Category::Operator
    }

    /// Declaration keywords rendered bold when a theme enables bold
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            TokenType::KeywordFn | TokenType::KeywordLet | TokenType::KeywordConst | TokenType::KeywordVar
        )
    }

    /// Whitespace, newline and EOF: layout-only tokens
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenType::Whitespace | TokenType::Newline | TokenType::Eof)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scope())
    }
}

/// A classified, positioned piece of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token type
    pub kind: TokenType,
    /// Exact source text covered by the token
    pub text: String,
    /// Byte offset of the first byte (inclusive)
    pub start: usize,
    /// Byte offset past the last byte (exclusive)
    pub end: usize,
    /// 1-based line of the first character
    pub line: usize,
    /// 1-based column (in characters) of the first character
    pub column: usize,
}

impl Token {
    /// Get the length of this token in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if token is empty (only the EOF sentinel is)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Keyword text to token type, grouped as control flow, declarations,
/// modifiers, the rest, then boolean and null literals
pub const KEYWORDS: &[(&str, TokenType)] = &[
    ("if", TokenType::KeywordIf),
    ("else", TokenType::KeywordElse),
    ("for", TokenType::KeywordFor),
    ("while", TokenType::KeywordWhile),
    ("loop", TokenType::KeywordLoop),
    ("break", TokenType::KeywordBreak),
    ("continue", TokenType::KeywordContinue),
    ("return", TokenType::KeywordReturn),
    ("match", TokenType::KeywordMatch),
    ("fn", TokenType::KeywordFn),
    ("let", TokenType::KeywordLet),
    ("const", TokenType::KeywordConst),
    ("var", TokenType::KeywordVar),
    ("struct", TokenType::KeywordStruct),
    ("enum", TokenType::KeywordEnum),
    ("trait", TokenType::KeywordTrait),
    ("impl", TokenType::KeywordImpl),
    ("type", TokenType::KeywordType),
    ("pub", TokenType::KeywordPub),
    ("priv", TokenType::KeywordPriv),
    ("mut", TokenType::KeywordMut),
    ("static", TokenType::KeywordStatic),
    ("async", TokenType::KeywordAsync),
    ("await", TokenType::KeywordAwait),
    ("actor", TokenType::KeywordActor),
    ("spawn", TokenType::KeywordSpawn),
    ("send", TokenType::KeywordSend),
    ("receive", TokenType::KeywordReceive),
    ("use", TokenType::KeywordUse),
    ("mod", TokenType::KeywordMod),
    ("as", TokenType::KeywordAs),
    ("in", TokenType::KeywordIn),
    ("where", TokenType::KeywordWhere),
    ("self", TokenType::KeywordSelf),
    ("super", TokenType::KeywordSuper),
    ("crate", TokenType::KeywordCrate),
    ("unsafe", TokenType::KeywordUnsafe),
    ("true", TokenType::BooleanTrue),
    ("false", TokenType::BooleanFalse),
    ("null", TokenType::Null),
];

/// Operator text to token type
///
/// Lengths are 1 to 3 characters; the lexer tries the longest first.
pub const OPERATORS: &[(&str, TokenType)] = &[
    ("+", TokenType::OperatorArithmetic),
    ("-", TokenType::OperatorArithmetic),
    ("*", TokenType::OperatorArithmetic),
    ("/", TokenType::OperatorArithmetic),
    ("%", TokenType::OperatorArithmetic),
    ("++", TokenType::OperatorArithmetic),
    ("--", TokenType::OperatorArithmetic),
    ("==", TokenType::OperatorComparison),
    ("!=", TokenType::OperatorComparison),
    ("<", TokenType::OperatorComparison),
    (">", TokenType::OperatorComparison),
    ("<=", TokenType::OperatorComparison),
    (">=", TokenType::OperatorComparison),
    ("&&", TokenType::OperatorLogical),
    ("||", TokenType::OperatorLogical),
    ("!", TokenType::OperatorLogical),
    ("=", TokenType::OperatorAssignment),
    ("+=", TokenType::OperatorAssignment),
    ("-=", TokenType::OperatorAssignment),
    ("*=", TokenType::OperatorAssignment),
    ("/=", TokenType::OperatorAssignment),
    ("%=", TokenType::OperatorAssignment),
    ("&", TokenType::OperatorBitwise),
    ("|", TokenType::OperatorBitwise),
    ("^", TokenType::OperatorBitwise),
    ("~", TokenType::OperatorBitwise),
    ("<<", TokenType::OperatorBitwise),
    (">>", TokenType::OperatorBitwise),
    ("..", TokenType::OperatorRange),
    ("...", TokenType::OperatorRange),
    ("->", TokenType::OperatorArrow),
    ("=>", TokenType::OperatorArrow),
];

/// Exact-match keyword lookup
pub fn keyword_type(word: &str) -> Option<TokenType> {
    let kind = match word {
        "if" => TokenType::KeywordIf,
        "else" => TokenType::KeywordElse,
        "for" => TokenType::KeywordFor,
        "while" => TokenType::KeywordWhile,
        "loop" => TokenType::KeywordLoop,
        "break" => TokenType::KeywordBreak,
        "continue" => TokenType::KeywordContinue,
        "return" => TokenType::KeywordReturn,
        "match" => TokenType::KeywordMatch,
        "fn" => TokenType::KeywordFn,
        "let" => TokenType::KeywordLet,
        "const" => TokenType::KeywordConst,
        "var" => TokenType::KeywordVar,
        "struct" => TokenType::KeywordStruct,
        "enum" => TokenType::KeywordEnum,
        "trait" => TokenType::KeywordTrait,
        "impl" => TokenType::KeywordImpl,
        "type" => TokenType::KeywordType,
        "pub" => TokenType::KeywordPub,
        "priv" => TokenType::KeywordPriv,
        "mut" => TokenType::KeywordMut,
        "static" => TokenType::KeywordStatic,
        "async" => TokenType::KeywordAsync,
        "await" => TokenType::KeywordAwait,
        "actor" => TokenType::KeywordActor,
        "spawn" => TokenType::KeywordSpawn,
        "send" => TokenType::KeywordSend,
        "receive" => TokenType::KeywordReceive,
        "use" => TokenType::KeywordUse,
        "mod" => TokenType::KeywordMod,
        "as" => TokenType::KeywordAs,
        "in" => TokenType::KeywordIn,
        "where" => TokenType::KeywordWhere,
        "self" => TokenType::KeywordSelf,
        "super" => TokenType::KeywordSuper,
        "crate" => TokenType::KeywordCrate,
        "unsafe" => TokenType::KeywordUnsafe,
        "true" => TokenType::BooleanTrue,
        "false" => TokenType::BooleanFalse,
        "null" => TokenType::Null,
        _ => return None,
    };
    Some(kind)
}

/// Exact-match operator lookup
pub fn operator_type(op: &str) -> Option<TokenType> {
    let kind = match op {
        "+" | "-" | "*" | "/" | "%" | "++" | "--" => TokenType::OperatorArithmetic,
        "==" | "!=" | "<" | ">" | "<=" | ">=" => TokenType::OperatorComparison,
        "&&" | "||" | "!" => TokenType::OperatorLogical,
        "=" | "+=" | "-=" | "*=" | "/=" | "%=" => TokenType::OperatorAssignment,
        "&" | "|" | "^" | "~" | "<<" | ">>" => TokenType::OperatorBitwise,
        ".." | "..." => TokenType::OperatorRange,
        "->" | "=>" => TokenType::OperatorArrow,
        _ => return None,
    };
    Some(kind)
}

/// Single-character punctuation lookup (`::` is handled by the lexer)
pub fn punctuation_type(ch: char) -> Option<TokenType> {
    let kind = match ch {
        '(' => TokenType::ParenOpen,
        ')' => TokenType::ParenClose,
        '[' => TokenType::BracketOpen,
        ']' => TokenType::BracketClose,
        '{' => TokenType::BraceOpen,
        '}' => TokenType::BraceClose,
        ';' => TokenType::Semicolon,
        ',' => TokenType::Comma,
        '.' => TokenType::Dot,
        ':' => TokenType::Colon,
        _ => return None,
    };
    Some(kind)
}
