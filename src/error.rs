//! Error types for ruchy-highlight

use thiserror::Error;

use crate::syntax::LiteralKind;

/// Result type alias for highlighter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Highlighter error types
///
/// Lexer errors are only produced when the lexer is configured to raise;
/// by default they are recovered into `Error` tokens. Theme and input-size
/// errors are always returned.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Lexer error at line {line}, column {column}: Unexpected character: {ch}")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },

    #[error("Lexer error at line {line}, column {column}: Unterminated {kind}")]
    UnterminatedLiteral {
        kind: LiteralKind,
        line: usize,
        column: usize,
    },

    #[error("Theme '{theme}' missing required color: {role}")]
    MissingColor { theme: String, role: &'static str },

    #[error("Theme '{theme}' has invalid color for {role}: {value}")]
    InvalidColor {
        theme: String,
        role: &'static str,
        value: String,
    },

    #[error("Cannot remove built-in theme '{0}'")]
    BuiltinTheme(String),

    #[error("Input too large: {size} bytes (max: {max})")]
    InputTooLarge { size: usize, max: usize },

    #[error("Malformed theme JSON: {0}")]
    ThemeFormat(#[from] serde_json::Error),

    #[error("Malformed configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Cannot serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error comes from the lexer (and is therefore
    /// recoverable by emitting tokens instead)
    pub fn is_lex_error(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedCharacter { .. } | Error::UnterminatedLiteral { .. }
        )
    }

    /// Whether this error is a theme validation failure
    pub fn is_theme_validation(&self) -> bool {
        matches!(self, Error::MissingColor { .. } | Error::InvalidColor { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_role() {
        let err = Error::MissingColor {
            theme: "custom".to_string(),
            role: "keyword",
        };
        assert_eq!(err.to_string(), "Theme 'custom' missing required color: keyword");
        assert!(err.is_theme_validation());
        assert!(!err.is_lex_error());
    }

    #[test]
    fn test_lex_error_message() {
        let err = Error::UnexpectedCharacter {
            ch: '@',
            line: 1,
            column: 9,
        };
        assert!(err.to_string().contains("Unexpected character: @"));
        assert!(err.is_lex_error());

        let err = Error::UnterminatedLiteral {
            kind: LiteralKind::String,
            line: 2,
            column: 1,
        };
        assert!(err.to_string().contains("Unterminated string"));
    }
}
