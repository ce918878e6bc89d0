//! Coarse terminal output for whole documents
//!
//! Maps each token's theme color onto one of eight basic terminal colors by
//! looking for a known hex triplet inside the color string. Anything that
//! does not match is drawn white. For nearest-color or 24-bit output use
//! [`ReplHighlighter`](crate::repl::ReplHighlighter) instead.

use crate::syntax::{Color, Token, TokenType, RESET};
use crate::theme::Theme;

const COLOR_TABLE: [(&str, Color); 8] = [
    ("ff0000", Color::Red),
    ("00ff00", Color::Green),
    ("ffff00", Color::Yellow),
    ("0000ff", Color::Blue),
    ("ff00ff", Color::Magenta),
    ("00ffff", Color::Cyan),
    ("ffffff", Color::White),
    ("808080", Color::BrightBlack),
];

/// Basic palette color for a theme color string
pub fn basic_color(color: &str) -> Color {
    let lower = color.to_lowercase();
    COLOR_TABLE
        .iter()
        .find(|(hex, _)| lower.contains(hex))
        .map(|(_, c)| *c)
        .unwrap_or(Color::White)
}

/// Render tokens with basic color escapes, each styled token followed by a reset
pub fn render(tokens: &[Token], theme: &Theme) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.kind {
            TokenType::Eof => break,
            TokenType::Newline => out.push('\n'),
            TokenType::Whitespace => out.push_str(&token.text),
            kind => match kind.color_role().and_then(|role| theme.color(role)) {
                Some(color) => {
                    out.push_str(&basic_color(color).escape());
                    out.push_str(&token.text);
                    out.push_str(RESET);
                }
                None => out.push_str(&token.text),
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{tokenize, LexerOptions};
    use crate::theme::{ThemeRegistry, DEFAULT_THEME};

    #[test]
    fn test_basic_color_lookup() {
        assert_eq!(basic_color("#FF0000"), Color::Red);
        assert_eq!(basic_color("#808080"), Color::BrightBlack);
        assert_eq!(basic_color("#00ffff"), Color::Cyan);
        assert_eq!(basic_color("#569cd6"), Color::White);
        assert_eq!(basic_color("navy"), Color::White);
    }

    #[test]
    fn test_render_resets_each_token() {
        let registry = ThemeRegistry::new();
        let tokens = tokenize("let x = 1\n", LexerOptions::lossless()).unwrap();
        let out = render(&tokens, registry.get(DEFAULT_THEME));
        // Every color in ruchy-dark misses the table, so all styled tokens are white
        assert_eq!(
            out,
            "\x1b[37mlet\x1b[0m x \x1b[37m=\x1b[0m \x1b[37m1\x1b[0m\n"
        );
    }

    #[test]
    fn test_punctuation_gray() {
        let registry = ThemeRegistry::new();
        let tokens = tokenize("(", LexerOptions::lossless()).unwrap();
        let out = render(&tokens, registry.get(DEFAULT_THEME));
        assert_eq!(out, "\x1b[90m(\x1b[0m");
    }
}
