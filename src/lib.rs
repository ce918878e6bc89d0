//! ruchy-highlight - syntax highlighting for the Ruchy language
//!
//! Source text is scanned into a flat token stream, colored through a
//! theme, and rendered either as HTML markup or as terminal escape
//! sequences.
//!
//! ```
//! let html = ruchy_highlight::highlight("let x = 42", "github");
//! assert!(html.starts_with("<pre class=\"ruchy-highlight\">"));
//!
//! let colored = ruchy_highlight::highlight_for_repl("fn main() {}", "monokai", true);
//! assert!(colored.contains("\x1b[38;2;"));
//! ```
//!
//! For repeated work construct a [`Highlighter`] (HTML, cached) or a
//! [`ReplHighlighter`] (terminal) once and reuse it.

pub mod config;
pub mod error;
pub mod escape;
pub mod highlighter;
pub mod repl;
pub mod syntax;
pub mod theme;

pub use config::Config;
pub use error::{Error, Result};
pub use highlighter::{
    EvictionPolicy, HighlightOptions, HighlightResult, HighlightStats, Highlighter,
    HighlighterOptions,
};
pub use repl::{ReplHighlighter, ReplOptions};
pub use syntax::{Lexer, LexerOptions, Token, TokenType};
pub use theme::{
    ColorScheme, ColorSchemePatch, FontStyles, Theme, ThemeKind, ThemeMetadata, ThemeRegistry,
    ThemeSelector,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highlight source as HTML with a named theme
pub fn highlight(source: &str, theme: &str) -> String {
    let mut highlighter = Highlighter::new(HighlighterOptions {
        theme: theme.into(),
        cache_size: 0,
        ..Default::default()
    });
    highlighter.highlight(source, &HighlightOptions::default()).html
}

/// Highlight source with basic terminal colors
pub fn highlight_terminal(source: &str, theme: &str) -> String {
    let highlighter = Highlighter::new(HighlighterOptions {
        theme: theme.into(),
        cache_size: 0,
        ..Default::default()
    });
    highlighter.to_ansi(source, &HighlightOptions::default())
}

/// Highlight source for an interactive terminal
pub fn highlight_for_repl(source: &str, theme: &str, true_color: bool) -> String {
    ReplHighlighter::new(ReplOptions {
        theme: theme.into(),
        true_color,
        show_line_numbers: false,
    })
    .highlight(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_start_functions() {
        let html = highlight("let x = 42", "ruchy-dark");
        assert!(html.contains("keyword-declaration-let"));

        let ansi = highlight_terminal("let x = 42", "ruchy-dark");
        assert!(ansi.contains("\x1b[0m"));
        assert!(ansi.contains("let"));

        let basic = highlight_for_repl("let x = 42", "ruchy-dark", false);
        assert!(!basic.contains("38;2;"));
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
