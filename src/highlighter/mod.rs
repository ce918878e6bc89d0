//! Document highlighter
//!
//! This module provides the Highlighter that coordinates lexing, theme
//! resolution, markup rendering and result caching.

pub mod ansi;
mod cache;
pub mod html;

use std::borrow::Cow;
use std::time::{Duration, Instant};

pub use cache::{source_hash, CacheKey, EvictionPolicy, HighlightCache, DEFAULT_CACHE_SIZE};

use crate::error::Result;
use crate::escape::tabs_to_spaces;
use crate::syntax::{tokenize_lenient, LexerOptions, Token};
use crate::theme::{Theme, ThemeRegistry, ThemeSelector};

/// Per-call rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Theme for this call only; `None` uses the highlighter's current theme
    pub theme: Option<ThemeSelector>,
    /// Emit a line-number column
    pub line_numbers: bool,
    /// Wrap each line in `<span class="line">` (line-numbered output only)
    pub wrap_lines: bool,
    /// Reserved for semantic highlighting; only affects caching
    pub semantic: bool,
    /// Expand tabs to this many spaces before lexing
    pub tab_size: Option<usize>,
}

/// Construction options for a [`Highlighter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlighterOptions {
    pub theme: ThemeSelector,
    /// Maximum cached renders; 0 disables the cache
    pub cache_size: usize,
    pub eviction: EvictionPolicy,
}

impl Default for HighlighterOptions {
    fn default() -> Self {
        Self {
            theme: ThemeSelector::default(),
            cache_size: DEFAULT_CACHE_SIZE,
            eviction: EvictionPolicy::default(),
        }
    }
}

/// Timing and size figures for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightStats {
    /// Time spent lexing and rendering; cache hits report the first render's time
    pub parse_time: Duration,
    /// Every token produced, whitespace and EOF included
    pub token_count: usize,
    /// Number of `\n`-separated lines in the source
    pub line_count: usize,
    /// How many times this result has been served from cache
    pub cache_hits: usize,
}

/// Output of [`Highlighter::highlight`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightResult {
    pub html: String,
    /// Tokens with whitespace, newlines and EOF removed
    pub tokens: Vec<Token>,
    pub stats: HighlightStats,
}

/// Theme-aware highlighter with a result cache
pub struct Highlighter {
    registry: ThemeRegistry,
    current: ThemeSelector,
    cache: HighlightCache,
}

impl Highlighter {
    /// Create a highlighter with the built-in themes registered
    pub fn new(options: HighlighterOptions) -> Self {
        let mut highlighter = Self {
            registry: ThemeRegistry::new(),
            current: ThemeSelector::default(),
            cache: HighlightCache::new(options.cache_size, options.eviction),
        };
        highlighter.current = highlighter.registry.checked(options.theme);
        highlighter
    }

    /// Highlight source text as HTML
    pub fn highlight(&mut self, source: &str, options: &HighlightOptions) -> HighlightResult {
        let start = Instant::now();

        if source.is_empty() {
            return HighlightResult::default();
        }

        let theme = match &options.theme {
            Some(selector) => self.registry.resolve(selector),
            None => self.registry.resolve(&self.current),
        };

        let key = CacheKey {
            theme: theme.fingerprint(),
            line_numbers: options.line_numbers,
            wrap_lines: options.wrap_lines,
            semantic: options.semantic,
            tab_size: options.tab_size,
            source: source_hash(source),
        };
        if let Some(hit) = self.cache.lookup(&key, source) {
            return hit;
        }

        let text = expand_tabs(source, options.tab_size);
        let tokens = tokenize_lenient(&text, LexerOptions::lossless());
        let html = if options.line_numbers {
            html::render_with_line_numbers(&tokens, theme, options.wrap_lines)
        } else {
            html::render(&tokens, theme)
        };

        let token_count = tokens.len();
        let result = HighlightResult {
            html,
            tokens: tokens.into_iter().filter(|t| !t.kind.is_trivia()).collect(),
            stats: HighlightStats {
                parse_time: start.elapsed(),
                token_count,
                line_count: text.split('\n').count(),
                cache_hits: 0,
            },
        };

        self.cache.insert(key, source, result.clone());
        result
    }

    /// Highlight a single line: markup only, never line-numbered
    pub fn highlight_line(&mut self, line: &str, options: &HighlightOptions) -> String {
        let options = HighlightOptions {
            line_numbers: false,
            ..options.clone()
        };
        self.highlight(line, &options).html
    }

    /// Render source with basic terminal colors
    ///
    /// Always relexes; the cache is neither read nor written.
    pub fn to_ansi(&self, source: &str, options: &HighlightOptions) -> String {
        let theme = match &options.theme {
            Some(selector) => self.registry.resolve(selector),
            None => self.registry.resolve(&self.current),
        };
        let text = expand_tabs(source, options.tab_size);
        ansi::render(&tokenize_lenient(&text, LexerOptions::lossless()), theme)
    }

    /// Switch the current theme and drop every cached render
    pub fn set_theme(&mut self, theme: impl Into<ThemeSelector>) {
        self.current = self.registry.checked(theme.into());
        self.cache.clear();
    }

    /// Validate and register a theme
    ///
    /// Replacing an existing theme clears the cache.
    pub fn register_theme(&mut self, theme: Theme) -> Result<()> {
        if self.registry.register(theme)?.is_some() {
            self.cache.clear();
        }
        Ok(())
    }

    /// The current theme
    pub fn theme(&self) -> &Theme {
        self.registry.resolve(&self.current)
    }

    pub fn theme_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Number of cached renders
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(HighlighterOptions::default())
    }
}

fn expand_tabs(source: &str, tab_size: Option<usize>) -> Cow<'_, str> {
    match tab_size {
        Some(size) if source.contains('\t') => Cow::Owned(tabs_to_spaces(source, size)),
        _ => Cow::Borrowed(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenType;
    use crate::theme::{ColorSchemePatch, ThemeKind, DEFAULT_THEME};
    use pretty_assertions::assert_eq;

    fn options() -> HighlightOptions {
        HighlightOptions::default()
    }

    #[test]
    fn test_highlight_basic() {
        let mut highlighter = Highlighter::default();
        let result = highlighter.highlight("let x = 42", &options());

        assert!(result.html.starts_with("<pre class=\"ruchy-highlight\"><code>"));
        assert!(result.html.contains("keyword-declaration-let"));
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenType::KeywordLet,
                TokenType::Identifier,
                TokenType::OperatorAssignment,
                TokenType::NumberInteger,
            ]
        );
        // let, ws, x, ws, =, ws, 42, EOF
        assert_eq!(result.stats.token_count, 8);
        assert_eq!(result.stats.line_count, 1);
        assert_eq!(result.stats.cache_hits, 0);
    }

    #[test]
    fn test_empty_input() {
        let mut highlighter = Highlighter::default();
        let result = highlighter.highlight("", &options());
        assert_eq!(result.html, "");
        assert!(result.tokens.is_empty());
        assert_eq!(result.stats, HighlightStats::default());
        assert_eq!(highlighter.cache_len(), 0);
    }

    #[test]
    fn test_cache_hits() {
        let mut highlighter = Highlighter::default();
        let first = highlighter.highlight("fn f() {}", &options());
        let second = highlighter.highlight("fn f() {}", &options());
        let third = highlighter.highlight("fn f() {}", &options());
        assert_eq!(first.html, second.html);
        assert_eq!(second.stats.cache_hits, 1);
        assert_eq!(third.stats.cache_hits, 2);
        assert_eq!(highlighter.cache_len(), 1);
    }

    #[test]
    fn test_options_are_part_of_key() {
        let mut highlighter = Highlighter::default();
        highlighter.highlight("x", &options());
        let numbered = HighlightOptions {
            line_numbers: true,
            ..options()
        };
        let result = highlighter.highlight("x", &numbered);
        assert_eq!(result.stats.cache_hits, 0);
        assert!(result.html.starts_with("<div class=\"ruchy-highlight-container\">"));
        assert_eq!(highlighter.cache_len(), 2);
    }

    #[test]
    fn test_set_theme_clears_cache() {
        let mut highlighter = Highlighter::default();
        let dark = highlighter.highlight("let x = 1", &options());
        highlighter.set_theme("github");
        assert_eq!(highlighter.cache_len(), 0);
        let light = highlighter.highlight("let x = 1", &options());
        assert_eq!(light.stats.cache_hits, 0);
        assert_ne!(dark.html, light.html);
        assert_eq!(highlighter.theme().name, "github");
    }

    #[test]
    fn test_unknown_theme_uses_default() {
        let mut highlighter = Highlighter::default();
        highlighter.set_theme("missing");
        assert_eq!(highlighter.theme().name, DEFAULT_THEME);
    }

    #[test]
    fn test_per_call_theme() {
        let mut highlighter = Highlighter::default();
        let github = HighlightOptions {
            theme: Some("github".into()),
            ..options()
        };
        let result = highlighter.highlight("let", &github);
        assert!(result.html.contains("#d73a49"));
        assert_eq!(highlighter.theme().name, DEFAULT_THEME);
    }

    #[test]
    fn test_inline_theme_edit_misses_cache() {
        let mut highlighter = Highlighter::default();
        let mut theme = highlighter
            .registry()
            .create("inline", ThemeKind::Dark, ColorSchemePatch::default());
        let first = HighlightOptions {
            theme: Some(theme.clone().into()),
            ..options()
        };
        highlighter.highlight("let", &first);

        theme.colors.keyword = "#010203".to_string();
        let second = HighlightOptions {
            theme: Some(theme.into()),
            ..options()
        };
        let result = highlighter.highlight("let", &second);
        assert_eq!(result.stats.cache_hits, 0);
        assert!(result.html.contains("#010203"));
    }

    #[test]
    fn test_register_replacement_clears_cache() {
        let mut highlighter = Highlighter::default();
        let theme = highlighter
            .registry()
            .create("custom", ThemeKind::Dark, ColorSchemePatch::default());
        highlighter.register_theme(theme.clone()).unwrap();
        highlighter.highlight("x", &options());
        assert_eq!(highlighter.cache_len(), 1);

        highlighter.register_theme(theme).unwrap();
        assert_eq!(highlighter.cache_len(), 0);
        assert!(highlighter.theme_names().contains(&"custom"));
    }

    #[test]
    fn test_highlight_line_forces_plain_markup() {
        let mut highlighter = Highlighter::default();
        let numbered = HighlightOptions {
            line_numbers: true,
            ..options()
        };
        let html = highlighter.highlight_line("let x", &numbered);
        assert!(html.starts_with("<pre class=\"ruchy-highlight\">"));
    }

    #[test]
    fn test_tab_size() {
        let mut highlighter = Highlighter::default();
        let tabbed = HighlightOptions {
            tab_size: Some(2),
            ..options()
        };
        let result = highlighter.highlight("\tx", &tabbed);
        assert!(result.html.contains("<code>  x</code>"));
        assert_eq!(result.tokens[0].column, 3);

        let raw = highlighter.highlight("\tx", &options());
        assert!(raw.html.contains("<code>\tx</code>"));
    }

    #[test]
    fn test_to_ansi_skips_cache() {
        let highlighter = Highlighter::default();
        let out = highlighter.to_ansi("let x", &options());
        assert!(out.starts_with("\x1b[37mlet\x1b[0m"));
        assert_eq!(highlighter.cache_len(), 0);
    }

    #[test]
    fn test_zero_capacity() {
        let mut highlighter = Highlighter::new(HighlighterOptions {
            cache_size: 0,
            ..Default::default()
        });
        highlighter.highlight("x", &options());
        let again = highlighter.highlight("x", &options());
        assert_eq!(again.stats.cache_hits, 0);
        assert_eq!(highlighter.cache_len(), 0);
    }

    #[test]
    fn test_error_tokens_render() {
        let mut highlighter = Highlighter::default();
        let result = highlighter.highlight("let x = @", &options());
        assert!(result.html.contains("<span class=\"error\""));
        assert_eq!(result.tokens.last().map(|t| t.kind), Some(TokenType::Error));
    }
}
