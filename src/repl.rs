//! Terminal renderer for interactive sessions
//!
//! Colors code with escape sequences instead of markup. Output uses 24-bit
//! color when the terminal supports it and falls back to the nearest of the
//! 16 basic colors otherwise. Also provides the prompt and message
//! formatters a REPL front-end needs.

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

use crate::error::Result;
use crate::syntax::{emit, tokenize_lenient, ColorRole, LexerOptions, Paint, Style, TokenType, RESET};
use crate::theme::{Theme, ThemeRegistry, ThemeSelector};

/// Prompt text used when none is given
pub const DEFAULT_PROMPT: &str = "ruchy> ";

const LINE_NUMBER_FALLBACK: &str = "#858585";
const INFO_FALLBACK: &str = "#75beff";
const WARNING_FALLBACK: &str = "#cca700";
const SUCCESS_FALLBACK: &str = "#89d185";

/// REPL renderer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplOptions {
    pub theme: ThemeSelector,
    /// Emit 24-bit color escapes; otherwise use the 16-color palette
    pub true_color: bool,
    /// Prefix every line with a line-number gutter
    pub show_line_numbers: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            theme: ThemeSelector::default(),
            true_color: true,
            show_line_numbers: false,
        }
    }
}

/// Escape-sequence highlighter for terminals
pub struct ReplHighlighter {
    registry: ThemeRegistry,
    current: ThemeSelector,
    true_color: bool,
    show_line_numbers: bool,
}

impl ReplHighlighter {
    pub fn new(options: ReplOptions) -> Self {
        let registry = ThemeRegistry::new();
        let current = registry.checked(options.theme);
        Self {
            registry,
            current,
            true_color: options.true_color,
            show_line_numbers: options.show_line_numbers,
        }
    }

    /// Highlight code, keeping every character of the input in place
    pub fn highlight(&self, code: &str) -> String {
        if code.is_empty() {
            return String::new();
        }

        let tokens = tokenize_lenient(code, LexerOptions::default());
        let mut out = String::with_capacity(code.len() * 2);
        let mut last_end = 0;

        for token in &tokens {
            if token.kind == TokenType::Eof {
                continue;
            }
            // Whitespace and anything else between tokens is copied as-is
            if token.start > last_end {
                out.push_str(&code[last_end..token.start]);
            }
            out.push_str(&self.token_style(token.kind).paint(&token.text));
            last_end = token.end;
        }
        if last_end < code.len() {
            out.push_str(&code[last_end..]);
        }

        if self.show_line_numbers {
            self.add_line_numbers(&out)
        } else {
            out
        }
    }

    /// Style for a token type under the current theme
    ///
    /// Keywords are bold; comments and template strings are italic. Plain
    /// identifiers take the variable color.
    pub fn token_style(&self, kind: TokenType) -> Style {
        let theme = self.theme();
        let role = match kind {
            TokenType::Identifier => Some(ColorRole::Variable),
            other => other.color_role(),
        };
        let paint = role
            .and_then(|role| theme.color(role))
            .and_then(|color| self.paint(color));

        let mut style = Style::default().with_fg(paint);
        if kind.is_keyword() {
            style = style.with_bold();
        } else if kind.is_comment() || kind == TokenType::StringTemplate {
            style = style.with_italic();
        }
        style
    }

    fn paint(&self, color: &str) -> Option<Paint> {
        Paint::from_value(color, self.true_color)
    }

    fn line_number_style(&self) -> Style {
        let color = self.theme().colors.line_number.as_deref();
        Style::default().with_fg(self.paint(color.unwrap_or(LINE_NUMBER_FALLBACK)))
    }

    fn add_line_numbers(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines.len().to_string().len();
        let style = self.line_number_style();

        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let mut gutter = String::new();
                style.write_prefix(&mut gutter);
                format!("{gutter}{:>width$}{RESET} │ {line}", i + 1)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Bold prompt in the theme's info color
    pub fn prompt(&self, text: &str) -> String {
        let color = self.theme().colors.info.as_deref().unwrap_or(INFO_FALLBACK);
        self.labelled(color, text)
    }

    /// `Error: message`, optionally followed by a location line
    pub fn format_error(&self, message: &str, location: Option<(usize, usize)>) -> String {
        self.message(&self.theme().colors.error, "Error:", message, location)
    }

    /// `Warning: message`, optionally followed by a location line
    pub fn format_warning(&self, message: &str, location: Option<(usize, usize)>) -> String {
        let color = self.theme().colors.warning.as_deref().unwrap_or(WARNING_FALLBACK);
        self.message(color, "Warning:", message, location)
    }

    /// `✓ message` in the theme's success color
    pub fn format_success(&self, message: &str) -> String {
        let color = self.theme().colors.success.as_deref().unwrap_or(SUCCESS_FALLBACK);
        format!("{} {message}", self.labelled(color, "✓"))
    }

    fn message(
        &self,
        color: &str,
        label: &str,
        message: &str,
        location: Option<(usize, usize)>,
    ) -> String {
        let mut out = format!("{} {message}", self.labelled(color, label));
        if let Some((line, column)) = location {
            let text = format!("  at line {line}, column {column}");
            out.push('\n');
            out.push_str(&self.line_number_style().paint(&text));
        }
        out
    }

    /// Bold text in `color`, then a reset
    fn labelled(&self, color: &str, text: &str) -> String {
        Style::default()
            .with_fg(self.paint(color))
            .with_bold()
            .paint(text)
    }

    /// Switch theme; unknown names fall back to the default
    pub fn set_theme(&mut self, theme: impl Into<ThemeSelector>) {
        self.current = self.registry.checked(theme.into());
    }

    /// Validate and register a theme for later selection
    pub fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.registry.register(theme)?;
        Ok(())
    }

    pub fn theme(&self) -> &Theme {
        self.registry.resolve(&self.current)
    }

    pub fn theme_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn true_color(&self) -> bool {
        self.true_color
    }
}

impl Default for ReplHighlighter {
    fn default() -> Self {
        Self::new(ReplOptions::default())
    }
}

/// Clear the screen and home the cursor
pub fn clear_screen() -> String {
    let mut out = String::new();
    emit(&mut out, Clear(ClearType::All));
    emit(&mut out, MoveTo(0, 0));
    out
}

/// Move the cursor to a 1-based column and row
pub fn move_cursor(column: u16, row: u16) -> String {
    let mut out = String::new();
    emit(&mut out, MoveTo(column.saturating_sub(1), row.saturating_sub(1)));
    out
}
