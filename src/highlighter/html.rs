//! HTML markup generation
//!
//! Colored tokens become `<span class="..." style="...">` elements inside a
//! `<pre class="ruchy-highlight"><code>` block. Class names are the token
//! scope with dots replaced by dashes.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::syntax::{Token, TokenType};
use crate::theme::Theme;

/// Inline CSS for a token, or `None` when the theme gives it no color
pub fn token_style(kind: TokenType, theme: &Theme) -> Option<String> {
    let color = theme.color(kind.color_role()?)?;
    let mut style = format!("color: {color};");
    if kind.is_declaration() && theme.bold() {
        style.push_str(" font-weight: bold;");
    } else if kind.is_comment() && theme.italic() {
        style.push_str(" font-style: italic;");
    }
    Some(style)
}

/// Render tokens as a single `pre` block
pub fn render(tokens: &[Token], theme: &Theme) -> String {
    let mut html = String::from("<pre class=\"ruchy-highlight\"><code>");
    for token in tokens {
        match token.kind {
            TokenType::Eof => break,
            TokenType::Newline => html.push('\n'),
            _ => push_token(&mut html, token, theme),
        }
    }
    html.push_str("</code></pre>");
    html
}

/// Render tokens with a line-number column
pub fn render_with_line_numbers(tokens: &[Token], theme: &Theme, wrap_lines: bool) -> String {
    let lines = group_lines(tokens);

    let mut html = String::from("<div class=\"ruchy-highlight-container\">");
    html.push_str("<div class=\"ruchy-line-numbers\">");
    for number in 1..=lines.len() {
        let _ = writeln!(html, "<span class=\"line-number\">{number}</span>");
    }
    html.push_str("</div>");

    html.push_str("<pre class=\"ruchy-highlight\"><code>");
    for line in &lines {
        if wrap_lines {
            html.push_str("<span class=\"line\">");
        }
        for segment in line {
            push_segment(&mut html, segment.kind, segment.text, theme);
        }
        if wrap_lines {
            html.push_str("</span>");
        }
        html.push('\n');
    }
    html.push_str("</code></pre></div>");
    html
}

fn push_token(html: &mut String, token: &Token, theme: &Theme) {
    push_segment(html, token.kind, &token.text, theme);
}

fn push_segment(html: &mut String, kind: TokenType, text: &str, theme: &Theme) {
    let text = escape_html(text);
    if kind == TokenType::Whitespace {
        html.push_str(&text);
        return;
    }
    match token_style(kind, theme) {
        Some(style) => {
            // Inline themes skip validation, so the color is untrusted
            let _ = write!(
                html,
                "<span class=\"{}\" style=\"{}\">{}</span>",
                kind.css_class(),
                escape_html(&style),
                text
            );
        }
        None => html.push_str(&text),
    }
}

/// Part of a token that sits on a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment<'a> {
    kind: TokenType,
    text: &'a str,
}

/// Split tokens into lines
///
/// Lines end at `Newline` tokens and at every `\n` inside a token, such as
/// a block comment or a multi-line string. A token broken this way becomes
/// one segment per line, each keeping the token's type. The newline tokens
/// themselves and the trailing EOF are dropped; a final line with no
/// segments is not emitted.
fn group_lines(tokens: &[Token]) -> Vec<Vec<Segment<'_>>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        match token.kind {
            TokenType::Newline => lines.push(std::mem::take(&mut current)),
            TokenType::Eof => break,
            kind => {
                let mut parts = token.text.split('\n');
                if let Some(first) = parts.next() {
                    push_part(&mut current, kind, first);
                }
                for part in parts {
                    lines.push(std::mem::take(&mut current));
                    push_part(&mut current, kind, part);
                }
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn push_part<'a>(line: &mut Vec<Segment<'a>>, kind: TokenType, text: &'a str) {
    if !text.is_empty() {
        line.push(Segment { kind, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{tokenize, LexerOptions};
    use crate::theme::{ThemeRegistry, DEFAULT_THEME};
    use pretty_assertions::assert_eq;

    fn lex(source: &str) -> Vec<Token> {
        tokenize(source, LexerOptions::lossless()).unwrap()
    }

    #[test]
    fn test_plain_markup() {
        let registry = ThemeRegistry::new();
        let theme = registry.get("github");
        let html = render(&lex("let x = 1"), theme);
        assert_eq!(
            html,
            "<pre class=\"ruchy-highlight\"><code>\
             <span class=\"keyword-declaration-let\" style=\"color: #d73a49;\">let</span> \
             x \
             <span class=\"keyword-operator-assignment\" style=\"color: #d73a49;\">=</span> \
             <span class=\"constant-numeric-integer\" style=\"color: #005cc5;\">1</span>\
             </code></pre>"
        );
    }

    #[test]
    fn test_font_styles() {
        let registry = ThemeRegistry::new();
        let theme = registry.get(DEFAULT_THEME);
        let html = render(&lex("fn f() // hi"), theme);
        assert!(html.contains("style=\"color: #569cd6; font-weight: bold;\">fn</span>"));
        assert!(html.contains("font-style: italic;\">&#x2F;&#x2F; hi</span>"));

        let plain = render(&lex("fn f() // hi"), registry.get("github"));
        assert!(!plain.contains("font-weight"));
        assert!(!plain.contains("font-style"));
    }

    #[test]
    fn test_string_contents_escaped() {
        let registry = ThemeRegistry::new();
        let html = render(&lex("\"<script>alert('x')</script>\""), registry.get(DEFAULT_THEME));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unvalidated_color_escaped() {
        let registry = ThemeRegistry::new();
        let mut theme = registry.get("github").clone();
        theme.colors.keyword = "red\"><script>".to_string();
        let html = render(&lex("if x"), &theme);
        assert!(!html.contains("<script>"));
        assert!(html.contains("style=\"color: red&quot;&gt;&lt;script&gt;;\""));
    }

    #[test]
    fn test_line_numbers() {
        let registry = ThemeRegistry::new();
        let html = render_with_line_numbers(&lex("a\nb\nc"), registry.get("github"), false);
        assert!(html.starts_with(
            "<div class=\"ruchy-highlight-container\"><div class=\"ruchy-line-numbers\">\
             <span class=\"line-number\">1</span>\n\
             <span class=\"line-number\">2</span>\n\
             <span class=\"line-number\">3</span>\n</div>"
        ));
        assert!(html.ends_with("<pre class=\"ruchy-highlight\"><code>a\nb\nc\n</code></pre></div>"));
    }

    #[test]
    fn test_wrapped_lines() {
        let registry = ThemeRegistry::new();
        let html = render_with_line_numbers(&lex("a\nb"), registry.get("github"), true);
        assert!(html.contains(
            "<code><span class=\"line\">a</span>\n<span class=\"line\">b</span>\n</code>"
        ));
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let tokens = lex("a\n");
        assert_eq!(group_lines(&tokens).len(), 1);
        let tokens = lex("a\n\nb");
        assert_eq!(group_lines(&tokens).len(), 3);
    }

    /// Gutter entries and code lines in line-numbered markup
    fn line_counts(html: &str) -> (usize, usize) {
        let gutter = html.matches("<span class=\"line-number\">").count();
        let code = html.split("<code>").nth(1).unwrap_or_default();
        (gutter, code.matches('\n').count())
    }

    #[test]
    fn test_multiline_tokens_keep_gutter_aligned() {
        let registry = ThemeRegistry::new();
        let theme = registry.get("github");
        for (source, lines) in [("/* a\nb */\nx", 3), ("\"a\nb\"", 2), ("/// doc\n/* x\n\ny */", 4)] {
            let html = render_with_line_numbers(&lex(source), theme, false);
            assert_eq!(line_counts(&html), (lines, lines), "lines for {source:?}");
        }
    }

    #[test]
    fn test_multiline_token_split_per_line() {
        let registry = ThemeRegistry::new();
        let theme = registry.get("github");
        let html = render_with_line_numbers(&lex("/* a\nb */\nx"), theme, true);
        let style = token_style(TokenType::CommentBlock, theme).unwrap_or_default();
        let open = format!("<span class=\"{}\" style=\"{style}\">", TokenType::CommentBlock.css_class());
        assert!(html.contains(&format!(
            "<code><span class=\"line\">{open}&#x2F;* a</span></span>\n\
             <span class=\"line\">{open}b *&#x2F;</span></span>\n\
             <span class=\"line\">x</span>\n</code>"
        )));
    }
}
