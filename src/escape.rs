//! Text escaping and input hygiene
//!
//! Everything that ends up inside generated markup goes through
//! [`escape_html`]. The other helpers normalize source text before lexing.

use crate::error::{Error, Result};

/// Largest input accepted by [`sanitize_input`] unless told otherwise (10 MiB)
pub const DEFAULT_MAX_INPUT_SIZE: usize = 10 * 1024 * 1024;

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape_html`]
///
/// Only the six entities produced by `escape_html` are recognized; any
/// other `&...;` sequence is left alone.
pub fn unescape_html(text: &str) -> String {
    const ENTITIES: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&#x2F;", '/'),
    ];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Check the size ceiling and strip control characters
///
/// Tab, newline and carriage return survive; every other C0 control
/// character and DEL is removed.
pub fn sanitize_input(input: &str, max_size: usize) -> Result<String> {
    if input.len() > max_size {
        return Err(Error::InputTooLarge {
            size: input.len(),
            max: max_size,
        });
    }
    Ok(input
        .chars()
        .filter(|c| !is_stripped_control(*c))
        .collect())
}

fn is_stripped_control(c: char) -> bool {
    matches!(c, '\x00'..='\x08' | '\x0B' | '\x0C' | '\x0E'..='\x1F' | '\x7F')
}

/// Replace every tab with `tab_size` spaces
pub fn tabs_to_spaces(text: &str, tab_size: usize) -> String {
    text.replace('\t', &" ".repeat(tab_size))
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
