//! Style types for terminal rendering
//!
//! This module provides the terminal side of styling: the 16-color
//! palette, RGB parsing of theme color values, and escape sequence
//! emission for both true-color and palette output.

use std::fmt;

use crossterm::style::{Attribute, Color as TermColor, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::Command;

/// Escape sequence that resets every attribute
pub const RESET: &str = "\x1b[0m";

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// SGR foreground code for this color
    pub fn fg_code(&self) -> u8 {
        match self {
            Color::Default => 39,
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlack => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
        }
    }

    /// Foreground escape sequence, e.g. `ESC[31m`
    pub fn escape(&self) -> String {
        format!("\x1b[{}m", self.fg_code())
    }
}

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CSS color names accepted in themes, with their RGB values
pub const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 128, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("brown", Rgb::new(165, 42, 42)),
    ("pink", Rgb::new(255, 192, 203)),
    ("lime", Rgb::new(0, 255, 0)),
    ("navy", Rgb::new(0, 0, 128)),
    ("teal", Rgb::new(0, 128, 128)),
    ("silver", Rgb::new(192, 192, 192)),
];

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color: `#rrggbb`, `#rgb`, with or without the `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let v = digit.to_digit(16)? as u8;
                    *slot = v * 17;
                }
                Some(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => None,
        }
    }

    /// Parse any color value a theme may hold
    ///
    /// Accepts hex, `rgb(r, g, b)`, `rgba(r, g, b, a)` (alpha ignored) and
    /// the named colors in [`NAMED_COLORS`]. Channels above 255 clamp.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }

        let lower = value.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'));
        if let Some(args) = args {
            let mut channels = args.split(',').map(|c| c.trim());
            let mut next = || -> Option<u8> {
                let n: u32 = channels.next()?.parse().ok()?;
                Some(n.min(255) as u8)
            };
            return Some(Self::new(next()?, next()?, next()?));
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgb)| *rgb)
            .or_else(|| (value.len() == 6).then(|| Self::from_hex(value)).flatten())
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 weights)
    pub fn brightness(&self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    /// WCAG 2 relative luminance in `0.0..=1.0`
    pub fn relative_luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let s = channel as f64 / 255.0;
            if s <= 0.03928 {
                s / 12.92
            } else {
                ((s + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Closest 16-color palette entry by brightness band and dominant channel
    pub fn nearest_palette(&self) -> Color {
        let (r, g, b) = (self.r, self.g, self.b);
        // Dominant channel picks the hue within a brightness band
        let pick = |red: Color, green: Color, blue: Color, neutral: Color| {
            if r > g && r > b {
                red
            } else if g > r && g > b {
                green
            } else if b > r && b > g {
                blue
            } else {
                neutral
            }
        };

        let brightness = self.brightness();
        if brightness > 200.0 {
            pick(Color::BrightRed, Color::BrightGreen, Color::BrightBlue, Color::BrightWhite)
        } else if brightness > 128.0 {
            pick(Color::Red, Color::Green, Color::Blue, Color::White)
        } else if brightness > 64.0 {
            pick(Color::Magenta, Color::Yellow, Color::Cyan, Color::BrightBlack)
        } else {
            Color::Black
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How a foreground color is written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// 24-bit `ESC[38;2;r;g;bm`
    TrueColor(Rgb),
    /// One of the 16 palette colors
    Palette(Color),
}

impl Paint {
    /// Paint a theme color value, true color or nearest palette entry
    pub fn from_value(value: &str, true_color: bool) -> Option<Self> {
        let rgb = Rgb::parse(value)?;
        Some(if true_color {
            Paint::TrueColor(rgb)
        } else {
            Paint::Palette(rgb.nearest_palette())
        })
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Paint>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(paint: Paint) -> Self {
        Self {
            fg: Some(paint),
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, paint: Option<Paint>) -> Self {
        self.fg = paint;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Append the escape sequences that switch this style on
    ///
    /// Attributes come first, then the color.
    pub fn write_prefix(&self, out: &mut String) {
        if self.bold {
            emit(out, SetAttribute(Attribute::Bold));
        }
        if self.italic {
            emit(out, SetAttribute(Attribute::Italic));
        }
        if self.underline {
            emit(out, SetAttribute(Attribute::Underlined));
        }
        match self.fg {
            Some(Paint::TrueColor(Rgb { r, g, b })) => {
                emit(out, SetForegroundColor(TermColor::Rgb { r, g, b }));
            }
            Some(Paint::Palette(color)) => out.push_str(&color.escape()),
            None => {}
        }
    }

    /// Wrap `text` in this style followed by a reset
    pub fn paint(&self, text: &str) -> String {
        if self.is_default() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len() + 24);
        self.write_prefix(&mut out);
        out.push_str(text);
        emit(&mut out, ResetColor);
        out
    }
}

/// Write a crossterm command's ANSI form into a string buffer
pub(crate) fn emit(out: &mut String, command: impl Command) {
    // Formatting into a String cannot fail
    let _ = command.write_ansi(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, None);
        assert!(!style.bold);
        assert_eq!(style.paint("x"), "x");
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Paint::Palette(Color::Red)).with_bold().with_italic();
        assert_eq!(style.fg, Some(Paint::Palette(Color::Red)));
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.is_default());
    }

    #[test]
    fn test_true_color_escape() {
        let style = Style::fg(Paint::TrueColor(Rgb::new(86, 156, 214))).with_bold();
        assert_eq!(style.paint("fn"), "\x1b[1m\x1b[38;2;86;156;214mfn\x1b[0m");
    }

    #[test]
    fn test_palette_escape() {
        assert_eq!(Color::Red.escape(), "\x1b[31m");
        assert_eq!(Color::BrightBlack.escape(), "\x1b[90m");
        let style = Style::fg(Paint::Palette(Color::Green));
        assert_eq!(style.paint("ok"), "\x1b[32mok\x1b[0m");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("#ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse("#FFF"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("1e1e1e"), Some(Rgb::new(30, 30, 30)));
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#gggggg"), None);
        // Sign characters would slip through radix parsing
        assert_eq!(Rgb::parse("#+f+f+f"), None);
        assert_eq!(Rgb::from_hex("-1-1-1"), None);
    }

    #[test]
    fn test_parse_functional_and_named() {
        assert_eq!(Rgb::parse("rgb(10, 20, 30)"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(Rgb::parse("rgba(10,20,30,0.5)"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(Rgb::parse("rgb(300, 0, 0)"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::parse("Teal"), Some(Rgb::new(0, 128, 128)));
        assert_eq!(Rgb::parse("chartreuse"), None);
    }

    #[test]
    fn test_nearest_palette_bands() {
        assert_eq!(Rgb::new(255, 255, 255).nearest_palette(), Color::BrightWhite);
        assert_eq!(Rgb::new(0, 0, 0).nearest_palette(), Color::Black);
        assert_eq!(Rgb::new(0, 255, 0).nearest_palette(), Color::Green);
        assert_eq!(Rgb::new(206, 145, 120).nearest_palette(), Color::Red);
        assert_eq!(Rgb::new(128, 128, 128).nearest_palette(), Color::BrightBlack);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Rgb::new(255, 0, 10).to_string(), "#ff000a");
    }
}
