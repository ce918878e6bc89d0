//! Built-in themes
//!
//! Five themes ship with the crate. They are registered by every new
//! [`ThemeRegistry`](super::ThemeRegistry) and can be overwritten but never
//! removed.

use super::{ColorScheme, FontStyles, Theme, ThemeKind};

/// Theme used when none is given or a name is unknown
pub const DEFAULT_THEME: &str = "ruchy-dark";

/// Names of the built-in themes
pub const BUILTIN_THEMES: [&str; 5] = ["ruchy-dark", "ruchy-light", "monokai", "github", "dracula"];

/// Get all built-in themes
pub fn all_themes() -> Vec<Theme> {
    vec![ruchy_dark(), ruchy_light(), monokai(), github(), dracula()]
}

fn some(color: &str) -> Option<String> {
    Some(color.to_string())
}

/// Default dark theme
pub fn ruchy_dark() -> Theme {
    let colors = ColorScheme {
        background: "#1e1e1e".into(),
        foreground: "#d4d4d4".into(),
        selection: "#264f78".into(),
        cursor: "#aeafad".into(),
        line_number: some("#858585"),

        keyword: "#569cd6".into(),
        string: "#ce9178".into(),
        number: "#b5cea8".into(),
        comment: "#6a9955".into(),
        function: "#dcdcaa".into(),
        variable: "#9cdcfe".into(),
        type_: "#4ec9b0".into(),
        operator: "#d4d4d4".into(),
        punctuation: some("#808080"),
        constant: some("#4fc1ff"),

        deprecated: None,
        error: "#f48771".into(),
        warning: some("#cca700"),
        info: some("#75beff"),
        success: some("#89d185"),
    };
    Theme::new("ruchy-dark", ThemeKind::Dark, colors).with_font_styles(FontStyles {
        bold: true,
        italic: true,
        underline: false,
    })
}

/// Default light theme
pub fn ruchy_light() -> Theme {
    let colors = ColorScheme {
        background: "#ffffff".into(),
        foreground: "#000000".into(),
        selection: "#add6ff".into(),
        cursor: "#000000".into(),
        line_number: some("#6e7681"),

        keyword: "#0000ff".into(),
        string: "#a31515".into(),
        number: "#098658".into(),
        comment: "#008000".into(),
        function: "#795e26".into(),
        variable: "#001080".into(),
        type_: "#267f99".into(),
        operator: "#000000".into(),
        punctuation: some("#000000"),
        constant: some("#0070c1"),

        deprecated: None,
        error: "#cd3131".into(),
        warning: some("#e9a700"),
        info: some("#0078d4"),
        success: some("#00bc00"),
    };
    Theme::new("ruchy-light", ThemeKind::Light, colors).with_font_styles(FontStyles {
        bold: true,
        italic: true,
        underline: false,
    })
}

pub fn monokai() -> Theme {
    let colors = ColorScheme {
        background: "#272822".into(),
        foreground: "#f8f8f2".into(),
        selection: "#49483e".into(),
        cursor: "#f8f8f0".into(),
        line_number: some("#75715e"),

        keyword: "#f92672".into(),
        string: "#e6db74".into(),
        number: "#ae81ff".into(),
        comment: "#75715e".into(),
        function: "#a6e22e".into(),
        variable: "#f8f8f2".into(),
        type_: "#66d9ef".into(),
        operator: "#f92672".into(),
        punctuation: some("#f8f8f2"),
        constant: some("#ae81ff"),

        deprecated: None,
        error: "#f92672".into(),
        warning: some("#e6db74"),
        info: some("#66d9ef"),
        success: some("#a6e22e"),
    };
    Theme::new("monokai", ThemeKind::Dark, colors).with_font_styles(FontStyles {
        italic: true,
        ..Default::default()
    })
}

/// GitHub light (no font styles)
pub fn github() -> Theme {
    let colors = ColorScheme {
        background: "#ffffff".into(),
        foreground: "#24292e".into(),
        selection: "#c8c8fa".into(),
        cursor: "#044289".into(),
        line_number: some("#959da5"),

        keyword: "#d73a49".into(),
        string: "#032f62".into(),
        number: "#005cc5".into(),
        comment: "#6a737d".into(),
        function: "#6f42c1".into(),
        variable: "#e36209".into(),
        type_: "#005cc5".into(),
        operator: "#d73a49".into(),
        punctuation: some("#24292e"),
        constant: some("#005cc5"),

        deprecated: None,
        error: "#cb2431".into(),
        warning: some("#f9c513"),
        info: some("#0366d6"),
        success: some("#28a745"),
    };
    Theme::new("github", ThemeKind::Light, colors)
}

pub fn dracula() -> Theme {
    let colors = ColorScheme {
        background: "#282a36".into(),
        foreground: "#f8f8f2".into(),
        selection: "#44475a".into(),
        cursor: "#f8f8f2".into(),
        line_number: some("#6272a4"),

        keyword: "#ff79c6".into(),
        string: "#f1fa8c".into(),
        number: "#bd93f9".into(),
        comment: "#6272a4".into(),
        function: "#50fa7b".into(),
        variable: "#f8f8f2".into(),
        type_: "#8be9fd".into(),
        operator: "#ff79c6".into(),
        punctuation: some("#f8f8f2"),
        constant: some("#bd93f9"),

        deprecated: None,
        error: "#ff5555".into(),
        warning: some("#ffb86c"),
        info: some("#8be9fd"),
        success: some("#50fa7b"),
    };
    Theme::new("dracula", ThemeKind::Dark, colors).with_font_styles(FontStyles {
        italic: true,
        ..Default::default()
    })
}
