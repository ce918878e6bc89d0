//! Color themes
//!
//! A theme maps semantic color roles to CSS color strings. Themes are
//! plain serde data so they can be exported to and imported from JSON;
//! field names follow the JSON layout (`type`, `lineNumber`, `fontStyles`).

mod builtin;
mod registry;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::syntax::ColorRole;

pub use builtin::{all_themes, BUILTIN_THEMES, DEFAULT_THEME};
pub use registry::{check_contrast, is_valid_color, validate, ThemeRegistry};

/// Light or dark background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
}

/// The colors a theme assigns
///
/// Required roles are plain strings; an empty string counts as missing and
/// is rejected by validation. Optional roles fall back to other roles when
/// unset (see [`ColorScheme::color`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    // Base colors
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub foreground: String,
    #[serde(default)]
    pub selection: String,
    #[serde(default)]
    pub cursor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<String>,

    // Syntax colors
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub variable: String,
    #[serde(default, rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punctuation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<String>,

    // Semantic colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl ColorScheme {
    /// Required roles with their current values, in declaration order
    pub fn required(&self) -> [(&'static str, &str); 13] {
        [
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("selection", self.selection.as_str()),
            ("cursor", self.cursor.as_str()),
            ("keyword", self.keyword.as_str()),
            ("string", self.string.as_str()),
            ("number", self.number.as_str()),
            ("comment", self.comment.as_str()),
            ("function", self.function.as_str()),
            ("variable", self.variable.as_str()),
            ("type", self.type_.as_str()),
            ("operator", self.operator.as_str()),
            ("error", self.error.as_str()),
        ]
    }

    /// Optional roles with their current values
    pub fn optional(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("lineNumber", self.line_number.as_deref()),
            ("punctuation", self.punctuation.as_deref()),
            ("constant", self.constant.as_deref()),
            ("deprecated", self.deprecated.as_deref()),
            ("warning", self.warning.as_deref()),
            ("info", self.info.as_deref()),
            ("success", self.success.as_deref()),
        ]
    }

    /// Resolve the color used for a token role
    ///
    /// Returns `None` only when the role's color (after fallback) is empty,
    /// which a validated theme never has.
    pub fn color(&self, role: ColorRole) -> Option<&str> {
        let value: &str = match role {
            ColorRole::Keyword => &self.keyword,
            ColorRole::String => &self.string,
            ColorRole::Number => &self.number,
            ColorRole::LiteralConstant => self.constant.as_deref().unwrap_or(&self.keyword),
            ColorRole::Comment => &self.comment,
            ColorRole::Function => &self.function,
            ColorRole::Type => &self.type_,
            ColorRole::Variable => &self.variable,
            ColorRole::NamedConstant => self.constant.as_deref().unwrap_or(&self.variable),
            ColorRole::Operator => &self.operator,
            ColorRole::Punctuation => self.punctuation.as_deref().unwrap_or(&self.foreground),
            ColorRole::Error => &self.error,
        };
        (!value.is_empty()).then_some(value)
    }

    /// Copy of this scheme with every color the patch sets replaced
    pub fn merged(&self, patch: &ColorSchemePatch) -> ColorScheme {
        fn pick(base: &str, over: &Option<String>) -> String {
            over.clone().unwrap_or_else(|| base.to_string())
        }
        fn pick_opt(base: &Option<String>, over: &Option<String>) -> Option<String> {
            over.clone().or_else(|| base.clone())
        }

        ColorScheme {
            background: pick(&self.background, &patch.background),
            foreground: pick(&self.foreground, &patch.foreground),
            selection: pick(&self.selection, &patch.selection),
            cursor: pick(&self.cursor, &patch.cursor),
            line_number: pick_opt(&self.line_number, &patch.line_number),
            keyword: pick(&self.keyword, &patch.keyword),
            string: pick(&self.string, &patch.string),
            number: pick(&self.number, &patch.number),
            comment: pick(&self.comment, &patch.comment),
            function: pick(&self.function, &patch.function),
            variable: pick(&self.variable, &patch.variable),
            type_: pick(&self.type_, &patch.type_),
            operator: pick(&self.operator, &patch.operator),
            punctuation: pick_opt(&self.punctuation, &patch.punctuation),
            constant: pick_opt(&self.constant, &patch.constant),
            deprecated: pick_opt(&self.deprecated, &patch.deprecated),
            error: pick(&self.error, &patch.error),
            warning: pick_opt(&self.warning, &patch.warning),
            info: pick_opt(&self.info, &patch.info),
            success: pick_opt(&self.success, &patch.success),
        }
    }
}

/// Partial color scheme used to derive a theme from a built-in base
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorSchemePatch {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub selection: Option<String>,
    pub cursor: Option<String>,
    pub line_number: Option<String>,
    pub keyword: Option<String>,
    pub string: Option<String>,
    pub number: Option<String>,
    pub comment: Option<String>,
    pub function: Option<String>,
    pub variable: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub operator: Option<String>,
    pub punctuation: Option<String>,
    pub constant: Option<String>,
    pub deprecated: Option<String>,
    pub error: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
    pub success: Option<String>,
}

/// Font style flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyles {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// Free-form theme information
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A named color theme
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    pub colors: ColorScheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_styles: Option<FontStyles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ThemeMetadata>,
}

impl Theme {
    /// Create a theme with no font styles or metadata
    pub fn new(name: impl Into<String>, kind: ThemeKind, colors: ColorScheme) -> Self {
        Self {
            name: name.into(),
            kind,
            colors,
            font_styles: None,
            metadata: None,
        }
    }

    /// Set the font styles
    pub fn with_font_styles(mut self, styles: FontStyles) -> Self {
        self.font_styles = Some(styles);
        self
    }

    /// Set the metadata
    pub fn with_metadata(mut self, metadata: ThemeMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Color for a token role
    pub fn color(&self, role: ColorRole) -> Option<&str> {
        self.colors.color(role)
    }

    /// Whether declaration keywords are drawn bold
    pub fn bold(&self) -> bool {
        self.font_styles.is_some_and(|f| f.bold)
    }

    /// Whether comments are drawn italic
    pub fn italic(&self) -> bool {
        self.font_styles.is_some_and(|f| f.italic)
    }

    /// Content hash of the whole theme
    ///
    /// Two themes with the same name but different colors fingerprint
    /// differently, so cached output never outlives a theme edit.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// How a caller picks a theme: by registered name, or inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSelector {
    Name(String),
    Inline(Box<Theme>),
}

impl Default for ThemeSelector {
    fn default() -> Self {
        ThemeSelector::Name(DEFAULT_THEME.to_string())
    }
}

impl From<&str> for ThemeSelector {
    fn from(name: &str) -> Self {
        ThemeSelector::Name(name.to_string())
    }
}

impl From<String> for ThemeSelector {
    fn from(name: String) -> Self {
        ThemeSelector::Name(name)
    }
}

impl From<Theme> for ThemeSelector {
    fn from(theme: Theme) -> Self {
        ThemeSelector::Inline(Box::new(theme))
    }
}
