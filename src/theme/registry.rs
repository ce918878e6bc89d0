//! Theme registry
//!
//! Owns the set of named themes: the built-ins plus anything registered at
//! runtime. Every theme entering the registry is validated first.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use super::builtin::{self, BUILTIN_THEMES, DEFAULT_THEME};
use super::{ColorSchemePatch, Theme, ThemeKind, ThemeSelector};
use crate::error::{Error, Result};
use crate::syntax::{Rgb, NAMED_COLORS};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap());
static RGB_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^rgb\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)$").unwrap());
static RGBA_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*,\s*[\d.]+\s*\)$").unwrap()
});

/// Returned by lookups when even the default theme is somehow absent
static FALLBACK_THEME: Lazy<Theme> = Lazy::new(builtin::ruchy_dark);

/// Whether `value` is an accepted CSS color
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and the
/// named colors (case-insensitive).
pub fn is_valid_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
        || RGB_COLOR.is_match(value)
        || RGBA_COLOR.is_match(value)
        || NAMED_COLORS
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(value))
}

/// Check that a theme has every required color and that all colors parse
pub fn validate(theme: &Theme) -> Result<()> {
    for (role, value) in theme.colors.required() {
        if value.is_empty() {
            return Err(Error::MissingColor {
                theme: theme.name.clone(),
                role,
            });
        }
    }

    let required = theme.colors.required().map(|(role, value)| (role, Some(value)));
    let optional = theme.colors.optional();
    for (role, value) in required.into_iter().chain(optional) {
        if let Some(value) = value {
            if !is_valid_color(value) {
                return Err(Error::InvalidColor {
                    theme: theme.name.clone(),
                    role,
                    value: value.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// WCAG 2 contrast ratio between two colors, from 1.0 to 21.0
///
/// Returns 0.0 when either color cannot be parsed.
pub fn check_contrast(foreground: &str, background: &str) -> f64 {
    let (Some(fg), Some(bg)) = (Rgb::parse(foreground), Rgb::parse(background)) else {
        return 0.0;
    };
    let a = fg.relative_luminance();
    let b = bg.relative_luminance();
    let (brightest, darkest) = if a >= b { (a, b) } else { (b, a) };
    (brightest + 0.05) / (darkest + 0.05)
}

/// Named theme store
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
}

impl ThemeRegistry {
    /// Create a registry holding the built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in builtin::all_themes() {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    /// Validate and store a theme, returning the one it replaced
    ///
    /// Built-in names may be overwritten.
    pub fn register(&mut self, theme: Theme) -> Result<Option<Theme>> {
        validate(&theme)?;
        info!(theme = %theme.name, "registered theme");
        Ok(self.themes.insert(theme.name.clone(), theme))
    }

    /// Look up a theme by name, falling back to the default theme
    pub fn get(&self, name: &str) -> &Theme {
        if let Some(theme) = self.themes.get(name) {
            return theme;
        }
        warn!("theme '{name}' not found, using default theme '{DEFAULT_THEME}'");
        self.themes.get(DEFAULT_THEME).unwrap_or(&FALLBACK_THEME)
    }

    /// Resolve a selector: inline themes pass through unchanged
    pub fn resolve<'a>(&'a self, selector: &'a ThemeSelector) -> &'a Theme {
        match selector {
            ThemeSelector::Name(name) => self.get(name),
            ThemeSelector::Inline(theme) => &**theme,
        }
    }

    /// Replace an unknown theme name with the default theme
    ///
    /// Lets holders of a current theme log the fallback once instead of on
    /// every lookup.
    pub fn checked(&self, selector: ThemeSelector) -> ThemeSelector {
        match selector {
            ThemeSelector::Name(name) if !self.contains(&name) => {
                warn!("theme '{name}' not found, using default theme '{DEFAULT_THEME}'");
                ThemeSelector::Name(DEFAULT_THEME.to_string())
            }
            other => other,
        }
    }

    /// Remove a user theme; returns whether it existed
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        if BUILTIN_THEMES.contains(&name) {
            return Err(Error::BuiltinTheme(name.to_string()));
        }
        Ok(self.themes.remove(name).is_some())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered theme names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// All registered themes, sorted by name
    pub fn themes(&self) -> Vec<&Theme> {
        let mut themes: Vec<_> = self.themes.values().collect();
        themes.sort_by(|a, b| a.name.cmp(&b.name));
        themes
    }

    /// Build a theme from a partial color scheme
    ///
    /// Colors the patch leaves unset come from the built-in base of the same
    /// kind (`ruchy-dark` or `ruchy-light`), as do the font styles. The
    /// result is not registered.
    pub fn create(&self, name: &str, kind: ThemeKind, colors: ColorSchemePatch) -> Theme {
        let base = match kind {
            ThemeKind::Dark => builtin::ruchy_dark(),
            ThemeKind::Light => builtin::ruchy_light(),
        };
        Theme {
            name: name.to_string(),
            kind,
            colors: base.colors.merged(&colors),
            font_styles: base.font_styles,
            metadata: None,
        }
    }

    /// Serialize a theme (or the default, for unknown names) as pretty JSON
    pub fn export(&self, name: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.get(name))?)
    }

    /// Parse, validate and register a JSON theme
    pub fn import(&mut self, json: &str) -> Result<Theme> {
        let theme: Theme = serde_json::from_str(json)?;
        self.register(theme.clone())?;
        Ok(theme)
    }

    /// See [`check_contrast`]
    pub fn check_contrast(&self, foreground: &str, background: &str) -> f64 {
        check_contrast(foreground, background)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMetadata;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtins_present() {
        let registry = ThemeRegistry::new();
        assert_eq!(
            registry.names(),
            vec!["dracula", "github", "monokai", "ruchy-dark", "ruchy-light"]
        );
        for name in BUILTIN_THEMES {
            assert!(registry.contains(name));
        }
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get("no-such-theme").name, "ruchy-dark");
    }

    #[test]
    fn test_resolve_inline() {
        let registry = ThemeRegistry::new();
        let custom = registry.create("inline", ThemeKind::Light, ColorSchemePatch::default());
        let selector = ThemeSelector::from(custom);
        assert_eq!(registry.resolve(&selector).name, "inline");
        assert!(!registry.contains("inline"));
    }

    #[test]
    fn test_checked_selector() {
        let registry = ThemeRegistry::new();
        assert_eq!(
            registry.checked("missing".into()),
            ThemeSelector::Name(DEFAULT_THEME.to_string())
        );
        assert_eq!(registry.checked("github".into()), ThemeSelector::from("github"));
    }

    #[test]
    fn test_register_and_remove() {
        let mut registry = ThemeRegistry::new();
        let theme = registry.create("custom", ThemeKind::Dark, ColorSchemePatch::default());
        assert!(registry.register(theme.clone()).unwrap().is_none());
        assert!(registry.contains("custom"));
        assert!(registry.register(theme).unwrap().is_some());

        assert!(registry.remove("custom").unwrap());
        assert!(!registry.remove("custom").unwrap());
    }

    #[test]
    fn test_builtin_cannot_be_removed() {
        let mut registry = ThemeRegistry::new();
        let err = registry.remove("monokai").unwrap_err();
        assert_eq!(err.to_string(), "Cannot remove built-in theme 'monokai'");
        assert!(registry.contains("monokai"));
    }

    #[test]
    fn test_builtin_can_be_overwritten() {
        let mut registry = ThemeRegistry::new();
        let patch = ColorSchemePatch {
            keyword: Some("#123456".to_string()),
            ..Default::default()
        };
        let theme = registry.create("monokai", ThemeKind::Dark, patch);
        assert!(registry.register(theme).unwrap().is_some());
        assert_eq!(registry.get("monokai").colors.keyword, "#123456");
    }

    #[test]
    fn test_missing_required_color() {
        let mut registry = ThemeRegistry::new();
        let mut theme = registry.create("broken", ThemeKind::Dark, ColorSchemePatch::default());
        theme.colors.keyword.clear();
        match registry.register(theme) {
            Err(Error::MissingColor { theme, role }) => {
                assert_eq!(theme, "broken");
                assert_eq!(role, "keyword");
            }
            other => panic!("expected MissingColor, got {other:?}"),
        }
        assert!(!registry.contains("broken"));
    }

    #[test]
    fn test_invalid_color() {
        let mut registry = ThemeRegistry::new();
        let patch = ColorSchemePatch {
            info: Some("not-a-color".to_string()),
            ..Default::default()
        };
        let theme = registry.create("broken", ThemeKind::Light, patch);
        let err = registry.register(theme).unwrap_err();
        assert!(err.is_theme_validation());
        assert_eq!(
            err.to_string(),
            "Theme 'broken' has invalid color for info: not-a-color"
        );
    }

    #[test]
    fn test_color_formats() {
        for good in [
            "#fff",
            "#A1b2C3",
            "rgb(1, 2, 3)",
            "rgb(255,255,255)",
            "rgba(0, 0, 0, 0.5)",
            "Navy",
            "grey",
        ] {
            assert!(is_valid_color(good), "{good} should be valid");
        }
        for bad in ["#ffff", "fff", "rgb(1,2)", "hsl(0, 0%, 0%)", "chartreuse", ""] {
            assert!(!is_valid_color(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_create_merges_onto_base() {
        let registry = ThemeRegistry::new();
        let patch = ColorSchemePatch {
            keyword: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let theme = registry.create("mine", ThemeKind::Light, patch);
        assert_eq!(theme.colors.keyword, "#ff0000");
        assert_eq!(theme.colors.string, "#a31515");
        assert!(theme.bold());
        assert!(theme.italic());
    }

    #[test]
    fn test_export_import() {
        let mut registry = ThemeRegistry::new();
        let theme = registry
            .create("shared", ThemeKind::Dark, ColorSchemePatch::default())
            .with_metadata(ThemeMetadata {
                author: Some("someone".to_string()),
                description: Some("for sharing".to_string()),
                version: Some("1.0.0".to_string()),
            });
        registry.register(theme.clone()).unwrap();

        let json = registry.export("shared").unwrap();
        assert!(json.contains("\"type\": \"dark\""));

        let mut other = ThemeRegistry::new();
        let imported = other.import(&json).unwrap();
        assert_eq!(imported, theme);
        assert_eq!(other.get("shared"), &theme);
    }

    #[test]
    fn test_import_rejects_bad_json() {
        let mut registry = ThemeRegistry::new();
        assert!(matches!(registry.import("{not json"), Err(Error::ThemeFormat(_))));

        let missing = r##"{"name":"partial","type":"dark","colors":{"background":"#000"}}"##;
        assert!(matches!(
            registry.import(missing),
            Err(Error::MissingColor { role: "foreground", .. })
        ));
    }

    #[test]
    fn test_contrast() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.check_contrast("#000000", "#ffffff"), 21.0);
        assert_eq!(registry.check_contrast("#ffffff", "#000000"), 21.0);
        assert!((registry.check_contrast("#777777", "#777777") - 1.0).abs() < 1e-9);
        assert_eq!(registry.check_contrast("nope", "#ffffff"), 0.0);
        assert_eq!(registry.check_contrast("#+f+f+f", "#000000"), 0.0);
    }
}
