//! Configuration file support
//!
//! Loads settings from ~/.ruchy-highlight.toml (or
//! %USERPROFILE%\.ruchy-highlight.toml on Windows)
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! Example:
//! ```toml
//! # ruchy-highlight configuration
//! theme = "monokai"
//! line-numbers = true
//! wrap-lines = false
//! tab-size = 4
//! cache-size = 200
//! eviction = "lru"
//! true-color = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::highlighter::{
    EvictionPolicy, HighlightOptions, Highlighter, HighlighterOptions, DEFAULT_CACHE_SIZE,
};
use crate::repl::ReplOptions;
use crate::theme::{ThemeSelector, DEFAULT_THEME};

const CONFIG_FILE: &str = ".ruchy-highlight.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Theme name
    pub theme: String,
    /// Whether to emit line numbers
    pub line_numbers: bool,
    /// Whether to wrap each rendered line in its own element
    pub wrap_lines: bool,
    /// Expand tabs to this many spaces before highlighting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<usize>,
    /// Maximum number of cached renders (0 disables caching)
    pub cache_size: usize,
    /// Cache eviction order
    pub eviction: EvictionPolicy,
    /// Whether terminal output uses 24-bit color
    pub true_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            line_numbers: false,
            wrap_lines: false,
            tab_size: None,
            cache_size: DEFAULT_CACHE_SIZE,
            eviction: EvictionPolicy::default(),
            true_color: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file gives the defaults; an unreadable or malformed one
    /// logs a warning and also gives the defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from a specific file, with the same fallbacks as [`Config::load`]
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Config::default();
            }
            Err(e) => {
                warn!(path = %path.display(), "cannot read config file: {e}");
                return Config::default();
            }
        };

        match Self::parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring config file: {e}");
                Config::default()
            }
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save current configuration to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save current configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let body = toml::to_string(self)?;
        let contents = format!("# ruchy-highlight configuration\n# Generated automatically\n\n{body}");
        fs::write(path, contents)?;
        Ok(())
    }

    /// Per-call highlight options these settings describe
    pub fn highlight_options(&self) -> HighlightOptions {
        HighlightOptions {
            theme: None,
            line_numbers: self.line_numbers,
            wrap_lines: self.wrap_lines,
            semantic: false,
            tab_size: self.tab_size,
        }
    }

    /// Build a document highlighter with these settings
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(HighlighterOptions {
            theme: ThemeSelector::Name(self.theme.clone()),
            cache_size: self.cache_size,
            eviction: self.eviction,
        })
    }

    /// Terminal renderer options for these settings
    pub fn repl_options(&self) -> ReplOptions {
        ReplOptions {
            theme: ThemeSelector::Name(self.theme.clone()),
            true_color: self.true_color,
            show_line_numbers: self.line_numbers,
        }
    }
}
