//! Search and display settings.
//!
//! ## File Format
//!
//! ```text
//! {
//!     "case_sensitive": false,
//!     "highlight": true,
//!     "max_results": null,
//!     "search_mode": "PHRASE"
//! }
//! ```
//!
//! Loading is lenient per key. A hand-edited file with one bad value keeps
//! the rest of its settings:
//!
//! ```text
//! { "highlight": "yes", "search_mode": "OR" }
//!                 ^ not a bool: default kept, search_mode still applied
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// How a query with several words is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchMode {
    /// The whole query is one pattern.
    #[default]
    Phrase,
    /// Every word must occur in a sonnet.
    And,
    /// Any word may occur in a sonnet.
    Or,
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PHRASE" => Ok(Self::Phrase),
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(Error::InvalidSetting {
                key: "search_mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phrase => "PHRASE",
            Self::And => "AND",
            Self::Or => "OR",
        };
        f.write_str(name)
    }
}

/// Settings read by search and printing.
///
/// ```rust
/// use stanza::{Configuration, SearchMode};
///
/// let config = Configuration::default();
/// assert!(!config.case_sensitive);
/// assert!(config.highlight);
/// assert_eq!(config.max_results, None);
/// assert_eq!(config.search_mode, SearchMode::Phrase);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Compare query and text exactly instead of case-folded.
    pub case_sensitive: bool,
    /// Mark matches with terminal colors.
    pub highlight: bool,
    /// Print at most this many sonnets.
    pub max_results: Option<usize>,
    /// How multi-word queries are evaluated.
    pub search_mode: SearchMode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            highlight: true,
            max_results: None,
            search_mode: SearchMode::Phrase,
        }
    }
}

impl Configuration {
    /// Apply recognised keys of a JSON object, skipping invalid values.
    ///
    /// Returns the number of settings applied.
    pub fn update(&mut self, value: &Value) -> usize {
        let Some(map) = value.as_object() else {
            tracing::warn!("configuration is not a JSON object; ignoring it");
            return 0;
        };
        let mut applied = 0;

        if let Some(v) = map.get("case_sensitive") {
            match v.as_bool() {
                Some(b) => {
                    self.case_sensitive = b;
                    applied += 1;
                }
                None => tracing::warn!(value = %v, "ignoring invalid case_sensitive"),
            }
        }

        if let Some(v) = map.get("highlight") {
            match v.as_bool() {
                Some(b) => {
                    self.highlight = b;
                    applied += 1;
                }
                None => tracing::warn!(value = %v, "ignoring invalid highlight"),
            }
        }

        if let Some(v) = map.get("max_results") {
            let parsed = if v.is_null() {
                Some(None)
            } else {
                v.as_u64().and_then(|n| usize::try_from(n).ok()).map(Some)
            };
            match parsed {
                Some(max) => {
                    self.max_results = max;
                    applied += 1;
                }
                None => tracing::warn!(value = %v, "ignoring invalid max_results"),
            }
        }

        if let Some(v) = map.get("search_mode") {
            match v.as_str().map(SearchMode::from_str) {
                Some(Ok(mode)) => {
                    self.search_mode = mode;
                    applied += 1;
                }
                _ => tracing::warn!(value = %v, "ignoring invalid search_mode"),
            }
        }

        applied
    }

    /// Parse a configuration from JSON text on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `text` is not valid JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let mut config = Self::default();
        config.update(&value);
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`]
    /// if it is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults on any failure.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "no configuration file; using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid configuration; using defaults");
                Self::default()
            }
        }
    }

    /// Write this configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "saved configuration");
        Ok(())
    }
}
