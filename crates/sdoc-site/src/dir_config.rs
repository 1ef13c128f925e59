//! Per-directory `sdoc.config.json` files.
//!
//! ```json
//! {
//!   "style": "theme.css",
//!   "styleAppend": ["extra.css", "print.css"],
//!   "header": "<nav>Docs</nav>",
//!   "footer": "<small>© Example</small>"
//! }
//! ```
//!
//! Every field is optional. Fields with the wrong JSON type are ignored one
//! by one, so a single bad value does not discard the rest of the file.

use std::path::Path;

use serde_json::{Map, Value};

/// Name of the per-directory configuration file.
pub const CONFIG_FILENAME: &str = "sdoc.config.json";

/// Settings declared by one directory's configuration file.
///
/// Style paths are kept as written, relative to the declaring directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirConfig {
    /// Replacement stylesheet.
    pub style: Option<String>,
    /// Extra stylesheets, in declaration order.
    pub style_append: Vec<String>,
    /// Header fragment.
    pub header: Option<String>,
    /// Footer fragment.
    pub footer: Option<String>,
}

impl DirConfig {
    /// Parse configuration from JSON text.
    ///
    /// A document that is valid JSON but not an object yields an empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(value.as_object().map(Self::from_map).unwrap_or_default())
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let string_field = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        let style_append = match map.get("styleAppend") {
            Some(Value::String(path)) => vec![path.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            style: string_field("style").filter(|s| !s.is_empty()),
            style_append: style_append.into_iter().filter(|s| !s.is_empty()).collect(),
            header: string_field("header"),
            footer: string_field("footer"),
        }
    }

    /// Load the configuration file of `dir`, if there is a usable one.
    ///
    /// Missing, unreadable and malformed files all yield `None`.
    #[must_use]
    pub fn load(dir: &Path) -> Option<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read directory config");
                return None;
            }
        };

        match Self::from_json(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Skipping malformed directory config");
                None
            }
        }
    }
}
