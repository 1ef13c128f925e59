//! Style directives from the reserved `@meta` section.
//!
//! ```text
//! # Meta @meta {
//!   ## Style {
//!     themes/dark.css
//!   }
//!   ## Style Append {
//!     extra.css
//!     print.css
//!   }
//! }
//! ```

use serde::Serialize;

use crate::node::Node;

/// Id of the reserved metadata section (matched case-insensitively).
pub const META_ID: &str = "meta";

/// Stylesheet references declared inside a document.
///
/// Paths are returned exactly as written; resolving them against the
/// document's directory is the caller's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaStyles {
    /// Replacement stylesheet.
    pub style: Option<String>,
    /// Extra stylesheets, in source order.
    pub style_append: Vec<String>,
}

impl MetaStyles {
    /// True when the document declared no stylesheets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.style_append.is_empty()
    }
}

/// Read style directives from the first top-level `@meta` section.
///
/// Each direct child is keyed by its trimmed, lowercased title:
/// - `style`: first non-blank line is the stylesheet path
/// - `styleappend` / `style-append`: every non-blank line is a path
///
/// Other children, and sections nested deeper, are ignored.
#[must_use]
pub fn extract_meta(nodes: &[Node]) -> MetaStyles {
    let Some(meta) = nodes.iter().find(|node| node.has_id(META_ID)) else {
        return MetaStyles::default();
    };

    let mut styles = MetaStyles::default();
    for child in &meta.children {
        let key = child.title.trim().to_lowercase();
        let mut lines = child.text_lines().peekable();
        if lines.peek().is_none() {
            continue;
        }

        match key.as_str() {
            "style" => styles.style = lines.next().map(str::to_owned),
            "styleappend" | "style-append" => {
                styles.style_append.extend(lines.map(str::to_owned));
            }
            _ => {}
        }
    }
    styles
}
