//! Manifest data handed to the renderer, viewer and server.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::styles::StyleMap;

/// Aggregate description of a document collection.
///
/// Serializes to:
///
/// ```text
/// { root, generatedAt, rootDocId, docs: [...], cssMap: { path: css } }
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Name of the scanned root directory.
    pub root: String,
    /// Generation time.
    pub generated_at: DateTime<Utc>,
    /// Id of the entry document.
    pub root_doc_id: Option<String>,
    /// Documents ordered by path.
    pub docs: Vec<ManifestDocument>,
    /// Referenced stylesheets.
    pub css_map: StyleMap,
}

impl Manifest {
    /// Look up a document by id.
    #[must_use]
    pub fn document(&self, id: &str) -> Option<&ManifestDocument> {
        self.docs.iter().find(|doc| doc.id == id)
    }
}

/// One markup document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManifestDocument {
    /// Unique key: path relative to the scan root with `/` separators.
    pub id: String,
    /// Same as `id`.
    pub path: String,
    /// Parent directory of `path`, `""` for root-level documents.
    pub dir: String,
    /// Title from the first heading.
    pub title: String,
    /// Raw source text (bundle mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Resolved presentation settings.
    pub config: DocumentConfig,
}

/// Presentation settings resolved for a document.
///
/// Style keys index into [`Manifest::css_map`]. `style_key` and
/// `style_append_keys` come from the directory cascade; the `meta_*` keys
/// come from the document's own `@meta` section and take precedence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    /// Header fragment.
    pub header: String,
    /// Footer fragment.
    pub footer: String,
    /// Replacement stylesheet from the cascade.
    pub style_key: Option<String>,
    /// Extra stylesheets from the cascade, root directory first.
    pub style_append_keys: Vec<String>,
    /// Replacement stylesheet declared by the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_style_key: Option<String>,
    /// Extra stylesheets declared by the document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta_style_append_keys: Vec<String>,
}

impl DocumentConfig {
    /// Stylesheet that replaces the renderer's default, if any.
    ///
    /// The document's own declaration wins over the directory cascade.
    #[must_use]
    pub fn effective_style_key(&self) -> Option<&str> {
        self.meta_style_key
            .as_deref()
            .or(self.style_key.as_deref())
    }

    /// Stylesheets appended after the base style: cascade first, then the
    /// document's own.
    pub fn effective_append_keys(&self) -> impl Iterator<Item = &str> {
        self.style_append_keys
            .iter()
            .chain(&self.meta_style_append_keys)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serialization_without_content() {
        let doc = ManifestDocument {
            id: "guide/intro.sdoc".to_owned(),
            path: "guide/intro.sdoc".to_owned(),
            dir: "guide".to_owned(),
            title: "Intro".to_owned(),
            content: None,
            config: DocumentConfig {
                header: "H".to_owned(),
                ..DocumentConfig::default()
            },
        };

        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["id"], "guide/intro.sdoc");
        assert_eq!(json["dir"], "guide");
        assert!(json.get("content").is_none());
        assert_eq!(json["config"]["header"], "H");
        assert_eq!(json["config"]["footer"], "");
        assert!(json["config"]["styleKey"].is_null());
        assert_eq!(json["config"]["styleAppendKeys"], serde_json::json!([]));
        assert!(json["config"].get("metaStyleKey").is_none());
        assert!(json["config"].get("metaStyleAppendKeys").is_none());
    }

    #[test]
    fn test_manifest_serialization_keys() {
        let manifest = Manifest {
            root: "docs".to_owned(),
            generated_at: Utc::now(),
            root_doc_id: None,
            docs: Vec::new(),
            css_map: StyleMap::default(),
        };

        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["root"], "docs");
        assert!(json["generatedAt"].is_string());
        assert!(json["rootDocId"].is_null());
        assert_eq!(json["docs"], serde_json::json!([]));
        assert_eq!(json["cssMap"], serde_json::json!({}));
    }

    #[test]
    fn test_effective_style_prefers_document() {
        let config = DocumentConfig {
            style_key: Some("dir.css".to_owned()),
            style_append_keys: vec!["a.css".to_owned()],
            meta_style_key: Some("doc.css".to_owned()),
            meta_style_append_keys: vec!["b.css".to_owned()],
            ..DocumentConfig::default()
        };

        assert_eq!(config.effective_style_key(), Some("doc.css"));
        assert_eq!(
            config.effective_append_keys().collect::<Vec<_>>(),
            vec!["a.css", "b.css"]
        );
    }

    #[test]
    fn test_effective_style_falls_back_to_cascade() {
        let config = DocumentConfig {
            style_key: Some("dir.css".to_owned()),
            ..DocumentConfig::default()
        };

        assert_eq!(config.effective_style_key(), Some("dir.css"));
    }
}
