//! Stylesheet loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::paths::{normalize_path, relative_key};

/// Stylesheet texts keyed by their path relative to the scan root.
///
/// Each stylesheet is loaded once no matter how many documents reference it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// Load every stylesheet in `paths` that lives inside `root`.
    ///
    /// Paths outside the root, duplicates and unreadable files are skipped.
    #[must_use]
    pub fn load<'a>(paths: impl IntoIterator<Item = &'a Path>, root: &Path) -> Self {
        let mut styles = BTreeMap::new();
        for path in paths {
            let Some(key) = relative_key(path, root) else {
                continue;
            };
            if styles.contains_key(&key) {
                continue;
            }
            match std::fs::read_to_string(path) {
                Ok(css) => {
                    styles.insert(key, css);
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable stylesheet");
                }
            }
        }
        Self(styles)
    }

    /// Stylesheet text by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of loaded stylesheets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no stylesheet was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Resolve a stylesheet reference against `base`, keeping it only if it is
/// an existing regular file.
#[must_use]
pub(crate) fn existing_stylesheet(base: &Path, reference: &Path) -> Option<PathBuf> {
    let path = normalize_path(&base.join(reference));
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_load_dedups_by_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.css"), "body { color: red; }").unwrap();
        let first = root.join("a.css");
        let second = root.join("sub/../a.css");
        let normalized = normalize_path(&second);

        let styles = StyleMap::load([first.as_path(), normalized.as_path()], root);

        assert_eq!(styles.len(), 1);
        assert_eq!(styles.get("a.css"), Some("body { color: red; }"));
    }

    #[test]
    fn test_load_skips_outside_root_and_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(root.join("css")).unwrap();
        fs::write(temp_dir.path().join("outside.css"), "x").unwrap();
        fs::write(root.join("css/in.css"), "y").unwrap();
        let outside = temp_dir.path().join("outside.css");
        let inside = root.join("css/in.css");
        let missing = root.join("missing.css");

        let styles = StyleMap::load(
            [outside.as_path(), inside.as_path(), missing.as_path()],
            &root,
        );

        assert_eq!(styles.keys().collect::<Vec<_>>(), vec!["css/in.css"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("b.css"), "b").unwrap();
        fs::write(temp_dir.path().join("a.css"), "a").unwrap();
        let b = temp_dir.path().join("b.css");
        let a = temp_dir.path().join("a.css");

        let styles = StyleMap::load([b.as_path(), a.as_path()], temp_dir.path());
        let json = serde_json::to_string(&styles).unwrap();

        assert_eq!(json, r#"{"a.css":"a","b.css":"b"}"#);
    }

    #[test]
    fn test_existing_stylesheet_requires_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("dir.css")).unwrap();
        fs::write(root.join("real.css"), "").unwrap();

        assert!(existing_stylesheet(root, Path::new("dir.css")).is_none());
        assert!(existing_stylesheet(root, Path::new("nope.css")).is_none());
        assert_eq!(
            existing_stylesheet(root, Path::new("./real.css")),
            Some(root.join("real.css"))
        );
    }
}
