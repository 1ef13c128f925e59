//! Path normalization helpers.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without touching the filesystem.
///
/// `..` at the filesystem root is dropped; leading `..` of a relative path
/// is kept.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// Express `path` relative to `root` with `/` separators.
///
/// Returns `None` when `path` is not inside `root` or equals it.
#[must_use]
pub fn relative_key(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Parent directory of a `/`-separated key, `""` for root-level entries.
#[must_use]
pub fn parent_key(key: &str) -> &str {
    key.rsplit_once('/').map_or("", |(dir, _)| dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_dots() {
        assert_eq!(
            normalize_path(Path::new("/docs/a/./b/../style.css")),
            PathBuf::from("/docs/a/style.css")
        );
    }

    #[test]
    fn test_normalize_stops_at_root() {
        assert_eq!(
            normalize_path(Path::new("/docs/../../etc/passwd")),
            PathBuf::from("/etc/passwd")
        );
    }

    #[test]
    fn test_normalize_relative_keeps_leading_parent() {
        assert_eq!(
            normalize_path(Path::new("../../a/b/..")),
            PathBuf::from("../../a")
        );
    }

    #[test]
    fn test_relative_key() {
        let root = Path::new("/docs");
        assert_eq!(
            relative_key(Path::new("/docs/a/b.sdoc"), root),
            Some("a/b.sdoc".to_owned())
        );
        assert_eq!(relative_key(Path::new("/other/b.sdoc"), root), None);
        assert_eq!(relative_key(Path::new("/docs"), root), None);
    }

    #[test]
    fn test_relative_key_is_component_wise() {
        assert_eq!(
            relative_key(Path::new("/docs2/x.css"), Path::new("/docs")),
            None
        );
    }

    #[test]
    fn test_parent_key() {
        assert_eq!(parent_key("a/b/c.sdoc"), "a/b");
        assert_eq!(parent_key("c.sdoc"), "");
    }
}
