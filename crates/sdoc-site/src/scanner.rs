//! Markup file discovery by filesystem walking.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Extension of markup files (case-sensitive).
pub const MARKUP_EXTENSION: &str = "sdoc";

/// Default name of the static bundle directory inside a source tree.
pub const DEFAULT_OUTPUT_DIR: &str = "_sdoc_site";

/// Directory names never descended into.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".vscode",
    DEFAULT_OUTPUT_DIR,
    "web",
    "out",
    "__pycache__",
];

/// Check whether a path names a markup file by extension.
#[must_use]
pub fn is_markup_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(MARKUP_EXTENSION))
}

/// Collect every markup file under `root`, sorted by path.
///
/// Hidden files are included; only [`EXCLUDED_DIRS`] are pruned. Returns an
/// empty list when `root` does not exist. Unreadable entries are skipped.
#[must_use]
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let excluded = entry
                .file_name()
                .to_str()
                .is_some_and(|name| EXCLUDED_DIRS.contains(&name));
            entry.depth() == 0 || !(is_dir && excluded)
        })
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|path| is_markup_file(path) && path.is_file())
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn rel(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_collects_nested_markup_files_sorted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("guide/advanced")).unwrap();
        fs::write(root.join("zeta.sdoc"), "# Z").unwrap();
        fs::write(root.join("alpha.sdoc"), "# A").unwrap();
        fs::write(root.join("guide/index.sdoc"), "# G").unwrap();
        fs::write(root.join("guide/advanced/tips.sdoc"), "# T").unwrap();
        fs::write(root.join("notes.md"), "# not markup").unwrap();

        let files = collect_files(root);

        assert_eq!(
            rel(&files, root),
            vec![
                "alpha.sdoc",
                "guide/advanced/tips.sdoc",
                "guide/index.sdoc",
                "zeta.sdoc"
            ]
        );
    }

    #[test]
    fn test_skips_excluded_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        for dir in EXCLUDED_DIRS {
            fs::create_dir_all(root.join(dir)).unwrap();
            fs::write(root.join(dir).join("hidden.sdoc"), "# H").unwrap();
        }
        fs::create_dir_all(root.join("docs/node_modules")).unwrap();
        fs::write(root.join("docs/node_modules/dep.sdoc"), "# D").unwrap();
        fs::write(root.join("docs/kept.sdoc"), "# K").unwrap();

        let files = collect_files(root);

        assert_eq!(rel(&files, root), vec!["docs/kept.sdoc"]);
    }

    #[test]
    fn test_root_named_like_excluded_dir_is_scanned() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("out");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("page.sdoc"), "# P").unwrap();

        assert_eq!(collect_files(&root).len(), 1);
    }

    #[test]
    fn test_includes_hidden_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(".draft.sdoc"), "# D").unwrap();

        assert_eq!(collect_files(temp_dir.path()).len(), 1);
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("upper.SDOC"), "# U").unwrap();

        assert!(collect_files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_missing_root() {
        assert!(collect_files(Path::new("/nonexistent/sdoc/root")).is_empty());
    }

    #[test]
    fn test_is_markup_file() {
        assert!(is_markup_file(Path::new("a/b.sdoc")));
        assert!(!is_markup_file(Path::new("a/b.sdoc.bak")));
        assert!(!is_markup_file(Path::new("a/sdoc")));
    }
}
