//! Directory configuration cascade.
//!
//! A document's settings come from every `sdoc.config.json` between its own
//! directory and the scan root. Directories are applied from the root down
//! to the document, so the closest directory wins for scalar fields and
//! appends last for `styleAppend`.

use std::path::{Path, PathBuf};

use crate::dir_config::DirConfig;
use crate::paths::normalize_path;

/// Settings resolved for one document.
///
/// Style paths are absolute, resolved against the directory that declared
/// them, and not yet checked for existence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeConfig {
    /// Replacement stylesheet from the closest declaring directory.
    pub style: Option<PathBuf>,
    /// Extra stylesheets, root directory first.
    pub style_append: Vec<PathBuf>,
    /// Header fragment from the closest declaring directory.
    pub header: String,
    /// Footer fragment from the closest declaring directory.
    pub footer: String,
}

/// Build the ancestor chain for a directory.
///
/// Returns directories from `start` upwards, ending with `root` when `start`
/// is inside it, or with the filesystem root otherwise.
/// E.g., `/docs/a/b` with root `/docs` → `["/docs/a/b", "/docs/a", "/docs"]`
#[must_use]
pub(crate) fn ancestor_dirs(start: &Path, root: &Path) -> Vec<PathBuf> {
    let mut chain = Vec::new();
    let mut current = Some(start);
    while let Some(dir) = current {
        chain.push(dir.to_path_buf());
        if dir == root {
            break;
        }
        current = dir.parent().filter(|parent| *parent != dir);
    }
    chain
}

/// Merge a chain of directory configs ordered from root to leaf.
#[must_use]
pub fn merge_chain<'a>(chain: impl IntoIterator<Item = (&'a Path, &'a DirConfig)>) -> CascadeConfig {
    let mut merged = CascadeConfig::default();
    for (dir, config) in chain {
        if let Some(style) = &config.style {
            merged.style = Some(normalize_path(&dir.join(style)));
        }
        merged
            .style_append
            .extend(config.style_append.iter().map(|p| normalize_path(&dir.join(p))));
        if let Some(header) = &config.header {
            merged.header.clone_from(header);
        }
        if let Some(footer) = &config.footer {
            merged.footer.clone_from(footer);
        }
    }
    merged
}

/// Resolve the cascaded configuration for the document at `file`.
///
/// Unreadable or malformed config files are skipped without affecting the
/// other directories in the chain.
#[must_use]
pub fn resolve_cascade(file: &Path, root: &Path) -> CascadeConfig {
    let Some(start) = file.parent() else {
        return CascadeConfig::default();
    };

    let mut found: Vec<(PathBuf, DirConfig)> = ancestor_dirs(start, root)
        .into_iter()
        .filter_map(|dir| DirConfig::load(&dir).map(|config| (dir, config)))
        .collect();
    found.reverse();

    merge_chain(found.iter().map(|(dir, config)| (dir.as_path(), config)))
}
