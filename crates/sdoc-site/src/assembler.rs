//! Manifest assembly.
//!
//! Builds a [`Manifest`] from a source tree in four steps:
//! 1. Discover markup files
//! 2. Per document (in parallel): read, extract title and `@meta` styles,
//!    resolve the directory cascade
//! 3. Load every referenced stylesheet once into the style map
//! 4. Choose the entry document

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use sdoc_parser::{extract_meta, extract_title, parse};

use crate::cascade::resolve_cascade;
use crate::error::ManifestError;
use crate::manifest::{DocumentConfig, Manifest, ManifestDocument};
use crate::paths::{parent_key, relative_key};
use crate::root_doc::choose_root_doc;
use crate::scanner::collect_files;
use crate::styles::{StyleMap, existing_stylesheet};

/// What to include in an assembled manifest.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManifestOptions {
    /// Embed each document's source text.
    pub include_content: bool,
}

impl ManifestOptions {
    /// Self-contained manifest for static bundles.
    #[must_use]
    pub fn bundle() -> Self {
        Self {
            include_content: true,
        }
    }

    /// Manifest without document bodies; content is fetched on demand.
    #[must_use]
    pub fn live() -> Self {
        Self {
            include_content: false,
        }
    }
}

/// A document plus the stylesheet files it references.
struct LoadedDocument {
    document: ManifestDocument,
    stylesheets: Vec<PathBuf>,
}

/// Assemble the manifest for the tree at `source_dir`.
///
/// Documents that cannot be read, malformed directory configs and missing
/// stylesheets are skipped rather than failing the build.
///
/// # Errors
///
/// Returns an error if `source_dir` cannot be resolved or is not a directory.
pub fn build_manifest(
    source_dir: &Path,
    options: ManifestOptions,
) -> Result<Manifest, ManifestError> {
    let start = Instant::now();

    let root = std::fs::canonicalize(source_dir).map_err(|source| ManifestError::Io {
        path: source_dir.to_path_buf(),
        source,
    })?;
    if !root.is_dir() {
        return Err(ManifestError::NotADirectory(source_dir.to_path_buf()));
    }

    let files = collect_files(&root);
    let loaded: Vec<LoadedDocument> = files
        .par_iter()
        .filter_map(|path| load_document(path, &root, options))
        .collect();

    let css_map = StyleMap::load(
        loaded
            .iter()
            .flat_map(|doc| doc.stylesheets.iter().map(PathBuf::as_path)),
        &root,
    );
    let docs: Vec<ManifestDocument> = loaded.into_iter().map(|doc| doc.document).collect();
    let root_doc_id = choose_root_doc(docs.iter().map(|doc| doc.id.as_str())).map(str::to_owned);

    tracing::debug!(
        documents = docs.len(),
        stylesheets = css_map.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Manifest assembled"
    );

    Ok(Manifest {
        root: root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        generated_at: Utc::now(),
        root_doc_id,
        docs,
        css_map,
    })
}

fn load_document(path: &Path, root: &Path, options: ManifestOptions) -> Option<LoadedDocument> {
    let id = relative_key(path, root)?;
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable document");
            return None;
        }
    };

    let mut stylesheets = Vec::new();
    let mut track = |stylesheet: PathBuf| {
        let key = relative_key(&stylesheet, root);
        stylesheets.push(stylesheet);
        key
    };

    let cascade = resolve_cascade(path, root);
    let style_key = cascade
        .style
        .filter(|p| p.is_file())
        .and_then(&mut track);
    let style_append_keys: Vec<String> = cascade
        .style_append
        .into_iter()
        .filter(|p| p.is_file())
        .filter_map(&mut track)
        .collect();

    let doc_dir = path.parent().unwrap_or(root);
    let meta = extract_meta(&parse(&content).nodes);
    let meta_style_key = meta
        .style
        .and_then(|reference| existing_stylesheet(doc_dir, Path::new(&reference)))
        .and_then(&mut track);
    let meta_style_append_keys: Vec<String> = meta
        .style_append
        .iter()
        .filter_map(|reference| existing_stylesheet(doc_dir, Path::new(reference)))
        .filter_map(&mut track)
        .collect();

    let document = ManifestDocument {
        path: id.clone(),
        dir: parent_key(&id).to_owned(),
        title: extract_title(&content),
        content: options.include_content.then_some(content),
        config: DocumentConfig {
            header: cascade.header,
            footer: cascade.footer,
            style_key,
            style_append_keys,
            meta_style_key,
            meta_style_append_keys,
        },
        id,
    };

    Some(LoadedDocument {
        document,
        stylesheets,
    })
}
