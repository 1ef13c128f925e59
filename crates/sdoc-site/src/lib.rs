//! Document collection model for sdoc.
//!
//! This crate turns a directory tree of `.sdoc` files into a [`Manifest`]:
//! - [`collect_files`]: markup discovery, pruning infrastructure directories
//! - [`resolve_cascade`]: per-document settings from `sdoc.config.json`
//!   files between the document and the scan root
//! - [`StyleMap`]: every referenced stylesheet, loaded once
//! - [`choose_root_doc`]: the entry document
//! - [`build_manifest`]: all of the above in one pass
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use sdoc_site::{ManifestOptions, build_manifest};
//!
//! let manifest = build_manifest(Path::new("docs"), ManifestOptions::live())?;
//! for doc in &manifest.docs {
//!     println!("{}: {}", doc.path, doc.title);
//! }
//! # Ok(())
//! # }
//! ```

mod assembler;
mod cascade;
mod dir_config;
mod error;
mod manifest;
mod paths;
mod root_doc;
mod scanner;
mod styles;

pub use assembler::{ManifestOptions, build_manifest};
pub use cascade::{CascadeConfig, merge_chain, resolve_cascade};
pub use dir_config::{CONFIG_FILENAME, DirConfig};
pub use error::ManifestError;
pub use manifest::{DocumentConfig, Manifest, ManifestDocument};
pub use paths::{normalize_path, relative_key};
pub use root_doc::choose_root_doc;
pub use scanner::{DEFAULT_OUTPUT_DIR, EXCLUDED_DIRS, MARKUP_EXTENSION, collect_files, is_markup_file};
pub use styles::StyleMap;
