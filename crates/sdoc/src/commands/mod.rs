//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod parse;
pub(crate) mod serve;

pub(crate) use build::BuildArgs;
pub(crate) use parse::ParseArgs;
pub(crate) use serve::ServeArgs;

use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve the configured source directory, failing if it is not a directory.
fn resolve_source_dir(source_dir: &Path) -> Result<PathBuf, CliError> {
    std::fs::canonicalize(source_dir)
        .ok()
        .filter(|p| p.is_dir())
        .ok_or_else(|| {
            CliError::Validation(format!("{} is not a directory", source_dir.display()))
        })
}
