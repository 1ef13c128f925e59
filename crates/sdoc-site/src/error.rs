//! Manifest assembly errors.

use std::path::PathBuf;

/// Error returned when a manifest cannot be assembled at all.
///
/// Problems with individual documents, config files or stylesheets never
/// surface here; they are skipped.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The scan root does not exist or is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The scan root could not be resolved.
    #[error("Cannot resolve {}: {source}", path.display())]
    Io {
        /// Scan root as given.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
