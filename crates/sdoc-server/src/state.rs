//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;

use sdoc_assets::SupportAssets;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Canonical scan root.
    pub(crate) source_dir: PathBuf,
    /// Renderer script and site template.
    pub(crate) assets: SupportAssets,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
