//! Manifest API endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use sdoc_site::{Manifest, ManifestOptions, build_manifest};

use crate::error::ServerError;
use crate::handlers::conditional_response;
use crate::state::AppState;

/// Handle GET /api/manifest.
///
/// Rescans the source tree on every request.
pub(crate) async fn get_manifest(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let source_dir = state.source_dir.clone();
    let manifest =
        tokio::task::spawn_blocking(move || build_manifest(&source_dir, ManifestOptions::live()))
            .await??;

    let body = serde_json::to_string(&manifest)?;
    let fingerprint = fingerprint(&manifest)?;

    Ok(conditional_response(
        &headers,
        &state.version,
        &fingerprint,
        "application/json",
        body,
    ))
}

/// Serialize everything except the generation timestamp.
fn fingerprint(manifest: &Manifest) -> Result<String, serde_json::Error> {
    serde_json::to_string(&(
        &manifest.root,
        &manifest.root_doc_id,
        &manifest.docs,
        &manifest.css_map,
    ))
}
