//! Document content API endpoint.
//!
//! Returns the raw markup of one document. Rendering happens in the browser.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use sdoc_site::{is_markup_file, normalize_path};
use serde::Deserialize;

use crate::error::ServerError;
use crate::handlers::conditional_response;
use crate::state::AppState;

/// Query parameters for GET /api/content.
#[derive(Deserialize)]
pub(crate) struct ContentQuery {
    /// Document id, relative to the scan root.
    path: Option<String>,
}

/// Handle GET /api/content?path=<id>.
pub(crate) async fn get_content(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ContentQuery>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let requested = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or(ServerError::MissingParam("path"))?;

    let file = resolve_document(&state.source_dir, &requested)?;
    let content = tokio::fs::read_to_string(&file)
        .await
        .map_err(|_| ServerError::DocumentNotFound(requested))?;

    Ok(conditional_response(
        &headers,
        &state.version,
        &content,
        "text/plain; charset=utf-8",
        content.clone(),
    ))
}

/// Map a requested id to a file inside `root`.
///
/// `root` must be canonical. The path is checked lexically first, then again
/// after resolving symlinks: the link target must also stay inside the tree
/// and carry the markup extension.
fn resolve_document(root: &Path, requested: &str) -> Result<PathBuf, ServerError> {
    let forbidden = || ServerError::Forbidden(requested.to_owned());

    let candidate = normalize_path(&root.join(requested));
    if !candidate.starts_with(root) || candidate == root {
        return Err(forbidden());
    }
    if !is_markup_file(&candidate) {
        return Err(forbidden());
    }

    let resolved = std::fs::canonicalize(&candidate)
        .map_err(|_| ServerError::DocumentNotFound(requested.to_owned()))?;
    if !resolved.starts_with(root) || !is_markup_file(&resolved) {
        return Err(forbidden());
    }

    Ok(resolved)
}
