//! Viewer page, stylesheet and renderer script.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use sdoc_assets::{INDEX_HTML, VIEWER_CSS, mime_for};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET / and GET /index.html.
pub(crate) async fn get_index(State(state): State<Arc<AppState>>) -> Result<Response, ServerError> {
    template_response(&state, INDEX_HTML)
}

/// Handle GET /viewer.css.
pub(crate) async fn get_viewer_css(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    template_response(&state, VIEWER_CSS)
}

/// Handle GET /sdoc-web.js.
pub(crate) async fn get_web_script(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let script = state.assets.web_script()?;
    Ok((
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        script,
    )
        .into_response())
}

/// Template files are read on every request so edits show up on reload.
fn template_response(state: &AppState, name: &str) -> Result<Response, ServerError> {
    let bytes = state.assets.template_file(name)?;
    let content_type = format!("{}; charset=utf-8", mime_for(name));
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}
