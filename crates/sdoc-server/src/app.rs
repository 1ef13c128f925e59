//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/manifest", get(handlers::manifest::get_manifest))
        .route("/api/content", get(handlers::content::get_content));

    let asset_routes = Router::new()
        .route("/", get(handlers::assets::get_index))
        .route("/index.html", get(handlers::assets::get_index))
        .route("/viewer.css", get(handlers::assets::get_viewer_css))
        .route("/sdoc-web.js", get(handlers::assets::get_web_script));

    let [csp, content_type_options, frame_options] =
        security::SECURITY_HEADERS.map(|(name, value)| security::header_layer(name, value));

    Router::new()
        .merge(api_routes)
        .merge(asset_routes)
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(csp)
                .layer(content_type_options)
                .layer(frame_options),
        )
        .with_state(state)
}
