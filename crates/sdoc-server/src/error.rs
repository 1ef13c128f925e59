//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Required query parameter missing or empty.
    #[error("Missing query parameter: {0}")]
    MissingParam(&'static str),

    /// Requested path is outside the scan root or not a markup file.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Requested document could not be read.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Manifest assembly failed.
    #[error("Manifest error: {0}")]
    Manifest(#[from] sdoc_site::ManifestError),

    /// Support asset could not be read.
    #[error("Asset error: {0}")]
    Asset(#[from] sdoc_assets::AssetError),

    /// Response serialization failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Blocking task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MissingParam(name) => (
                StatusCode::BAD_REQUEST,
                json!({"error": format!("Missing {name} parameter")}),
            ),
            Self::Forbidden(path) => (
                StatusCode::FORBIDDEN,
                json!({"error": "Forbidden", "path": path}),
            ),
            Self::DocumentNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Document not found", "path": path}),
            ),
            Self::Manifest(_) | Self::Asset(_) | Self::Json(_) | Self::Task(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": self.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
