//! HTTP request handlers.

pub(crate) mod assets;
pub(crate) mod content;
pub(crate) mod manifest;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};

/// Build a cacheable response, or 304 when the client already has `body`.
///
/// The `ETag` is computed from `etag_source`, which may differ from `body`
/// when the body carries volatile fields.
pub(crate) fn conditional_response(
    headers: &HeaderMap,
    version: &str,
    etag_source: &str,
    content_type: &'static str,
    body: String,
) -> Response {
    let etag = compute_etag(version, etag_source);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CONTENT_TYPE, content_type.to_owned()),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        body,
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
