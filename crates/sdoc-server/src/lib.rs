//! Live HTTP server for sdoc document trees.
//!
//! Serves the viewer page, its stylesheet and renderer script, plus two API
//! endpoints that read the source tree on every request:
//! - `GET /api/manifest`: the document manifest without bodies
//! - `GET /api/content?path=<id>`: the raw text of one document
//!
//! Edits on disk show up on the next request; nothing is cached server-side.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::{Path, PathBuf};
//! use sdoc_assets::SupportAssets;
//! use sdoc_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 4070,
//!         source_dir: PathBuf::from("docs"),
//!         assets: SupportAssets::locate(Path::new("docs"), None).unwrap(),
//!         version: "0.1.0".to_owned(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use sdoc_assets::SupportAssets;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory scanned for `.sdoc` files.
    pub source_dir: PathBuf,
    /// Located renderer script and site template.
    pub assets: SupportAssets,
    /// Application version (for cache invalidation).
    pub version: String,
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the source directory cannot be resolved, the address
/// is invalid, or the listener fails to bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = std::fs::canonicalize(&config.source_dir)?;

    let state = Arc::new(AppState {
        source_dir,
        assets: config.assets,
        version: config.version,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the application config.
#[must_use]
pub fn server_config_from_config(
    config: &sdoc_config::Config,
    assets: SupportAssets,
    version: String,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        assets,
        version,
    }
}
