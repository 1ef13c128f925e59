//! `sdoc serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use sdoc_assets::SupportAssets;
use sdoc_config::{CliSettings, Config};
use sdoc_server::{run_server, server_config_from_config};

use crate::commands::resolve_source_dir;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Directory containing .sdoc files (overrides config).
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover sdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding sdoc.js and site-template/ (searched first).
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, assets are missing, the tree
    /// has no documents, or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            source_dir: self.source_dir,
            output_dir: None,
            assets_dir: self.assets_dir,
        };

        let mut config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source_dir = resolve_source_dir(&config.docs_resolved.source_dir)?;
        config.docs_resolved.source_dir.clone_from(&source_dir);

        let assets =
            SupportAssets::locate(&source_dir, config.docs_resolved.assets_dir.as_deref())?;

        let count = sdoc_site::collect_files(&source_dir).len();
        if count == 0 {
            return Err(CliError::Validation(format!(
                "No .sdoc files found in {}",
                source_dir.display()
            )));
        }

        tracing::info!(
            source = %source_dir.display(),
            documents = count,
            script = %assets.script_path().display(),
            "Starting server"
        );

        output.info(&format!("Source directory: {}", source_dir.display()));
        output.info(&format!("Found {count} documents"));
        output.highlight(&format!(
            "Serving at http://{}:{}/",
            config.server.host, config.server.port
        ));
        output.info("Press Ctrl-C to stop");

        let server_config = server_config_from_config(&config, assets, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
