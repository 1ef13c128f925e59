//! `sdoc build` command implementation.

use std::path::PathBuf;

use clap::Args;
use sdoc_assets::SupportAssets;
use sdoc_bundle::StaticSiteBuilder;
use sdoc_config::{CliSettings, Config};
use sdoc_site::DEFAULT_OUTPUT_DIR;

use crate::commands::resolve_source_dir;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Directory containing .sdoc files (overrides config).
    source_dir: Option<PathBuf>,

    /// Output directory (default: _sdoc_site/ inside the source directory).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover sdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding sdoc.js and site-template/ (searched first).
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, assets are missing, or the
    /// bundle cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: None,
            port: None,
            source_dir: self.source_dir,
            output_dir: self.output,
            assets_dir: self.assets_dir,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source_dir = resolve_source_dir(&config.docs_resolved.source_dir)?;
        let output_dir = match &config.docs_resolved.output_dir {
            Some(dir) => std::path::absolute(dir)?,
            None => source_dir.join(DEFAULT_OUTPUT_DIR),
        };

        let assets =
            SupportAssets::locate(&source_dir, config.docs_resolved.assets_dir.as_deref())?;

        tracing::info!(
            source = %source_dir.display(),
            output = %output_dir.display(),
            config = ?config.config_path,
            "Building static bundle"
        );

        let report = StaticSiteBuilder::new(source_dir, output_dir, assets).build()?;

        output.success(&format!(
            "Built {} documents \u{2192} {}",
            report.documents,
            report.output_dir.display()
        ));

        Ok(())
    }
}
