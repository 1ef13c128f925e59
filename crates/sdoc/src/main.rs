//! sdoc CLI - browse and bundle `.sdoc` document trees.
//!
//! Provides commands for:
//! - `serve`: Start the live viewer server
//! - `build`: Write a self-contained static viewer bundle
//! - `parse`: Dump the structure of a single document as JSON

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ParseArgs, ServeArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// sdoc - structured document viewer.
#[derive(Parser)]
#[command(name = "sdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the live viewer server.
    Serve(ServeArgs),
    /// Build a static viewer bundle.
    Build(BuildArgs),
    /// Print the parsed structure of a document.
    Parse(ParseArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Serve(args) => args.verbose,
            Self::Build(args) => args.verbose,
            Self::Parse(_) => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(error::CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Build(args) => args.execute(),
        Commands::Parse(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
