//! `sdoc parse` command implementation.

use std::path::PathBuf;

use clap::Args;
use sdoc_parser::{ParseResult, extract_meta, extract_title, parse};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the parse command.
#[derive(Args)]
pub(crate) struct ParseArgs {
    /// Document to parse.
    file: PathBuf,

    /// Print only the styles declared in the `@meta` section.
    #[arg(long)]
    meta: bool,
}

/// JSON shape of a parsed document.
#[derive(Serialize)]
struct ParsedDocument {
    title: String,
    #[serde(flatten)]
    result: ParseResult,
}

impl ParseArgs {
    /// Execute the parse command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let text = std::fs::read_to_string(&self.file).map_err(|e| {
            CliError::Validation(format!("Cannot read {}: {e}", self.file.display()))
        })?;

        let json = render(&text, self.meta)?;
        output.result(&json)?;

        Ok(())
    }
}

fn render(text: &str, meta_only: bool) -> Result<String, serde_json::Error> {
    let result = parse(text);
    if meta_only {
        return serde_json::to_string_pretty(&extract_meta(&result.nodes));
    }
    serde_json::to_string_pretty(&ParsedDocument {
        title: extract_title(text),
        result,
    })
}
