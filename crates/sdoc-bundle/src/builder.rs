//! Static site builder.

use std::path::{Path, PathBuf};

use sdoc_assets::{AssetError, INDEX_HTML, SupportAssets, VIEWER_CSS, WEB_SCRIPT};
use sdoc_site::{Manifest, ManifestError, ManifestOptions, build_manifest};

/// File name of the data script holding the manifest.
pub const DATA_SCRIPT: &str = "sdoc-data.js";

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Assets(#[from] AssetError),
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of documents written into the bundle.
    pub documents: usize,
    /// Directory holding the bundle.
    pub output_dir: PathBuf,
}

/// Builds a self-contained viewer bundle from a source tree.
pub struct StaticSiteBuilder {
    source_dir: PathBuf,
    output_dir: PathBuf,
    assets: SupportAssets,
}

impl StaticSiteBuilder {
    /// Create a builder writing the bundle for `source_dir` into `output_dir`.
    pub fn new(source_dir: PathBuf, output_dir: PathBuf, assets: SupportAssets) -> Self {
        Self {
            source_dir,
            output_dir,
            assets,
        }
    }

    /// Write the bundle.
    ///
    /// The output directory is created if missing. Existing bundle files are
    /// overwritten; anything else in the directory is left alone.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        create_dir(&self.output_dir)?;

        let web_script = self.assets.web_script()?;
        self.write(WEB_SCRIPT, web_script.as_bytes())?;

        let manifest = build_manifest(&self.source_dir, ManifestOptions::bundle())?;
        self.write(DATA_SCRIPT, data_script(&manifest)?.as_bytes())?;

        for name in [VIEWER_CSS, INDEX_HTML] {
            let bytes = self.assets.template_file(name)?;
            self.write(name, &bytes)?;
        }

        tracing::info!(
            documents = manifest.docs.len(),
            output = %self.output_dir.display(),
            "Bundle written"
        );

        Ok(BuildReport {
            documents: manifest.docs.len(),
            output_dir: self.output_dir.clone(),
        })
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<(), BuildError> {
        let path = self.output_dir.join(name);
        std::fs::write(&path, contents).map_err(|source| BuildError::Io { path, source })
    }
}

/// Render the manifest as a script assigning `window.SDOC_DATA`.
fn data_script(manifest: &Manifest) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(manifest)?;
    Ok(format!("window.SDOC_DATA = {json};"))
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
