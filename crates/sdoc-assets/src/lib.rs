//! Support asset lookup for sdoc.
//!
//! The viewer needs two things that are not part of any document tree:
//!
//! - the renderer script (`sdoc.js`), shipped as a CommonJS module
//! - the site template directory (`site-template/`), holding `index.html`
//!   and `viewer.css`
//!
//! [`SupportAssets::locate`] searches a fixed list of candidate directories
//! and fails with every searched location when something is missing.

use std::path::{Path, PathBuf};

/// File name of the renderer script.
pub const RENDERER_SCRIPT: &str = "sdoc.js";

/// Directory name of the site template.
pub const TEMPLATE_DIR: &str = "site-template";

/// Template page served at the site root.
pub const INDEX_HTML: &str = "index.html";

/// Template stylesheet for the viewer.
pub const VIEWER_CSS: &str = "viewer.css";

/// File name of the browser-facing renderer script.
pub const WEB_SCRIPT: &str = "sdoc-web.js";

const MODULE_EXPORTS: &str = "module.exports = {";
const WINDOW_EXPORTS: &str = "window.SDOC = {";

/// Support asset lookup error.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Renderer script not present in any candidate directory.
    #[error("could not find sdoc.js; searched:{}", list_paths(.searched))]
    ScriptNotFound {
        /// Every path that was checked.
        searched: Vec<PathBuf>,
    },
    /// No candidate directory holds a complete site template.
    #[error("could not find site-template directory; searched:{}", list_paths(.searched))]
    TemplateNotFound {
        /// Every path that was checked.
        searched: Vec<PathBuf>,
    },
    /// An asset was found but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("\n  {}", p.display()))
        .collect()
}

/// Located renderer script and site template.
#[derive(Debug, Clone)]
pub struct SupportAssets {
    script_path: PathBuf,
    template_dir: PathBuf,
}

impl SupportAssets {
    /// Locate support assets for a source directory.
    ///
    /// Candidate directories, in order:
    /// 1. `configured_dir`, when given
    /// 2. `<source_dir>/src`
    /// 3. `src/` two levels above the directory holding the executable
    ///
    /// The script and the template are looked up independently, so they may
    /// come from different candidates. A template directory only counts when
    /// both `index.html` and `viewer.css` exist in it.
    pub fn locate(source_dir: &Path, configured_dir: Option<&Path>) -> Result<Self, AssetError> {
        let candidates = candidate_dirs(source_dir, configured_dir, install_dir().as_deref());
        Self::locate_in(&candidates)
    }

    fn locate_in(candidates: &[PathBuf]) -> Result<Self, AssetError> {
        let scripts: Vec<PathBuf> = candidates.iter().map(|d| d.join(RENDERER_SCRIPT)).collect();
        let script_path = scripts
            .iter()
            .find(|p| p.is_file())
            .cloned()
            .ok_or_else(|| AssetError::ScriptNotFound {
                searched: scripts.clone(),
            })?;

        let templates: Vec<PathBuf> = candidates.iter().map(|d| d.join(TEMPLATE_DIR)).collect();
        let template_dir = templates
            .iter()
            .find(|d| d.join(INDEX_HTML).is_file() && d.join(VIEWER_CSS).is_file())
            .cloned()
            .ok_or_else(|| AssetError::TemplateNotFound {
                searched: templates.clone(),
            })?;

        tracing::debug!(
            script = %script_path.display(),
            template = %template_dir.display(),
            "Located support assets"
        );

        Ok(Self {
            script_path,
            template_dir,
        })
    }

    /// Path of the renderer script.
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Path of the site template directory.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Renderer script rewritten for direct inclusion in a browser page.
    pub fn web_script(&self) -> Result<String, AssetError> {
        let source = read_to_string(&self.script_path)?;
        Ok(to_web_script(&source))
    }

    /// Read a file from the template directory.
    pub fn template_file(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.template_dir.join(name);
        std::fs::read(&path).map_err(|source| AssetError::Io { path, source })
    }
}

/// Rewrite every CommonJS export of the renderer into a browser global.
///
/// Scripts without the export are returned unchanged.
pub fn to_web_script(source: &str) -> String {
    source.replace(MODULE_EXPORTS, WINDOW_EXPORTS)
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}

fn candidate_dirs(
    source_dir: &Path,
    configured_dir: Option<&Path>,
    install_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(3);
    if let Some(dir) = configured_dir {
        dirs.push(dir.to_path_buf());
    }
    dirs.push(source_dir.join("src"));
    if let Some(dir) = install_dir {
        dirs.push(dir.join("src"));
    }
    dirs
}

/// Installation root: two levels above the executable's directory.
fn install_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent()?.parent()?.parent().map(Path::to_path_buf)
}

fn read_to_string(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_assets(dir: &Path) {
        fs::create_dir_all(dir.join(TEMPLATE_DIR)).unwrap();
        fs::write(
            dir.join(RENDERER_SCRIPT),
            "function render() {}\nmodule.exports = { render };\n",
        )
        .unwrap();
        fs::write(dir.join(TEMPLATE_DIR).join(INDEX_HTML), "<html></html>").unwrap();
        fs::write(dir.join(TEMPLATE_DIR).join(VIEWER_CSS), "body {}").unwrap();
    }

    #[test]
    fn test_locate_in_source_src() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_assets(&temp_dir.path().join("src"));

        let assets = SupportAssets::locate(temp_dir.path(), None).unwrap();

        assert_eq!(
            assets.script_path(),
            temp_dir.path().join("src").join(RENDERER_SCRIPT)
        );
        assert_eq!(
            assets.template_dir(),
            temp_dir.path().join("src").join(TEMPLATE_DIR)
        );
    }

    #[test]
    fn test_configured_dir_takes_precedence() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("docs");
        let vendor = temp_dir.path().join("vendor");
        write_assets(&source.join("src"));
        write_assets(&vendor);

        let assets = SupportAssets::locate(&source, Some(&vendor)).unwrap();

        assert_eq!(assets.script_path(), vendor.join(RENDERER_SCRIPT));
        assert_eq!(assets.template_dir(), vendor.join(TEMPLATE_DIR));
    }

    #[test]
    fn test_incomplete_template_is_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        write_assets(&second);
        fs::create_dir_all(first.join(TEMPLATE_DIR)).unwrap();
        fs::write(first.join(TEMPLATE_DIR).join(INDEX_HTML), "<html></html>").unwrap();

        let assets = SupportAssets::locate_in(&[first, second.clone()]).unwrap();

        assert_eq!(assets.template_dir(), second.join(TEMPLATE_DIR));
    }

    #[test]
    fn test_script_and_template_from_different_candidates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        fs::create_dir_all(&first).unwrap();
        fs::write(first.join(RENDERER_SCRIPT), "").unwrap();
        write_assets(&second);

        let assets = SupportAssets::locate_in(&[first.clone(), second.clone()]).unwrap();

        assert_eq!(assets.script_path(), first.join(RENDERER_SCRIPT));
        assert_eq!(assets.template_dir(), second.join(TEMPLATE_DIR));
    }

    #[test]
    fn test_missing_script_lists_searched_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = temp_dir.path().join("a");
        let second = temp_dir.path().join("b");

        let err = SupportAssets::locate_in(&[first.clone(), second.clone()]).unwrap_err();

        let AssetError::ScriptNotFound { searched } = &err else {
            panic!("expected ScriptNotFound, got {err:?}");
        };
        assert_eq!(
            searched,
            &vec![first.join(RENDERER_SCRIPT), second.join(RENDERER_SCRIPT)]
        );
        let msg = err.to_string();
        assert!(msg.contains(&first.join(RENDERER_SCRIPT).display().to_string()));
        assert!(msg.contains(&second.join(RENDERER_SCRIPT).display().to_string()));
    }

    #[test]
    fn test_missing_template_lists_searched_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("a");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(RENDERER_SCRIPT), "").unwrap();

        let err = SupportAssets::locate_in(std::slice::from_ref(&dir)).unwrap_err();

        assert!(matches!(err, AssetError::TemplateNotFound { .. }));
        assert!(err.to_string().contains(TEMPLATE_DIR));
    }

    #[test]
    fn test_candidate_dirs_order() {
        let dirs = candidate_dirs(
            Path::new("/docs"),
            Some(Path::new("/vendor")),
            Some(Path::new("/opt/sdoc")),
        );
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/vendor"),
                PathBuf::from("/docs/src"),
                PathBuf::from("/opt/sdoc/src"),
            ]
        );
    }

    #[test]
    fn test_candidate_dirs_without_optional() {
        let dirs = candidate_dirs(Path::new("/docs"), None, None);
        assert_eq!(dirs, vec![PathBuf::from("/docs/src")]);
    }

    #[test]
    fn test_web_script_rewrites_export() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_assets(&temp_dir.path().join("src"));
        let assets = SupportAssets::locate(temp_dir.path(), None).unwrap();

        let script = assets.web_script().unwrap();

        assert_eq!(script, "function render() {}\nwindow.SDOC = { render };\n");
    }

    #[test]
    fn test_to_web_script_rewrites_every_export() {
        let source = "module.exports = { a };\nif (x) module.exports = { b };\n";
        assert_eq!(
            to_web_script(source),
            "window.SDOC = { a };\nif (x) window.SDOC = { b };\n"
        );
    }

    #[test]
    fn test_to_web_script_without_export() {
        assert_eq!(to_web_script("var x = 1;"), "var x = 1;");
    }

    #[test]
    fn test_template_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_assets(&temp_dir.path().join("src"));
        let assets = SupportAssets::locate(temp_dir.path(), None).unwrap();

        assert_eq!(assets.template_file(VIEWER_CSS).unwrap(), b"body {}");
        assert!(matches!(
            assets.template_file("missing.html"),
            Err(AssetError::Io { .. })
        ));
    }

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("viewer.css"), "text/css");
        assert_eq!(mime_for("index.html"), "text/html");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }
}
