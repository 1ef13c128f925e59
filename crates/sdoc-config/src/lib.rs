//! Configuration management for sdoc.
//!
//! Parses `sdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 4070
//!
//! [docs]
//! source_dir = "docs"
//!
//! [build]
//! output_dir = "dist/site"
//!
//! [assets]
//! dir = "vendor/sdoc"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `server.host`, `docs.source_dir`, `build.output_dir` and `assets.dir`
//! support `${VAR}` and `${VAR:-default}`. A bare `$` is an error.
//!
//! This file configures the tool itself. Per-directory presentation
//! settings for documents live in `sdoc.config.json` files and are handled
//! by `sdoc-site`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override static bundle output directory.
    pub output_dir: Option<PathBuf>,
    /// Override support assets directory.
    pub assets_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sdoc.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Documentation paths (relative strings from TOML).
    docs: DocsConfigRaw,
    /// Static bundle paths (relative strings from TOML).
    build: BuildConfigRaw,
    /// Support asset paths (relative strings from TOML).
    assets: AssetsConfigRaw,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 4070,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AssetsConfigRaw {
    dir: Option<String>,
}

/// Resolved paths, absolute when loaded from a config file.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory scanned for `.sdoc` files.
    pub source_dir: PathBuf,
    /// Static bundle output directory (`None` means inside the source dir).
    pub output_dir: Option<PathBuf>,
    /// Extra location searched first for support assets.
    pub assets_dir: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`SDOC_HOST`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sdoc.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir = Some(output_dir.clone());
        }
        if let Some(assets_dir) = &settings.assets_dir {
            self.docs_resolved.assets_dir = Some(assets_dir.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            build: BuildConfigRaw::default(),
            assets: AssetsConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.to_path_buf(),
                output_dir: None,
                assets_dir: None,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation(
                "server.host cannot be empty".to_owned(),
            ));
        }

        // Port 0 would bind a random port the user never sees
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        let paths = [
            (&mut self.docs.source_dir, "docs.source_dir"),
            (&mut self.build.output_dir, "build.output_dir"),
            (&mut self.assets.dir, "assets.dir"),
        ];
        for (value, field) in paths {
            if let Some(raw) = value.as_mut() {
                *raw = expand::expand_env(raw, field)?;
            }
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&String>| path.map(|p| config_dir.join(p));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_ref())
                .unwrap_or_else(|| config_dir.to_path_buf()),
            output_dir: resolve(self.build.output_dir.as_ref()),
            assets_dir: resolve(self.assets.dir.as_ref()),
        };
    }
}
