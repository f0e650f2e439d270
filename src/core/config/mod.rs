//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Two configuration scopes:
//! - **Global**: User-level output settings
//! - **Repo**: Repository-level defaults
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITOBJECTS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitobjects/config.toml`
//! 3. `~/.gitobjects/config.toml`
//!
//! # Repo Config Location
//!
//! `<git-dir>/gitobjects/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gitobjects::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! println!("resolved key: {}", config.resolved_key());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Default key under `remote.<name>.` holding a remote's resolved label.
pub const DEFAULT_RESOLVED_KEY: &str = "resolved";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply defaults, so callers never see unset values.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if in a repo and a file exists)
    pub repo: Option<RepoConfig>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `git_dir` is provided, also loads repo-specific config from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing config files are not an error.
    pub fn load(git_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let global_path = Self::find_global();
        let repo_path = git_dir
            .map(Self::repo_config_path)
            .filter(|path| path.exists());

        Self::load_files(global_path.as_deref(), repo_path.as_deref())
    }

    /// Load configuration from explicit file paths.
    pub fn load_files(
        global_path: Option<&Path>,
        repo_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let global: GlobalConfig = match global_path {
            Some(path) => read_toml(path)?,
            None => GlobalConfig::default(),
        };

        let repo: Option<RepoConfig> = repo_path.map(read_toml::<RepoConfig>).transpose()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        tracing::debug!(
            global = ?global_path,
            repo = ?repo_path,
            "loaded configuration"
        );

        Ok(Config {
            global,
            repo,
            global_path: global_path.map(Path::to_path_buf),
            repo_path: repo_path.map(Path::to_path_buf),
        })
    }

    /// Locate the global config file, if any exists.
    fn find_global() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("GITOBJECTS_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitobjects/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".gitobjects/config.toml"))
            .filter(|path| path.exists())
    }

    /// Get the canonical path for repo config inside a git directory.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("gitobjects/config.toml")
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Whether output should be JSON. Defaults to `false`.
    pub fn json(&self) -> bool {
        self.global.json.unwrap_or(false)
    }

    /// Whether output should be minimal. Defaults to `false`.
    pub fn quiet(&self) -> bool {
        self.global.quiet.unwrap_or(false)
    }

    /// Fallback base branch for commit ranges.
    pub fn base(&self) -> Option<&str> {
        self.repo.as_ref().and_then(|r| r.base.as_deref())
    }

    /// Key under `remote.<name>.` holding the resolved label.
    ///
    /// Defaults to [`DEFAULT_RESOLVED_KEY`].
    pub fn resolved_key(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.resolved_key.as_deref())
            .unwrap_or(DEFAULT_RESOLVED_KEY)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
