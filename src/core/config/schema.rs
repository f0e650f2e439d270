//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$GITOBJECTS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitobjects/config.toml`
//! 3. `~/.gitobjects/config.toml`
//!
//! # Repo Config
//!
//! Located at `<git-dir>/gitobjects/config.toml`.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// json = false
/// quiet = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Emit JSON instead of text
    pub json: Option<bool>,

    /// Minimal output
    pub quiet: Option<bool>,
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// base = "main"
/// resolved_key = "resolved"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Fallback base branch for commit ranges
    pub base: Option<String>,

    /// Key under `remote.<name>.` holding the resolved label
    pub resolved_key: Option<String>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is empty or contains
    /// whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base) = &self.base {
            validate_token("base", base)?;
        }
        if let Some(key) = &self.resolved_key {
            validate_token("resolved_key", key)?;
        }
        Ok(())
    }
}

fn validate_token(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue(format!(
            "{field} cannot be empty"
        )));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue(format!(
            "{field} cannot contain whitespace: '{value}'"
        )));
    }
    Ok(())
}
