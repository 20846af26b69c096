//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$GITFACADE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitfacade/config.toml`
//! 3. `~/.gitfacade/config.toml` (canonical write location)
//!
//! # Repo Config
//!
//! Located at `.git/gitfacade/config.toml`.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// git_path = "/usr/local/bin/git"
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// git executable, bare name or path
    pub git_path: Option<String>,

    /// Print records as JSON by default
    pub json: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_git_path(self.git_path.as_deref())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// git_path = "/opt/git-2.45/bin/git"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// git executable override for this repository
    pub git_path: Option<String>,
}

impl RepoConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_git_path(self.git_path.as_deref())
    }
}

fn validate_git_path(git_path: Option<&str>) -> Result<(), ConfigError> {
    match git_path {
        Some(path) if path.trim().is_empty() => Err(ConfigError::InvalidValue(
            "git_path cannot be empty".to_string(),
        )),
        _ => Ok(()),
    }
}
