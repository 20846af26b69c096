//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gitfacade has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Per-repository overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Example
//!
//! ```no_run
//! use gitfacade::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo"))).unwrap();
//! println!("git: {}", config.git_path());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::git::DEFAULT_EXECUTABLE;

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "GITFACADE_CONFIG";

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

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence: repo config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if present)
    pub repo: Option<RepoConfig>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `repo_path` is provided, also loads repo-specific config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing files are not an error.
    pub fn load(repo_path: Option<&Path>) -> Result<Config, ConfigError> {
        let (global, global_path) = Self::load_global()?;

        let (repo, repo_path_found) = match repo_path {
            Some(path) => Self::load_repo(path)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path: repo_path_found,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitfacade/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".gitfacade/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    /// Load repository configuration, if the repository has one.
    fn load_repo(repo_path: &Path) -> Result<(Option<RepoConfig>, Option<PathBuf>), ConfigError> {
        let path = Self::repo_config_path(repo_path);
        if !path.exists() {
            return Ok((None, None));
        }
        let config = Self::read_config(&path)?;
        Ok((Some(config), Some(path)))
    }

    fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path global config is written to.
    ///
    /// `$GITFACADE_CONFIG` if set, otherwise `~/.gitfacade/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".gitfacade/config.toml"))
    }

    /// Get the canonical path for repo config.
    pub fn repo_config_path(repo_path: &Path) -> PathBuf {
        repo_path.join(".git/gitfacade/config.toml")
    }

    /// Write global config atomically.
    pub fn write_global(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        config.validate()?;
        let path = Self::global_config_path()?;
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically (temp file in the same directory, then rename).
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the git executable.
    ///
    /// Defaults to `"git"` (looked up on `PATH`).
    pub fn git_path(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.git_path.as_deref())
            .or(self.global.git_path.as_deref())
            .unwrap_or(DEFAULT_EXECUTABLE)
    }

    /// Check if JSON output is the default.
    ///
    /// Defaults to `false`.
    pub fn json(&self) -> bool {
        self.global.json.unwrap_or(false)
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Tests touching process-wide env vars share one lock.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn write_repo_config(root: &Path, contents: &str) {
        let path = Config::repo_config_path(root);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// Load with the global scope pinned to an empty file, so neither the
    /// caller's environment nor their home config leaks in.
    fn load_isolated(repo: &Path) -> Result<Config, ConfigError> {
        let _guard = ENV_LOCK.lock().unwrap();
        let global = TempDir::new().unwrap();
        let global_path = global.path().join("config.toml");
        fs::write(&global_path, "").unwrap();

        std::env::set_var(CONFIG_ENV, &global_path);
        let result = Config::load(Some(repo));
        std::env::remove_var(CONFIG_ENV);
        result
    }

    #[test]
    fn load_global_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
            git_path = "/opt/git/bin/git"
            json = true
            "#,
        )
        .unwrap();

        std::env::set_var(CONFIG_ENV, &config_path);
        let result = Config::load(None);
        std::env::remove_var(CONFIG_ENV);

        let config = result.unwrap();
        assert_eq!(config.git_path(), "/opt/git/bin/git");
        assert!(config.json());
        assert_eq!(config.global_config_loaded_from(), Some(config_path.as_path()));
    }

    #[test]
    fn load_repo_config() {
        let temp = TempDir::new().unwrap();
        write_repo_config(temp.path(), "git_path = \"/usr/local/bin/git\"");

        let config = load_isolated(temp.path()).unwrap();

        assert_eq!(config.git_path(), "/usr/local/bin/git");
        assert!(config.repo_config_loaded_from().is_some());
    }

    #[test]
    fn missing_repo_config_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let result = load_isolated(temp.path()).unwrap();
        assert!(result.repo.is_none());
        assert_eq!(result.git_path(), "git");
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        write_repo_config(
            temp.path(),
            r#"
            git_path = "git"
            unknown_field = true
            "#,
        );

        let result = load_isolated(temp.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn empty_git_path_rejected() {
        let temp = TempDir::new().unwrap();
        write_repo_config(temp.path(), "git_path = \"\"");

        let result = load_isolated(temp.path());
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn precedence_repo_overrides_global() {
        let config = Config {
            global: GlobalConfig {
                git_path: Some("/global/git".to_string()),
                json: None,
            },
            repo: Some(RepoConfig {
                git_path: Some("/repo/git".to_string()),
            }),
            global_path: None,
            repo_path: None,
        };
        assert_eq!(config.git_path(), "/repo/git");

        let config = Config {
            repo: Some(RepoConfig::default()),
            ..config
        };
        assert_eq!(config.git_path(), "/global/git");
    }

    #[test]
    fn defaults_without_any_file() {
        let config = Config::default();
        assert_eq!(config.git_path(), "git");
        assert!(!config.json());
    }

    #[test]
    fn write_global_atomic() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/config.toml");

        std::env::set_var(CONFIG_ENV, &config_path);
        let written = Config::write_global(&GlobalConfig {
            git_path: Some("git".to_string()),
            json: Some(true),
        });
        let loaded = Config::load(None);
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(written.unwrap(), config_path);
        assert!(!config_path.with_extension("toml.tmp").exists());
        assert!(loaded.unwrap().json());
    }
}
