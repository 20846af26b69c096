//! cli
//!
//! Command-line interface layer for gitfacade.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and open the [`Repository`]
//! - Delegate to command handlers
//!
//! The CLI layer is thin: every git interaction goes through
//! [`crate::git::Repository`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::git::Repository;
use crate::ui::output::{self, Verbosity};

/// Execution context built from global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Repository path override.
    pub repo: Option<PathBuf>,
    /// git executable override.
    pub git: Option<PathBuf>,
    /// JSON output requested on the command line.
    pub json: bool,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

/// An opened repository plus the output settings resolved for it.
#[derive(Debug)]
pub struct Session {
    pub repo: Repository,
    pub json: bool,
    pub verbosity: Verbosity,
}

impl Context {
    /// The repository path: `--repo`, or the current directory.
    pub fn repo_path(&self) -> Result<PathBuf> {
        match &self.repo {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Output verbosity from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load config for the repository path.
    pub fn config(&self) -> Result<Config> {
        let path = self.repo_path()?;
        Config::load(Some(&path)).context("Failed to load config")
    }

    /// Load config and bind a [`Repository`].
    ///
    /// The executable is `--git` if given, otherwise the configured one.
    pub fn open(&self) -> Result<Session> {
        let path = self.repo_path()?;
        let config = self.config()?;

        let repo = match &self.git {
            Some(git) => Repository::with_executable(&path, git),
            None => Repository::with_executable(&path, config.git_path()),
        }
        .with_context(|| format!("Failed to open repository at {}", path.display()))?;

        let verbosity = self.verbosity();
        output::debug(
            format!(
                "repository {} via {}",
                repo.local_path().display(),
                repo.executable_path().display()
            ),
            verbosity,
        );
        if let Some(config_path) = config.global_config_loaded_from() {
            output::debug(format!("config {}", config_path.display()), verbosity);
        }

        Ok(Session {
            repo,
            json: self.json || config.json(),
            verbosity,
        })
    }
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects `debug` and the
/// default is `warn`. Logs go to stderr so stdout stays parseable.
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let ctx = Context {
        repo: cli.repo.clone(),
        git: cli.git.clone(),
        json: cli.json,
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
