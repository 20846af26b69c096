//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--repo <path>`: Operate on this path instead of the current directory
//! - `--git <path>`: Use this git executable
//! - `--json`: Print listings as JSON
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitfacade - typed records on top of the git executable
#[derive(Parser, Debug)]
#[command(name = "gf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository path (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// git executable to use (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub git: Option<PathBuf>,

    /// Print listings as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether the path is a git repository
    #[command(
        name = "status",
        long_about = "Report whether the path is a git repository.\n\n\
            Runs `git status` in the repository path. Exits 0 either way; the \
            answer is printed (or returned as JSON with --json).",
        after_help = "\
EXAMPLES:
    gf status
    gf --repo /srv/checkout status --json"
    )]
    Status,

    /// Create the directory and initialize a repository
    #[command(
        name = "init",
        long_about = "Create the repository directory if needed and run `git init`.\n\n\
            Does nothing if the path is already a repository."
    )]
    Init,

    /// Fetch from the default remote
    Fetch,

    /// Pull into the current branch
    Pull,

    /// Push the current branch
    #[command(
        long_about = "Push the current branch.\n\n\
            NOTE: this currently runs `git pull`, matching the behavior of the \
            library's push operation."
    )]
    Push,

    /// List remotes with their fetch/push actions
    #[command(name = "remote")]
    Remote,

    /// List local and remote-tracking branches
    #[command(name = "branch")]
    Branch,

    /// List commits reachable from HEAD
    #[command(name = "log")]
    Log {
        /// Show at most this many commits
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
    },

    /// List tags
    #[command(name = "tag")]
    Tag,

    /// Get, set, or list configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    gf completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    gf completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value in the global config
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
