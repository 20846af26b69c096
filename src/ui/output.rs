//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Human output respects the quiet flag. Debug lines go to stderr and only
//! appear with `--debug`. With `--json`, listings are printed as
//! machine-readable JSON regardless of verbosity.

use std::fmt::Display;

use serde::Serialize;

use crate::core::types::{Branch, Commit, Remote};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only with `--debug`).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a value as pretty JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a remote as `name<TAB>url (actions)`.
pub fn format_remote(remote: &Remote) -> String {
    let actions: Vec<&str> = remote.actions.iter().map(String::as_str).collect();
    format!("{}\t{} ({})", remote.name, remote.url, actions.join(", "))
}

/// Format a branch the way `git branch` does, with a `*` for the current one.
pub fn format_branch(branch: &Branch) -> String {
    let marker = if branch.is_current { "* " } else { "  " };
    format!("{}{}", marker, branch.name)
}

/// Format a commit as a one-line summary.
pub fn format_commit(commit: &Commit) -> String {
    format!(
        "{} {} <{}> {}",
        commit.short_hash, commit.author_name, commit.author_email, commit.subject
    )
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
