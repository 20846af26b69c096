//! log command - List commits
//!
//! The full history is read in one `git log` call; `--limit` trims the
//! parsed list rather than changing the git invocation.

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// List commits reachable from HEAD, newest first.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `limit` - Show at most this many commits
pub fn log(ctx: &Context, limit: Option<usize>) -> Result<()> {
    let session = ctx.open()?;
    let mut commits = session
        .repo
        .list_commits()
        .context("Failed to list commits")?;

    if let Some(limit) = limit {
        output::debug(
            format!("showing {} of {} commits", limit.min(commits.len()), commits.len()),
            session.verbosity,
        );
        commits.truncate(limit);
    }

    if session.json {
        output::json(&commits)?;
        return Ok(());
    }

    for commit in &commits {
        output::print(output::format_commit(commit), session.verbosity);
    }
    Ok(())
}
