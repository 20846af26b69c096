//! push command - Push the current branch

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Push the current branch.
///
/// Mirrors [`crate::git::Repository::push`], which currently runs `git pull`.
pub fn push(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    session.repo.push().context("Push failed")?;
    output::print("Push complete.", session.verbosity);
    Ok(())
}
