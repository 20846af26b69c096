//! branch command - List branches

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// List branches, marking the current one with `*`.
pub fn branch(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    let branches = session
        .repo
        .list_branches()
        .context("Failed to list branches")?;

    if session.json {
        output::json(&branches)?;
        return Ok(());
    }

    for branch in &branches {
        output::print(output::format_branch(branch), session.verbosity);
    }
    Ok(())
}
