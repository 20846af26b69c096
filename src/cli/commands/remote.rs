//! remote command - List remotes

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// List remotes, one per line.
pub fn remote(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    let remotes = session
        .repo
        .list_remotes()
        .context("Failed to list remotes")?;

    if session.json {
        output::json(&remotes)?;
        return Ok(());
    }

    for remote in &remotes {
        output::print(output::format_remote(remote), session.verbosity);
    }
    Ok(())
}
