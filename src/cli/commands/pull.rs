//! pull command - Pull into the current branch

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Run `git pull` and report whether anything changed.
pub fn pull(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    let status = session.repo.pull().context("Pull failed")?;

    if session.json {
        output::json(&serde_json::json!({ "status": status }))?;
    } else {
        output::print(format!("Pull: {}", status), session.verbosity);
    }
    Ok(())
}
