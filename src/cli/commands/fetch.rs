//! fetch command - Fetch from the default remote

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Run `git fetch` and echo what it printed.
pub fn fetch(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    let fetched = session.repo.fetch().context("Fetch failed")?;

    let fetched = fetched.trim_end();
    if !fetched.is_empty() {
        output::print(fetched, session.verbosity);
    }
    Ok(())
}
