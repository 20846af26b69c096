//! tag command - List tags

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// List tag names.
pub fn tag(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    let tags = session.repo.list_tags().context("Failed to list tags")?;

    if session.json {
        output::json(&tags)?;
    } else if !tags.is_empty() {
        output::print(output::format_list(&tags, ""), session.verbosity);
    }
    Ok(())
}
