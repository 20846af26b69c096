//! status command - Report whether the path is a repository

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Print whether the repository path is initialized.
pub fn status(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    let initialized = session
        .repo
        .is_initialized()
        .context("Failed to run git status")?;

    if session.json {
        output::json(&serde_json::json!({
            "path": session.repo.local_path(),
            "initialized": initialized,
        }))?;
    } else if initialized {
        output::print(
            format!("{}: initialized", session.repo.local_path().display()),
            session.verbosity,
        );
    } else {
        output::print(
            format!(
                "{}: not a git repository (run 'gf init')",
                session.repo.local_path().display()
            ),
            session.verbosity,
        );
    }

    Ok(())
}
