//! init command - Create and initialize the repository

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Create the directory if needed and run `git init` once.
pub fn init(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    let repo = &session.repo;

    let already = repo.is_initialized()?;
    repo.init().context("Failed to initialize repository")?;

    let message = if already {
        "Already a git repository."
    } else {
        "Initialized git repository."
    };
    output::print(
        format!("{} ({})", message, repo.local_path().display()),
        session.verbosity,
    );
    Ok(())
}
