//! config command - Get, set, or list configuration values
//!
//! Known keys:
//! - `git_path` - git executable (global, repo overrides)
//! - `json` - print listings as JSON by default (global)

use crate::cli::Context;
use crate::core::config::Config;
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Keys accepted by `gf config`.
const KEYS: &[&str] = &["git_path", "json"];

fn value_of(config: &Config, key: &str) -> Result<String> {
    match key {
        "git_path" => Ok(config.git_path().to_string()),
        "json" => Ok(config.json().to_string()),
        _ => bail!(
            "Unknown configuration key: {} (known keys: {})",
            key,
            KEYS.join(", ")
        ),
    }
}

/// Print the effective value of a key.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = ctx.config()?;
    println!("{}", value_of(&config, key)?);
    Ok(())
}

/// Set a key in the global config file.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut global = ctx.config()?.global;

    match key {
        "git_path" => global.git_path = Some(value.to_string()),
        "json" => {
            let parsed: bool = value
                .parse()
                .with_context(|| format!("Invalid boolean for json: {}", value))?;
            global.json = Some(parsed);
        }
        _ => bail!(
            "Unknown configuration key: {} (known keys: {})",
            key,
            KEYS.join(", ")
        ),
    }

    let path = Config::write_global(&global).context("Failed to write config")?;
    output::print(
        format!("Set {} = {} in {}", key, value, path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// List every key with its effective value and where config came from.
pub fn list(ctx: &Context) -> Result<()> {
    let config = ctx.config()?;

    for key in KEYS {
        println!("{} = {}", key, value_of(&config, key)?);
    }

    if !ctx.quiet {
        match config.global_config_loaded_from() {
            Some(path) => eprintln!("global config: {}", path.display()),
            None => eprintln!("global config: (none)"),
        }
        match config.repo_config_loaded_from() {
            Some(path) => eprintln!("repo config: {}", path.display()),
            None => eprintln!("repo config: (none)"),
        }
    }
    Ok(())
}
