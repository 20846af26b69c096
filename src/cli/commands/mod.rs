//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Opens the repository through [`Context::open`]
//! 2. Calls exactly one [`crate::git::Repository`] operation
//! 3. Formats and displays output
//!
//! Handlers never spawn git themselves.

mod branch;
mod completion;
mod config_cmd;
mod fetch;
mod init;
mod log_cmd;
mod pull;
mod push;
mod remote;
mod status;
mod tag;

// Re-export command functions for testing and direct invocation
pub use branch::branch;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use fetch::fetch;
pub use init::init;
pub use log_cmd::log;
pub use pull::pull;
pub use push::push;
pub use remote::remote;
pub use status::status;
pub use tag::tag;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Status => status::status(ctx),
        Command::Init => init::init(ctx),

        Command::Fetch => fetch::fetch(ctx),
        Command::Pull => pull::pull(ctx),
        Command::Push => push::push(ctx),

        Command::Remote => remote::remote(ctx),
        Command::Branch => branch::branch(ctx),
        Command::Log { limit } => log_cmd::log(ctx, limit),
        Command::Tag => tag::tag(ctx),

        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
