//! git
//!
//! Single doorway to the git executable.
//!
//! # Architecture
//!
//! All repository access flows through [`Repository`]. Nothing outside this
//! module spawns git or parses its output.
//!
//! - `interface` - `Repository` handle and `GitError`
//! - `runner` - Process spawning and output capture
//! - `parse` - Pure parsers from captured text to records
//!
//! # Invariants
//!
//! - Each public operation spawns exactly one git process and blocks on it
//! - On failure the reported text is git's stderr, never its stdout
//! - No retries; every failure surfaces to the caller
//!
//! # Example
//!
//! ```no_run
//! use gitfacade::git::Repository;
//!
//! let repo = Repository::new(".")?;
//! for remote in repo.list_remotes()? {
//!     println!("{} {}", remote.name, remote.url);
//! }
//! # Ok::<(), gitfacade::git::GitError>(())
//! ```

mod interface;
mod parse;
mod runner;

pub use interface::{ErrorKind, GitError, Repository, DEFAULT_EXECUTABLE};
pub use parse::{
    log_format_arg, parse_branches, parse_commits, parse_remotes, parse_tags, MalformedRecord,
    FIELD_SEPARATOR, RECORD_SEPARATOR,
};
pub use runner::{run, CommandOutput};
