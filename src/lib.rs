//! gitfacade - typed records on top of the git executable
//!
//! gitfacade shells out to `git`, captures what it prints, and parses the
//! text into plain records: remotes, branches, commits and tags. It does
//! not reimplement any part of git.
//!
//! # Architecture
//!
//! - [`git`] - The [`git::Repository`] handle, process runner and parsers
//! - [`core`] - Record types and configuration
//! - [`cli`] - Command-line interface layer for the `gf` binary
//! - [`ui`] - Output formatting
//!
//! # Guarantees
//!
//! 1. Every operation spawns one git process and blocks until it exits
//! 2. A nonzero exit is always an error carrying git's stderr and a numeric kind
//! 3. Nothing is retried or cached between calls

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
