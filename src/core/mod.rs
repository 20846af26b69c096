//! core
//!
//! Domain records and configuration.
//!
//! - [`types`] - Records parsed from git output
//! - [`config`] - Configuration loading and precedence

pub mod config;
pub mod types;
