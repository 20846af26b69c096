//! ui
//!
//! User-facing output.

pub mod output;
