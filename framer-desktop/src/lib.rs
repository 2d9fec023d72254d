//! Components of the `framer` command-line tool.
//!
//! This library is not intended to be used by other programs; it exists so that the
//! binary's parts can be tested individually.

pub mod config_files;
pub mod logging;
pub mod report;
