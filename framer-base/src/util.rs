//! Tools that we could imagine being in the Rust standard library, but aren't.

/// Utilities for logging.
pub mod log;
