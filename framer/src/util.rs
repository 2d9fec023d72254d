//! Miscellaneous utilities which are not the primary function of this crate.

pub use framer_base::util::*;
