//! Mathematical utilities and decisions.

pub use framer_base::math::*;
