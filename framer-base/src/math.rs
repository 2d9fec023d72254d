//! Mathematical utilities and decisions.

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::FloatCore as _;

mod affine;
pub use affine::*;
mod coord;
pub use coord::*;
mod rotation;
pub use rotation::*;
#[cfg(feature = "serde")]
mod serde_impls;

/// Returns whether `a` and `b` differ by no more than `tolerance` on either axis.
///
/// This is intended for comparing the results of floating-point transforms, where exact
/// equality is not expected.
#[inline]
#[doc(hidden)] // used by tests in `framer`; not a stable API
pub fn approx_eq_point<U>(
    a: euclid::Point2D<Coordinate, U>,
    b: euclid::Point2D<Coordinate, U>,
    tolerance: Coordinate,
) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}
