//! Framer fits picture content (a decoded image or video frame) into a display frame.
//!
//! Given the pixel size of a picture, the pixel size of the frame it is shown in,
//! an [`Origin`] convention, and a [`FitMode`], a [`Framer`] computes:
//!
//! * the uniform scale ratio between the two spaces ([`Framer::ratio()`]),
//! * affine transforms between picture space and frame space
//!   ([`Framer::transform_from()`]), with optional normalization of the results into
//!   `[0, 1]` or normalized device coordinates ([`Normalization`]),
//! * ready-to-draw [`Quad`]s for a 4-vertex triangle strip, either positioned to
//!   letterbox the picture within the frame ([`Framer::dynamic_quad()`]) or covering the
//!   whole frame with adjusted texture coordinates ([`Framer::fullscreen_quad()`]).
//!   Both accept a [`QuarterRotation`](math::QuarterRotation) and a mirror flag.
//!
//! Everything here is pure computation on `f32` values; a [`Framer`] is immutable
//! once constructed and may be shared freely between threads.
//!
//! ```
//! use framer::euclid::{point2, size2};
//! use framer::{FitMode, Framer, Normalization, Origin};
//!
//! let framer = Framer::new(
//!     size2(720.0, 1280.0),
//!     size2(360.0, 480.0),
//!     Origin::BottomLeft,
//!     FitMode::AspectFit,
//! )?;
//! assert_eq!(framer.ratio(), 0.375);
//! assert_eq!(
//!     framer.pic_to_frame(point2(360.0, 640.0), Normalization::None),
//!     point2(180.0, 240.0),
//! );
//! # Ok::<(), framer::FramerError>(())
//! ```
//!
//! ## Package features
//!
//! This package, `framer`, defines the following feature flags:
//!
//! * `"std"` (enabled by default):
//!   Links the standard library and uses its floating-point methods.
//!   Without it, the library is `no_std` and those methods come from `num-traits`.
//!   [`FramerError`] implements [`core::error::Error`] either way.
//! * `"serde"`:
//!   Enables serialization and deserialization of the option enums, [`Quad`], and
//!   the math types.
//! * `"arbitrary"`:
//!   Adds implementations of the [`arbitrary::Arbitrary`] trait for fuzzing / property testing.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

pub mod math;
pub mod util;

mod engine;
pub use engine::{Framer, FramerError};

mod options;
pub use options::{FitMode, Normalization, Origin, Space};

mod quad;
pub use quad::Quad;

/// Re-export the version of the `euclid` vector math library we're using.
pub use euclid;
