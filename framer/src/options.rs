//! Enumerations which select how a [`Framer`](crate::Framer) relates its two spaces.

use crate::math::{Coordinate, FreePoint, FreeSize};
use euclid::point2;

/// Where the origin of picture and frame coordinates lies.
///
/// This determines how the two spaces are aligned: with [`Origin::Center`], the
/// centers coincide because both coordinate origins coincide; with the corner origins,
/// the transform recenters explicitly so that the picture's center lands on the frame's
/// center.
#[doc = include_str!("serde-warning.md")]
#[expect(clippy::exhaustive_enums)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    exhaust::Exhaust,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum Origin {
    /// The origin is at the center of the space.
    Center,
    /// The origin is at the bottom left corner, and +Y is up.
    #[default]
    BottomLeft,
    /// The origin is at the top left corner, and +Y is down.
    ///
    /// The transforms are the same as for [`Origin::BottomLeft`]; only the interpretation
    /// of the Y axis by the caller differs.
    TopLeft,
}

impl Origin {
    /// Returns whether this origin is at the center of the space rather than a corner.
    #[inline]
    pub const fn is_center(self) -> bool {
        match self {
            Origin::Center => true,
            Origin::BottomLeft | Origin::TopLeft => false,
        }
    }
}

/// How the picture is scaled when its aspect ratio differs from the frame's.
#[doc = include_str!("serde-warning.md")]
#[expect(clippy::exhaustive_enums)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    exhaust::Exhaust,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum FitMode {
    /// Scale so that the whole picture is visible, leaving empty bars if the aspect
    /// ratios differ (letterboxing).
    #[default]
    AspectFit,
    /// Scale so that the picture covers the whole frame, cropping it if the aspect
    /// ratios differ.
    AspectFill,
}

impl FitMode {
    /// Returns the uniform scale factor by which `picture` must be multiplied to be
    /// fitted into `frame` according to this mode.
    ///
    /// ```
    /// use framer::euclid::size2;
    /// use framer::FitMode;
    ///
    /// assert_eq!(FitMode::AspectFit.scale_factor(size2(720.0, 1280.0), size2(360.0, 480.0)), 0.375);
    /// assert_eq!(FitMode::AspectFill.scale_factor(size2(720.0, 1280.0), size2(360.0, 480.0)), 0.5);
    /// ```
    #[inline]
    pub fn scale_factor(self, picture: FreeSize, frame: FreeSize) -> Coordinate {
        let width_ratio = frame.width / picture.width;
        let height_ratio = frame.height / picture.height;
        match self {
            FitMode::AspectFit => width_ratio.min(height_ratio),
            FitMode::AspectFill => width_ratio.max(height_ratio),
        }
    }
}

/// One of the two coordinate spaces a [`Framer`](crate::Framer) relates.
#[doc = include_str!("serde-warning.md")]
#[expect(clippy::exhaustive_enums)]
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    exhaust::Exhaust,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum Space {
    /// Pixel coordinates of the source content.
    Picture,
    /// Pixel coordinates of the display surface.
    Frame,
}

impl Space {
    /// Returns the space which is not `self`.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Space::Picture => Space::Frame,
            Space::Frame => Space::Picture,
        }
    }
}

/// Post-processing applied to points after they have been transformed into their
/// destination space.
#[doc = include_str!("serde-warning.md")]
#[expect(clippy::exhaustive_enums)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    exhaust::Exhaust,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum Normalization {
    /// Leave points in the pixel units of the destination space.
    #[default]
    None,
    /// Divide by the destination size, so that the destination rectangle spans
    /// `[0, 1]` on each axis (for corner origins).
    Normalize,
    /// Map into normalized device coordinates, so that the destination rectangle
    /// spans `[-1, 1]` on each axis.
    Ndc,
}

impl Normalization {
    /// Applies this normalization to `point`, which is in a space of size `size` whose
    /// origin is `origin`.
    ///
    /// With a centered origin, [`Normalization::Ndc`] only divides by the half-size,
    /// since the center is already at zero.
    #[inline]
    pub fn apply(self, point: FreePoint, size: FreeSize, origin: Origin) -> FreePoint {
        match self {
            Normalization::None => point,
            Normalization::Normalize => point2(point.x / size.width, point.y / size.height),
            Normalization::Ndc => match origin {
                Origin::Center => {
                    point2(point.x / (size.width / 2.0), point.y / (size.height / 2.0))
                }
                Origin::BottomLeft | Origin::TopLeft => point2(
                    2.0 * (point.x / size.width) - 1.0,
                    2.0 * (point.y / size.height) - 1.0,
                ),
            },
        }
    }
}
