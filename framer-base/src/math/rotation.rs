//! Rotations by multiples of 90°, which have exact matrices.
//! This module is private but reexported by its parent.

use core::ops::Mul;

use crate::math::Affine;

/// A clockwise rotation by a whole number of quarter turns.
///
/// Clockwise is with respect to a Y-down coordinate system such as the rows of an image:
/// [`Clockwise90`](Self::Clockwise90) takes the +X direction to +Y. Viewed in a Y-up system
/// such as normalized device coordinates, the same matrices turn counterclockwise.
///
/// Because every angle is a multiple of 90°, the corresponding matrices contain only
/// the exact values −1, 0, and 1, and so no error accumulates from trigonometry.
///
/// See also:
///
/// * [`Affine`] is more general, specifying any affine transformation.
#[doc = include_str!("../serde-warning.md")]
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum QuarterRotation {
    /// No rotation.
    #[default]
    None = 0,
    /// 90° clockwise.
    Clockwise90 = 1,
    /// 180°.
    Clockwise180 = 2,
    /// 270° clockwise, or equivalently 90° counterclockwise.
    Clockwise270 = 3,
}

impl QuarterRotation {
    /// All four rotations, in increasing order of angle.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::Clockwise90,
        Self::Clockwise180,
        Self::Clockwise270,
    ];

    /// Returns the rotation by `turns` clockwise quarter turns. Negative values are
    /// counterclockwise turns.
    ///
    /// ```
    /// # extern crate framer_base as framer;
    /// use framer::math::QuarterRotation;
    ///
    /// assert_eq!(QuarterRotation::from_clockwise_quarter_turns(5), QuarterRotation::Clockwise90);
    /// assert_eq!(QuarterRotation::from_clockwise_quarter_turns(-1), QuarterRotation::Clockwise270);
    /// ```
    #[inline]
    pub const fn from_clockwise_quarter_turns(turns: i32) -> Self {
        Self::ALL[turns.rem_euclid(4) as usize]
    }

    /// Returns the number of clockwise quarter turns, from 0 to 3, this rotation makes.
    #[inline]
    pub const fn clockwise_quarter_turns(self) -> i32 {
        self as i32
    }

    /// Returns the rotation which undoes this one.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_clockwise_quarter_turns(-self.clockwise_quarter_turns())
    }

    /// Returns the rotation which applies `self` and then `other`.
    #[inline]
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        Self::from_clockwise_quarter_turns(
            self.clockwise_quarter_turns() + other.clockwise_quarter_turns(),
        )
    }

    /// Returns the rotation-only matrix for this rotation.
    ///
    /// ```
    /// # extern crate framer_base as framer;
    /// use framer::euclid::point2;
    /// use framer::math::{FreePoint, QuarterRotation};
    ///
    /// let right: FreePoint = point2(1.0, 0.0);
    /// assert_eq!(QuarterRotation::Clockwise90.to_matrix().transform_point(right), point2(0.0, 1.0));
    /// ```
    #[inline]
    #[rustfmt::skip]
    pub const fn to_matrix(self) -> Affine {
        match self {
            QuarterRotation::None => Affine::IDENTITY,
            QuarterRotation::Clockwise90 => Affine::new(
                0.0, 1.0,
                -1.0, 0.0,
                0.0, 0.0,
            ),
            QuarterRotation::Clockwise180 => Affine::new(
                -1.0, 0.0,
                0.0, -1.0,
                0.0, 0.0,
            ),
            QuarterRotation::Clockwise270 => Affine::new(
                0.0, -1.0,
                1.0, 0.0,
                0.0, 0.0,
            ),
        }
    }
}

impl Mul for QuarterRotation {
    type Output = Self;

    /// Multiplication is composition: `self * rhs` applies `self` first and then `rhs`.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.then(rhs)
    }
}

impl From<QuarterRotation> for Affine {
    #[inline]
    fn from(value: QuarterRotation) -> Self {
        value.to_matrix()
    }
}
