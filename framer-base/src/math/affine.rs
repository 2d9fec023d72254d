//! Two-dimensional affine transformation matrices.
//! This module is private but reexported by its parent.

use core::ops;

use euclid::Vector2D;
use num_traits::One;

/// Acts as polyfill for float methods
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::float::FloatCore as _;

use crate::math::{Coordinate, FreePoint, FreeVector};

/// A 3×2 affine transformation matrix in [`Coordinate`]s: rotation, scale, and skew, plus
/// translation.
///
/// Points are treated as row vectors `[x, y, 1]` which are multiplied on the left of the
/// matrix. Therefore, the elements named `a, b, c, d, tx, ty` are laid out as
///
/// ```text
/// | a  b  |
/// | c  d  |
/// | tx ty |
/// ```
///
/// and `x' = x·a + y·c + tx`, `y' = x·b + y·d + ty`.
///
/// Composition follows the same row-vector convention: `m1 * m2` (or `m1.then(&m2)`)
/// is the transformation which applies `m1` first and then `m2`.
//---
// Design note: This is the same layout as `euclid::Transform2D`; see `to_euclid()`.
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    /// Image of the unit X vector; elements `a` and `b`.
    pub x: FreeVector,
    /// Image of the unit Y vector; elements `c` and `d`.
    pub y: FreeVector,
    /// Translation; elements `tx` and `ty`.
    pub w: FreeVector,
}

impl Affine {
    /// The identity matrix, which transforms all points to themselves.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Constructs a matrix from its six elements, in the order `a, b, c, d, tx, ty`.
    #[inline]
    pub const fn new(
        a: Coordinate,
        b: Coordinate,
        c: Coordinate,
        d: Coordinate,
        tx: Coordinate,
        ty: Coordinate,
    ) -> Self {
        Self {
            x: Vector2D::new(a, b),
            y: Vector2D::new(c, d),
            w: Vector2D::new(tx, ty),
        }
    }

    /// Construct a translation matrix.
    ///
    /// ```
    /// # extern crate framer_base as framer;
    /// use framer::euclid::point2;
    /// use framer::math::{Affine, FreePoint};
    ///
    /// let p: FreePoint = point2(1.0, 2.0);
    /// assert_eq!(
    ///     Affine::from_translation([10.0, 20.0]).transform_point(p),
    ///     point2(11.0, 22.0),
    /// );
    /// ```
    #[inline]
    pub fn from_translation(offset: impl Into<FreeVector>) -> Self {
        Self {
            w: offset.into(),
            ..Self::IDENTITY
        }
    }

    /// Construct a uniform scaling matrix.
    #[inline]
    pub const fn from_scale(scale: Coordinate) -> Self {
        Self::new(scale, 0.0, 0.0, scale, 0.0, 0.0)
    }

    /// Construct a scaling matrix with independent scale factors for each axis.
    #[inline]
    pub const fn from_nonuniform_scale(sx: Coordinate, sy: Coordinate) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Returns the elements of this matrix in the order `a, b, c, d, tx, ty`.
    #[inline]
    pub const fn to_array(self) -> [Coordinate; 6] {
        [self.x.x, self.x.y, self.y.x, self.y.y, self.w.x, self.w.y]
    }

    /// Returns the translation part of this matrix, `(tx, ty)`.
    #[inline]
    pub const fn translation(&self) -> FreeVector {
        self.w
    }

    /// Returns the determinant of the linear (non-translation) part of this matrix.
    #[inline]
    pub fn determinant(&self) -> Coordinate {
        self.x.x * self.y.y - self.x.y * self.y.x
    }

    /// Transform (rotate, scale, and skew) the given vector.
    /// The translation part of this matrix is ignored.
    #[inline]
    #[must_use]
    pub fn transform_vector(&self, vec: FreeVector) -> FreeVector {
        Vector2D::new(
            vec.x * self.x.x + vec.y * self.y.x,
            vec.x * self.x.y + vec.y * self.y.y,
        )
    }

    /// Transform the given point by this matrix.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, point: FreePoint) -> FreePoint {
        (self.transform_vector(point.to_vector()) + self.w).to_point()
    }

    /// Returns the transformation which applies `self` and then `other`.
    ///
    /// ```
    /// # extern crate framer_base as framer;
    /// use framer::euclid::point2;
    /// use framer::math::{Affine, FreePoint};
    ///
    /// let scale = Affine::from_scale(2.0);
    /// let translate = Affine::from_translation([10.0, 0.0]);
    /// let p: FreePoint = point2(1.0, 1.0);
    ///
    /// // Demonstrate the directionality of composition.
    /// assert_eq!(scale.then(&translate).transform_point(p), point2(12.0, 2.0));
    /// assert_eq!(translate.then(&scale).transform_point(p), point2(22.0, 2.0));
    /// assert_eq!(
    ///     scale.then(&translate).transform_point(p),
    ///     translate.transform_point(scale.transform_point(p)),
    /// );
    /// ```
    #[must_use]
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        Affine {
            x: other.transform_vector(self.x),
            y: other.transform_vector(self.y),
            w: other.transform_point(self.w.to_point()).to_vector(),
        }
    }

    /// Invert this matrix. Returns [`NotInvertible`] if its determinant is zero or not
    /// finite.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn inverse(&self) -> Result<Self, NotInvertible> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(NotInvertible(*self));
        }
        let inv_det = det.recip();
        let linear = Affine::new(
            self.y.y * inv_det,
            -self.x.y * inv_det,
            -self.y.x * inv_det,
            self.x.x * inv_det,
            0.0,
            0.0,
        );
        Ok(Affine {
            w: -linear.transform_vector(self.w),
            ..linear
        })
    }

    /// Convert this matrix to the equivalent [`euclid`] transform.
    ///
    /// `euclid` uses the same row-vector convention, so the elements map one-to-one and
    /// [`euclid::Transform2D::then()`] composes in the same order as [`Affine::then()`].
    #[inline]
    pub fn to_euclid(self) -> euclid::default::Transform2D<Coordinate> {
        let [a, b, c, d, tx, ty] = self.to_array();
        euclid::Transform2D::new(a, b, c, d, tx, ty)
    }
}

impl Default for Affine {
    /// Returns [`Affine::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ops::Mul<Self> for Affine {
    type Output = Self;

    /// `self * rhs` applies `self` first and then `rhs`; see [`Affine::then()`].
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.then(&rhs)
    }
}

impl One for Affine {
    #[inline]
    fn one() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for [Coordinate; 6] {
    #[inline]
    fn from(value: Affine) -> Self {
        value.to_array()
    }
}

impl From<[Coordinate; 6]> for Affine {
    #[inline]
    fn from([a, b, c, d, tx, ty]: [Coordinate; 6]) -> Self {
        Affine::new(a, b, c, d, tx, ty)
    }
}

// Note: Not derived, so that non-finite elements can be excluded.
#[cfg(feature = "arbitrary")]
#[mutants::skip]
#[allow(clippy::missing_inline_in_public_items)]
impl<'a> arbitrary::Arbitrary<'a> for Affine {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut element = || -> arbitrary::Result<Coordinate> {
            let value: Coordinate = u.arbitrary()?;
            Ok(if value.is_finite() { value } else { 0.0 })
        };
        Ok(Affine::new(
            element()?,
            element()?,
            element()?,
            element()?,
            element()?,
            element()?,
        ))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        <[Coordinate; 6] as arbitrary::Arbitrary<'a>>::size_hint(0) // non-recursive, so don't fail
    }
}

/// Error returned by [`Affine::inverse()`] when the matrix is singular.
#[derive(Clone, Copy, Debug, displaydoc::Display, PartialEq)]
#[displaydoc("matrix {0:?} is not invertible")]
pub struct NotInvertible(Affine);

impl core::error::Error for NotInvertible {}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::{point2, vec2};
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng as _};
    use rand_xoshiro::Xoshiro256Plus;
    use std::string::ToString as _;

    fn random_matrix(mut rng: impl Rng) -> Affine {
        let mut r = || rng.random_range(-10.0..=10.0);
        Affine::new(r(), r(), r(), r(), r(), r())
    }

    fn assert_close(actual: Affine, expected: Affine) {
        for (i, (a, e)) in actual.to_array().into_iter().zip(expected.to_array()).enumerate() {
            assert!(
                (a - e).abs() <= 1e-3 * e.abs().max(1.0),
                "element {i} differs: {actual:?} vs {expected:?}"
            );
        }
    }

    #[test]
    fn identity() {
        assert_eq!(Affine::IDENTITY, Affine::one());
        assert_eq!(Affine::IDENTITY, Affine::default());
        assert_eq!(
            Affine::IDENTITY.transform_point(point2(3.0, -4.0)),
            point2(3.0, -4.0)
        );
    }

    #[test]
    fn element_layout() {
        let m = Affine::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(Affine::from(m.to_array()), m);
        assert_eq!(m.translation(), vec2(5.0, 6.0));
        // x' = x·a + y·c + tx, y' = x·b + y·d + ty
        assert_eq!(m.transform_point(point2(1.0, 10.0)), point2(36.0, 48.0));
        assert_eq!(m.transform_vector(vec2(1.0, 10.0)), vec2(31.0, 42.0));
    }

    #[test]
    fn mul_is_then() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x5eed_0f_f4a3e5);
        for _ in 0..50 {
            let m1 = random_matrix(&mut rng);
            let m2 = random_matrix(&mut rng);
            assert_eq!(m1 * m2, m1.then(&m2));
        }
    }

    #[test]
    fn equivalent_transform() {
        let mut rng = Xoshiro256Plus::seed_from_u64(2897358920346590823);
        for _ in 0..100 {
            let m = random_matrix(&mut rng);
            let p = point2(2.0, -300.0);
            let ours = m.transform_point(p);
            let theirs = m.to_euclid().transform_point(p);
            assert!(
                (ours - theirs).length() <= 1e-3,
                "{m:?}: {ours:?} vs {theirs:?}"
            );
        }
    }

    #[test]
    fn equivalent_then() {
        let mut rng = Xoshiro256Plus::seed_from_u64(5933089223468901296);
        for _ in 0..100 {
            let m1 = random_matrix(&mut rng);
            let m2 = random_matrix(&mut rng);
            let ours = m1.then(&m2).to_array();
            let theirs = m1.to_euclid().then(&m2.to_euclid()).to_array();
            assert_close(Affine::from(ours), Affine::from(theirs));
        }
    }

    #[test]
    fn then_is_associative() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x0a55_0c1a_7e);
        for _ in 0..50 {
            let m1 = random_matrix(&mut rng);
            let m2 = random_matrix(&mut rng);
            let m3 = random_matrix(&mut rng);
            assert_close((m1 * m2) * m3, m1 * (m2 * m3));
        }
    }

    #[test]
    fn inverse_round_trip() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0xca9bd0d289b4700e);
        let mut nontrivial = 0;
        for _ in 0..200 {
            let m = random_matrix(&mut rng);
            if m.determinant().abs() < 0.1 {
                continue;
            }
            let inv = m.inverse().unwrap();
            assert_close(m * inv, Affine::IDENTITY);
            assert_close(inv * m, Affine::IDENTITY);
            nontrivial += 1;
        }
        assert!(nontrivial > 100, "got {nontrivial} inverses");
    }

    #[test]
    fn inverse_of_singular() {
        let m = Affine::new(1.0, 2.0, 2.0, 4.0, 7.0, 8.0);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Err(NotInvertible(m)));
        assert_eq!(
            Affine::from_scale(0.0).inverse().unwrap_err().to_string(),
            format!("matrix {:?} is not invertible", Affine::from_scale(0.0)),
        );
    }

    #[test]
    fn scale_and_translation_constructors() {
        assert_eq!(
            Affine::from_nonuniform_scale(2.0, 3.0).transform_point(point2(1.0, 1.0)),
            point2(2.0, 3.0)
        );
        assert_eq!(
            Affine::from_scale(0.5).transform_point(point2(4.0, -2.0)),
            point2(2.0, -1.0)
        );
        assert_eq!(
            Affine::from_translation(vec2(1.0, -1.0)).transform_vector(vec2(4.0, 4.0)),
            vec2(4.0, 4.0),
            "vectors are not translated"
        );
    }
}
