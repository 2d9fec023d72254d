//! Numeric types used for coordinates and the coordinate spaces they belong to.

use euclid::{Point2D, Size2D, Vector2D};

/// Scalar type of all coordinates, sizes, and matrix elements.
///
/// This is `f32` because the primary consumer of our results is vertex data for GPU
/// rendering, which is conventionally single precision.
pub type Coordinate = f32;

/// Unit of measure for the source content (“picture”) space, such as an image's native
/// pixel grid.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Picture {}

/// Unit of measure for the destination display (“frame”) space, such as a window or
/// viewport.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Frame {}

/// Unit of measure for normalized device coordinates: the square from −1 to 1 on both
/// axes which GPU clip space conventionally uses.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Ndc {}

/// Unit of measure for texture coordinates: the square from 0 to 1 on both axes which
/// texture samplers conventionally use.
#[expect(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum TexCoord {}

/// Size of the picture space.
pub type PictureSize = Size2D<Coordinate, Picture>;

/// Size of the frame space.
pub type FrameSize = Size2D<Coordinate, Frame>;

/// A point whose coordinate space is decided at run time rather than by its type.
///
/// Transforms between spaces chosen at run time (see `framer::Space`) operate on these.
pub type FreePoint = Point2D<Coordinate, euclid::UnknownUnit>;

/// A vector whose coordinate space is decided at run time rather than by its type.
pub type FreeVector = Vector2D<Coordinate, euclid::UnknownUnit>;

/// A size whose coordinate space is decided at run time rather than by its type.
pub type FreeSize = Size2D<Coordinate, euclid::UnknownUnit>;

/// Returns the corner of a box of the given `size` whose lower corner is at the origin;
/// that is, the size read as a point.
///
/// This is the one place a size is treated as a point; it exists for computing corners
/// and centres in transforms.
///
/// ```
/// # extern crate framer_base as framer;
/// use framer::euclid::{point2, size2};
/// use framer::math::{FreePoint, FreeSize, far_corner};
///
/// let size: FreeSize = size2(4.0, 3.0);
/// let corner: FreePoint = far_corner(size);
/// assert_eq!(corner, point2(4.0, 3.0));
/// ```
#[inline]
pub fn far_corner<U>(size: Size2D<Coordinate, U>) -> Point2D<Coordinate, U> {
    Point2D::new(size.width, size.height)
}

/// Returns the centre of a box of the given `size` whose lower corner is at the origin.
#[inline]
pub fn center_of<U>(size: Size2D<Coordinate, U>) -> Point2D<Coordinate, U> {
    Point2D::new(size.width / 2.0, size.height / 2.0)
}

/// Returns whether both components of `size` are finite and strictly positive.
///
/// Sizes which are not valid cannot define a coordinate space that can be scaled to or
/// from.
#[inline]
pub fn is_valid_extent<U>(size: Size2D<Coordinate, U>) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
