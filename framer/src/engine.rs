use euclid::Size2D;

use crate::math::{
    Affine, Coordinate, FrameSize, FreePoint, FreeSize, PictureSize, center_of, is_valid_extent,
};
use crate::{FitMode, Normalization, Origin, Space};

/// Relates a picture to the frame it is displayed in.
///
/// A `Framer` is constructed from the pixel sizes of both spaces, an [`Origin`]
/// convention shared by both, and a [`FitMode`]. It computes the uniform scale
/// [`ratio`](Self::ratio) once, and from then on answers questions about how points
/// map between the spaces, and how to draw the picture within the frame
/// ([`Framer::dynamic_quad()`], [`Framer::fullscreen_quad()`]).
///
/// A `Framer` cannot be modified; to change any parameter, construct a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framer {
    picture_size: PictureSize,
    frame_size: FrameSize,
    origin: Origin,
    fit_mode: FitMode,
    /// Scale factor from picture to frame; cached result of [`FitMode::scale_factor`].
    ratio: Coordinate,
}

impl Framer {
    /// Constructs a [`Framer`] for a picture of size `picture_size` shown in a frame of
    /// size `frame_size`.
    ///
    /// Returns [`FramerError::InvalidSize`] if either size has a component which is
    /// zero, negative, infinite, or NaN; such a size has no meaningful aspect ratio.
    /// Returns [`FramerError::UnrepresentableRatio`] if the sizes are valid but so far
    /// apart that their ratio overflows or underflows [`Coordinate`].
    pub fn new(
        picture_size: PictureSize,
        frame_size: FrameSize,
        origin: Origin,
        fit_mode: FitMode,
    ) -> Result<Self, FramerError> {
        check_size(Space::Picture, picture_size)?;
        check_size(Space::Frame, frame_size)?;

        let ratio = fit_mode.scale_factor(picture_size.to_untyped(), frame_size.to_untyped());
        if !(ratio.is_finite() && ratio > 0.0) {
            log::trace!("rejecting ratio {ratio} from {picture_size:?} and {frame_size:?}");
            return Err(FramerError::UnrepresentableRatio { ratio });
        }
        log::debug!(
            "framing {pw}×{ph} picture in {fw}×{fh} frame with {fit_mode}, \
                origin {origin}: ratio {ratio}",
            pw = picture_size.width,
            ph = picture_size.height,
            fw = frame_size.width,
            fh = frame_size.height,
        );

        Ok(Self {
            picture_size,
            frame_size,
            origin,
            fit_mode,
            ratio,
        })
    }

    /// Returns the size of the picture, as given to [`Framer::new()`].
    #[inline]
    pub fn picture_size(&self) -> PictureSize {
        self.picture_size
    }

    /// Returns the size of the frame, as given to [`Framer::new()`].
    #[inline]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    /// Returns the size of the given space.
    #[inline]
    pub fn size_of(&self, space: Space) -> FreeSize {
        match space {
            Space::Picture => self.picture_size.to_untyped(),
            Space::Frame => self.frame_size.to_untyped(),
        }
    }

    /// Returns the origin convention shared by both spaces.
    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[inline]
    #[allow(missing_docs)] // self-explanatory
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Returns the uniform scale factor from picture pixels to frame pixels.
    ///
    /// The frame-to-picture factor is its reciprocal.
    #[inline]
    pub fn ratio(&self) -> Coordinate {
        self.ratio
    }

    /// Returns the transform which maps points in space `from` to space `to`.
    ///
    /// If the spaces are the same, this is the identity. Otherwise, points are scaled
    /// by the [`ratio`](Self::ratio) (or its reciprocal), and, for the corner origins,
    /// translated so that the center of one space lands on the center of the other.
    ///
    /// ```
    /// use framer::euclid::{point2, size2};
    /// use framer::{FitMode, Framer, Origin, Space};
    ///
    /// let framer = Framer::new(
    ///     size2(100.0, 100.0),
    ///     size2(200.0, 100.0),
    ///     Origin::Center,
    ///     FitMode::AspectFit,
    /// )?;
    /// let m = framer.transform_from(Space::Picture, Space::Frame);
    /// assert_eq!(m.transform_point(point2(10.0, -20.0)), point2(10.0, -20.0));
    /// # Ok::<(), framer::FramerError>(())
    /// ```
    pub fn transform_from(&self, from: Space, to: Space) -> Affine {
        if from == to {
            return Affine::IDENTITY;
        }
        let scale = match from {
            Space::Picture => self.ratio,
            Space::Frame => self.ratio.recip(),
        };
        match self.origin {
            Origin::Center => Affine::from_scale(scale),
            Origin::BottomLeft | Origin::TopLeft => {
                let from_center = center_of(self.size_of(from)).to_vector();
                let to_center = center_of(self.size_of(to)).to_vector();
                Affine::from_translation(-from_center)
                    .then(&Affine::from_scale(scale))
                    .then(&Affine::from_translation(to_center))
            }
        }
    }

    /// Transforms each of `points` from space `from` to space `to`, in place, and then
    /// applies `normalization` using the size of `to`.
    ///
    /// If `from` and `to` are the same space, the points are left unchanged and
    /// `normalization` is not applied.
    pub fn transform_points_from(
        &self,
        from: Space,
        to: Space,
        points: &mut [FreePoint],
        normalization: Normalization,
    ) {
        if from == to {
            return;
        }
        let matrix = self.transform_from(from, to);
        let to_size = self.size_of(to);
        for point in points {
            *point = normalization.apply(matrix.transform_point(*point), to_size, self.origin);
        }
    }

    /// Maps a single point from picture space to frame space.
    ///
    /// Equivalent to [`Framer::transform_points_from()`] with a single point.
    #[inline]
    pub fn pic_to_frame(&self, point: FreePoint, normalization: Normalization) -> FreePoint {
        self.transform_point_from(Space::Picture, Space::Frame, point, normalization)
    }

    /// Maps a single point from frame space to picture space.
    ///
    /// Equivalent to [`Framer::transform_points_from()`] with a single point.
    #[inline]
    pub fn frame_to_pic(&self, point: FreePoint, normalization: Normalization) -> FreePoint {
        self.transform_point_from(Space::Frame, Space::Picture, point, normalization)
    }

    fn transform_point_from(
        &self,
        from: Space,
        to: Space,
        point: FreePoint,
        normalization: Normalization,
    ) -> FreePoint {
        let mut points = [point];
        self.transform_points_from(from, to, &mut points, normalization);
        let [point] = points;
        point
    }
}

fn check_size<U>(space: Space, size: Size2D<Coordinate, U>) -> Result<(), FramerError> {
    if is_valid_extent(size) {
        Ok(())
    } else {
        log::trace!("rejecting {space} size {size:?}");
        Err(FramerError::InvalidSize {
            space,
            width: size.width,
            height: size.height,
        })
    }
}

/// Error returned by [`Framer::new()`] when its parameters cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum FramerError {
    /// A size was not finite and positive in both dimensions.
    #[error("{space} size {width}×{height} must be finite and positive")]
    #[non_exhaustive]
    InvalidSize {
        /// Which size was invalid.
        space: Space,
        #[allow(missing_docs)]
        width: Coordinate,
        #[allow(missing_docs)]
        height: Coordinate,
    },

    /// The sizes were valid, but the scale factor between them is not a finite,
    /// positive number.
    #[error("scale factor {ratio} between picture and frame is out of range")]
    #[non_exhaustive]
    UnrepresentableRatio {
        /// The computed scale factor: infinite, zero, or NaN.
        ratio: Coordinate,
    },
}
