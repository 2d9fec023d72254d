//! Vertex data for drawing a picture within a frame.

use euclid::{Point2D, point2};

use crate::math::{
    Affine, Coordinate, FreePoint, FreeSize, Ndc, QuarterRotation, TexCoord, far_corner,
};
use crate::{Framer, Normalization, Space};

/// Vertex positions and texture coordinates for four vertices, ready to upload for a
/// triangle-strip draw.
///
/// Both arrays hold four `(x, y)` pairs in the same vertex order: top left, top right,
/// bottom left, bottom right, as seen on screen before any rotation or mirroring. The
/// layout is non-interleaved: all positions, then all texture coordinates.
///
/// Positions are in normalized device coordinates (−1 to 1, +Y up). Texture coordinates
/// are normalized to the picture, so that 0 and 1 are its edges; values outside that range
/// address content beyond the picture (typically shown as the border color).
#[doc = include_str!("serde-warning.md")]
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quad {
    /// Vertex positions, as `[x0, y0, x1, y1, x2, y2, x3, y3]`.
    pub positions: [Coordinate; 8],
    /// Texture coordinates, in the same layout as [`positions`](Self::positions).
    pub tex_coords: [Coordinate; 8],
}

impl Quad {
    /// Positions of a quad covering the whole viewport.
    pub const FULLSCREEN_POSITIONS: [Coordinate; 8] = [-1.0, 1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0];

    /// Texture coordinates which show exactly the whole picture, upright.
    pub const UNIT_TEX_COORDS: [Coordinate; 8] = [0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];

    /// Constructs a [`Quad`] from typed vertex points.
    #[inline]
    pub fn from_vertices(
        positions: [Point2D<Coordinate, Ndc>; 4],
        tex_coords: [Point2D<Coordinate, TexCoord>; 4],
    ) -> Self {
        Self {
            positions: flatten(positions.map(Point2D::to_untyped)),
            tex_coords: flatten(tex_coords.map(Point2D::to_untyped)),
        }
    }

    /// Returns the vertex positions as points.
    #[inline]
    pub fn position_points(&self) -> [Point2D<Coordinate, Ndc>; 4] {
        unflatten(self.positions).map(Point2D::from_untyped)
    }

    /// Returns the texture coordinates as points.
    #[inline]
    pub fn tex_coord_points(&self) -> [Point2D<Coordinate, TexCoord>; 4] {
        unflatten(self.tex_coords).map(Point2D::from_untyped)
    }

    /// Mirrors the quad left-to-right on screen by exchanging the positions of the left and
    /// right vertices in each row, while leaving texture coordinates alone.
    ///
    /// Applying this twice restores the original.
    #[inline]
    #[must_use]
    pub fn with_mirrored_positions(self) -> Self {
        Self {
            positions: flatten(swap_vertex_pairs(unflatten(self.positions))),
            ..self
        }
    }

    /// Mirrors the displayed image by exchanging the texture coordinates of the left and
    /// right vertices in each row, while leaving positions alone.
    ///
    /// Applying this twice restores the original.
    #[inline]
    #[must_use]
    pub fn with_mirrored_tex_coords(self) -> Self {
        Self {
            tex_coords: flatten(swap_vertex_pairs(unflatten(self.tex_coords))),
            ..self
        }
    }

    /// Copies the vertex data into caller-provided buffers, such as a mapped vertex buffer.
    #[inline]
    pub fn write_to(&self, positions: &mut [Coordinate; 8], tex_coords: &mut [Coordinate; 8]) {
        *positions = self.positions;
        *tex_coords = self.tex_coords;
    }

    /// Returns the vertex data as bytes in native endianness: the 8 position floats followed
    /// by the 8 texture coordinate floats.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Quad generation.
impl Framer {
    /// Returns a quad whose positions outline where the picture appears within the frame,
    /// and whose texture coordinates show the whole picture.
    ///
    /// This is suited to drawing the picture on top of a cleared frame: with
    /// [`FitMode::AspectFit`](crate::FitMode::AspectFit) the quad is letterboxed inside the
    /// viewport, and with [`FitMode::AspectFill`](crate::FitMode::AspectFill) it extends
    /// past the viewport edges and is clipped.
    ///
    /// `rotation` turns the quad about the center of the viewport. If `mirror` is true, the
    /// picture is flipped about its own vertical axis.
    pub fn dynamic_quad(&self, rotation: QuarterRotation, mirror: bool) -> Quad {
        let mut positions = corners(self.size_of(Space::Picture));
        self.transform_points_from(Space::Picture, Space::Frame, &mut positions, Normalization::Ndc);

        if rotation != QuarterRotation::None {
            let matrix = rotation.to_matrix();
            for point in &mut positions {
                *point = matrix.transform_point(*point);
            }
        }

        let quad = Quad {
            positions: flatten(positions),
            tex_coords: Quad::UNIT_TEX_COORDS,
        };
        if mirror {
            quad.with_mirrored_positions()
        } else {
            quad
        }
    }

    /// Returns a quad covering the whole viewport, whose texture coordinates are chosen so
    /// that the picture appears fitted within the frame.
    ///
    /// This is suited to a single draw which also produces the letterbox bars, by way of the
    /// texture sampler's border handling: with
    /// [`FitMode::AspectFit`](crate::FitMode::AspectFit) some texture coordinates fall
    /// outside `0..=1`.
    ///
    /// `rotation` turns the texture coordinates about the center of the picture, and `mirror`
    /// exchanges them between the left and right vertices.
    pub fn fullscreen_quad(&self, rotation: QuarterRotation, mirror: bool) -> Quad {
        let mut tex_coords = corners(self.size_of(Space::Frame));
        self.transform_points_from(
            Space::Frame,
            Space::Picture,
            &mut tex_coords,
            Normalization::Normalize,
        );

        if rotation != QuarterRotation::None {
            let matrix = Affine::from_translation([-0.5, -0.5])
                .then(&rotation.to_matrix())
                .then(&Affine::from_translation([0.5, 0.5]));
            for point in &mut tex_coords {
                *point = matrix.transform_point(*point);
            }
        }

        let quad = Quad {
            positions: Quad::FULLSCREEN_POSITIONS,
            tex_coords: flatten(tex_coords),
        };
        if mirror {
            quad.with_mirrored_tex_coords()
        } else {
            quad
        }
    }
}

/// Corners of a box of the given size, in [`Quad`] vertex order with +Y up.
fn corners(size: FreeSize) -> [FreePoint; 4] {
    let far = far_corner(size);
    [point2(0.0, far.y), far, point2(0.0, 0.0), point2(far.x, 0.0)]
}

fn flatten(points: [FreePoint; 4]) -> [Coordinate; 8] {
    let [p0, p1, p2, p3] = points;
    [p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y]
}

fn unflatten(coords: [Coordinate; 8]) -> [FreePoint; 4] {
    let [x0, y0, x1, y1, x2, y2, x3, y3] = coords;
    [point2(x0, y0), point2(x1, y1), point2(x2, y2), point2(x3, y3)]
}

/// Exchanges left and right in both rows of vertices.
fn swap_vertex_pairs<T>([top_left, top_right, bottom_left, bottom_right]: [T; 4]) -> [T; 4] {
    [top_right, top_left, bottom_right, bottom_left]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq_point;
    use crate::{FitMode, Origin};
    use euclid::size2;
    use exhaust::Exhaust as _;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn portrait_demo() -> Framer {
        Framer::new(
            size2(720.0, 1280.0),
            size2(360.0, 480.0),
            Origin::BottomLeft,
            FitMode::AspectFit,
        )
        .unwrap()
    }

    /// Same aspect ratio, so the picture exactly fills the frame.
    fn matching_aspect() -> Framer {
        Framer::new(
            size2(200.0, 100.0),
            size2(400.0, 200.0),
            Origin::BottomLeft,
            FitMode::AspectFit,
        )
        .unwrap()
    }

    #[test]
    fn dynamic_letterboxed() {
        assert_eq!(
            portrait_demo().dynamic_quad(QuarterRotation::None, false),
            Quad {
                positions: [-0.75, 1.0, 0.75, 1.0, -0.75, -1.0, 0.75, -1.0],
                tex_coords: Quad::UNIT_TEX_COORDS,
            }
        );
    }

    #[test]
    fn dynamic_matching_aspect_is_fullscreen() {
        let quad = matching_aspect().dynamic_quad(QuarterRotation::None, false);
        assert_eq!(quad.positions, Quad::FULLSCREEN_POSITIONS);
    }

    #[test]
    fn dynamic_rotated() {
        assert_eq!(
            portrait_demo().dynamic_quad(QuarterRotation::Clockwise90, false),
            Quad {
                positions: [-1.0, -0.75, -1.0, 0.75, 1.0, -0.75, 1.0, 0.75],
                tex_coords: Quad::UNIT_TEX_COORDS,
            }
        );
    }

    #[test]
    fn dynamic_mirrored() {
        assert_eq!(
            portrait_demo().dynamic_quad(QuarterRotation::None, true),
            Quad {
                positions: [0.75, 1.0, -0.75, 1.0, 0.75, -1.0, -0.75, -1.0],
                tex_coords: Quad::UNIT_TEX_COORDS,
            }
        );
    }

    #[test]
    fn fullscreen_letterboxed() {
        let quad = portrait_demo().fullscreen_quad(QuarterRotation::None, false);
        assert_eq!(quad.positions, Quad::FULLSCREEN_POSITIONS);
        let expected: [FreePoint; 4] = [
            point2(-1.0 / 6.0, 1.0),
            point2(7.0 / 6.0, 1.0),
            point2(-1.0 / 6.0, 0.0),
            point2(7.0 / 6.0, 0.0),
        ];
        for (actual, expected) in unflatten(quad.tex_coords).into_iter().zip(expected) {
            assert!(approx_eq_point(actual, expected, 1e-5), "{actual:?} ≠ {expected:?}");
        }
    }

    #[rstest]
    #[case(QuarterRotation::None, Quad::UNIT_TEX_COORDS)]
    #[case(QuarterRotation::Clockwise90, [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0])]
    #[case(QuarterRotation::Clockwise180, [1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0])]
    #[case(QuarterRotation::Clockwise270, [1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0])]
    fn fullscreen_rotated(#[case] rotation: QuarterRotation, #[case] expected: [f32; 8]) {
        let quad = matching_aspect().fullscreen_quad(rotation, false);
        assert_eq!(quad.positions, Quad::FULLSCREEN_POSITIONS);
        assert_eq!(quad.tex_coords, expected);
    }

    #[test]
    fn fullscreen_mirrored() {
        let quad = matching_aspect().fullscreen_quad(QuarterRotation::None, true);
        assert_eq!(
            quad,
            Quad {
                positions: Quad::FULLSCREEN_POSITIONS,
                tex_coords: [1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0],
            }
        );
    }

    #[test]
    fn mirroring_twice_restores() {
        let framer = portrait_demo();
        for rotation in QuarterRotation::exhaust() {
            let dynamic = framer.dynamic_quad(rotation, true);
            assert_eq!(
                dynamic.with_mirrored_positions(),
                framer.dynamic_quad(rotation, false)
            );
            let fullscreen = framer.fullscreen_quad(rotation, true);
            assert_eq!(
                fullscreen.with_mirrored_tex_coords(),
                framer.fullscreen_quad(rotation, false)
            );
        }
    }

    #[test]
    fn typed_points() {
        let quad = Quad::from_vertices(
            [point2(-1.0, 1.0), point2(1.0, 1.0), point2(-1.0, -1.0), point2(1.0, -1.0)],
            [point2(0.0, 1.0), point2(1.0, 1.0), point2(0.0, 0.0), point2(1.0, 0.0)],
        );
        assert_eq!(quad.positions, Quad::FULLSCREEN_POSITIONS);
        assert_eq!(quad.tex_coords, Quad::UNIT_TEX_COORDS);
        assert_eq!(quad.position_points()[3], point2(1.0, -1.0));
        assert_eq!(quad.tex_coord_points()[0], point2(0.0, 1.0));
    }

    #[test]
    fn write_to_buffers() {
        let quad = portrait_demo().dynamic_quad(QuarterRotation::Clockwise180, true);
        let mut positions = [f32::NAN; 8];
        let mut tex_coords = [f32::NAN; 8];
        quad.write_to(&mut positions, &mut tex_coords);
        assert_eq!(positions, quad.positions);
        assert_eq!(tex_coords, quad.tex_coords);
    }

    #[test]
    fn bytes_layout() {
        let quad = matching_aspect().fullscreen_quad(QuarterRotation::None, false);
        let bytes = quad.as_bytes();
        assert_eq!(bytes.len(), 16 * size_of::<f32>());
        assert_eq!(bytes[..4], (-1.0f32).to_ne_bytes());
        assert_eq!(bytes[32..36], 0.0f32.to_ne_bytes());
        assert_eq!(bytes[36..40], 1.0f32.to_ne_bytes());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_form() {
        let quad = matching_aspect().dynamic_quad(QuarterRotation::None, false);
        let json = serde_json::to_value(quad).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "positions": [-1.0, 1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0],
                "tex_coords": [0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            })
        );
        assert_eq!(serde_json::from_value::<Quad>(json).unwrap(), quad);
    }
}
