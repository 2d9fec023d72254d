//! Computing the results the user asked for, in a serializable form.

use framer::math::{Affine, Coordinate, FreePoint};
use framer::{Framer, Normalization, Quad, Space};

use crate::config_files::FramerSettings;

/// A kind of result which may be requested with `--output`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
#[non_exhaustive]
pub enum OutputKind {
    /// The scale factor from picture pixels to frame pixels.
    Ratio,
    /// The affine matrix from the `--from` space to the other space.
    Matrix,
    /// A quad positioned where the picture appears in the frame.
    DynamicQuad,
    /// A quad covering the frame, with texture coordinates placing the picture.
    FullscreenQuad,
    /// The given points, transformed from the `--from` space to the other space.
    Points,
}

/// Points to transform, and how.
#[derive(Clone, Debug, PartialEq)]
pub struct PointQuery {
    /// Space the points are given in; they are transformed to the other one.
    pub from: Space,
    /// Normalization applied to the transformed points.
    pub normalization: Normalization,
    #[allow(missing_docs)]
    pub points: Vec<FreePoint>,
}

/// Results of one invocation, to be written out as JSON.
///
/// Each field is present only if the corresponding [`OutputKind`] was requested.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub ratio: Option<Coordinate>,
    /// Matrix elements `[a, b, c, d, tx, ty]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Affine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub dynamic_quad: Option<Quad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[allow(missing_docs)]
    pub fullscreen_quad: Option<Quad>,
    /// Transformed points, as `[x, y]` pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<[Coordinate; 2]>>,
}

impl Report {
    /// Computes every requested output.
    ///
    /// `settings` supplies the rotation and mirroring of the quads; its origin and fit mode
    /// should already have been used to construct `framer`.
    pub fn new(
        framer: &Framer,
        settings: &FramerSettings,
        query: &PointQuery,
        outputs: &[OutputKind],
    ) -> Self {
        let mut report = Self::default();
        for &output in outputs {
            match output {
                OutputKind::Ratio => report.ratio = Some(framer.ratio()),
                OutputKind::Matrix => {
                    report.matrix = Some(framer.transform_from(query.from, query.from.other()));
                }
                OutputKind::DynamicQuad => {
                    report.dynamic_quad =
                        Some(framer.dynamic_quad(settings.rotation, settings.mirror));
                }
                OutputKind::FullscreenQuad => {
                    report.fullscreen_quad =
                        Some(framer.fullscreen_quad(settings.rotation, settings.mirror));
                }
                OutputKind::Points => {
                    let mut points = query.points.clone();
                    framer.transform_points_from(
                        query.from,
                        query.from.other(),
                        &mut points,
                        query.normalization,
                    );
                    report.points = Some(points.into_iter().map(|p| p.to_array()).collect());
                }
            }
        }
        report
    }
}
