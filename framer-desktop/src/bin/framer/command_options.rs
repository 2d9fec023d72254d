//! Command line option parsing.

use std::str::FromStr;

use clap::Parser;
use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};
use exhaust::Exhaust;

use framer::euclid::{Size2D, point2};
use framer::math::{Coordinate, FrameSize, FreePoint, FreeSize, PictureSize, QuarterRotation};
use framer::{FitMode, Normalization, Origin, Space};
use framer_desktop::config_files::{FramerSettings, SettingsArgs};
use framer_desktop::logging::LoggingArgs;
use framer_desktop::report::{OutputKind, PointQuery};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "framer", author, about, version,
    after_help = "\
Example: where does the top left corner of a 360×480 window fall within a 720×1280 video?

    framer --picture-size 720x1280 --frame-size 360x480 \\
        --from frame --normalization normalize --output points 0,480",
)]
pub(crate) struct FramerArgs {
    /// Size of the picture (image or video frame) in pixels.
    #[arg(long = "picture-size", short = 'p', value_name = "W×H", default_value = "720×1280")]
    pub(crate) picture_size: SizeArg,

    /// Size of the frame (window or viewport) in pixels.
    #[arg(long = "frame-size", short = 'f', value_name = "W×H", default_value = "360×480")]
    pub(crate) frame_size: SizeArg,

    #[command(flatten)]
    pub(crate) framing: FramingArgs,

    /// What to compute; may be repeated or comma-separated.
    #[arg(
        long = "output",
        short = 'o',
        value_enum,
        value_delimiter = ',',
        default_values_t = [OutputKind::Ratio, OutputKind::FullscreenQuad],
    )]
    pub(crate) outputs: Vec<OutputKind>,

    /// Space which the given points, and the output matrix, transform from.
    #[arg(long = "from", default_value = "picture", value_parser = keyword_parser::<Space>())]
    pub(crate) from: Space,

    /// Normalization applied to transformed points.
    #[arg(
        long = "normalization",
        short = 'n',
        default_value = "none",
        value_parser = keyword_parser::<Normalization>(),
    )]
    pub(crate) normalization: Normalization,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,

    #[command(flatten)]
    pub(crate) settings: SettingsArgs,

    /// Points to transform for `--output points`.
    #[arg(value_name = "X,Y", allow_hyphen_values = true)]
    pub(crate) points: Vec<PointArg>,
}

impl FramerArgs {
    pub(crate) fn point_query(&self) -> PointQuery {
        PointQuery {
            from: self.from,
            normalization: self.normalization,
            points: self.points.iter().map(|&PointArg(p)| p).collect(),
        }
    }
}

/// Options which, when given, override the corresponding [`FramerSettings`] fields.
#[derive(Clone, Debug, Default, clap::Args)]
pub(crate) struct FramingArgs {
    /// Where the origin of both coordinate systems lies [default from settings: bottom-left]
    #[arg(long = "origin", value_parser = keyword_parser::<Origin>())]
    pub(crate) origin: Option<Origin>,

    /// Whether the picture fits inside the frame or fills it [default from settings: aspect-fit]
    #[arg(long = "fit", value_parser = keyword_parser::<FitMode>())]
    pub(crate) fit: Option<FitMode>,

    /// Rotation of the output quads, in degrees; a multiple of 90.
    ///
    /// Positive angles turn clockwise in image coordinates (+Y down), which is
    /// counterclockwise on screen (+Y up).
    #[arg(
        long = "rotation",
        short = 'r',
        value_name = "DEGREES",
        value_parser = parse_rotation,
        allow_hyphen_values = true
    )]
    pub(crate) rotation: Option<QuarterRotation>,

    /// Mirror the output quads horizontally.
    #[arg(
        long = "mirror",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub(crate) mirror: Option<bool>,
}

impl FramingArgs {
    pub(crate) fn apply_to(&self, settings: FramerSettings) -> FramerSettings {
        FramerSettings {
            origin: self.origin.unwrap_or(settings.origin),
            fit: self.fit.unwrap_or(settings.fit),
            rotation: self.rotation.unwrap_or(settings.rotation),
            mirror: self.mirror.unwrap_or(settings.mirror),
        }
    }
}

/// Value parser for the option enums, which accepts exactly their kebab-case names.
fn keyword_parser<T>() -> impl TypedValueParser<Value = T>
where
    T: Exhaust
        + FromStr<Err = strum::ParseError>
        + Into<&'static str>
        + Clone
        + Send
        + Sync
        + 'static,
{
    PossibleValuesParser::new(T::exhaust().map(|value| PossibleValue::new(value.into())))
        .try_map(|string| T::from_str(&string))
}

fn parse_rotation(s: &str) -> Result<QuarterRotation, String> {
    let degrees = s
        .parse::<i32>()
        .map_err(|_| format!("{s:?} not an integer number of degrees"))?;
    if degrees % 90 != 0 {
        return Err(format!("{degrees} is not a multiple of 90 degrees"));
    }
    Ok(QuarterRotation::from_clockwise_quarter_turns(degrees / 90))
}

/// Picture or frame size, parseable in a variety of formats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SizeArg(pub FreeSize);

impl SizeArg {
    pub(crate) fn picture(self) -> PictureSize {
        Size2D::from_untyped(self.0)
    }
    pub(crate) fn frame(self) -> FrameSize {
        Size2D::from_untyped(self.0)
    }
}

impl FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dims: [Coordinate; 2] = parse_pair(s, &['×', 'x', ',', ';', ' '])?;
        Ok(SizeArg(Size2D::from(dims)))
    }
}

/// A point given on the command line as `X,Y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PointArg(pub FreePoint);

impl FromStr for PointArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_pair(s, &[',', ';', ' '])?;
        Ok(PointArg(point2(x, y)))
    }
}

fn parse_pair(s: &str, separators: &[char]) -> Result<[Coordinate; 2], String> {
    s.split(separators)
        .map(|s| {
            s.parse::<Coordinate>()
                .map_err(|_| format!("{s:?} not a number"))
        })
        .collect::<Result<Vec<Coordinate>, String>>()?
        .try_into()
        .map_err(|_| String::from("must be two numbers"))
}
