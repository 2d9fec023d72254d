//! Binary for the `framer` command-line tool.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use std::io::Write as _;

use anyhow::Context as _;
use clap::Parser as _;

use framer::Framer;
use framer_desktop::logging;
use framer_desktop::report::Report;

mod command_options;
use command_options::FramerArgs;

fn main() -> Result<(), anyhow::Error> {
    // Parse and transform command-line arguments.
    let options = FramerArgs::parse();
    let point_query = options.point_query();
    // Destructure as a check that we're using/skipping all the args
    let FramerArgs {
        picture_size,
        frame_size,
        framing,
        outputs,
        from: _,          // used in point_query
        normalization: _, // used in point_query
        logging: logging_args,
        settings: settings_args,
        points: _, // used in point_query
    } = options;

    logging::install(&logging_args)?;

    let settings = framing.apply_to(settings_args.load_settings()?);
    log::debug!("using settings {settings:?}");

    let framer = Framer::new(
        picture_size.picture(),
        frame_size.frame(),
        settings.origin,
        settings.fit,
    )
    .context("invalid framing parameters")?;

    let report = Report::new(&framer, &settings, &point_query, &outputs);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).context("failed to write output")?;
    writeln!(stdout).context("failed to write output")?;
    Ok(())
}
