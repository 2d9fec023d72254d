//! Logging to stderr.

use anyhow::Context as _;

/// A [`clap::Args`] struct for options controlling log output to stderr.
#[derive(Clone, Debug, Default, clap::Args)]
#[expect(clippy::module_name_repetitions)]
pub struct LoggingArgs {
    /// Additional logging to stderr.
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Remove timestamps from logs so that they are deterministic.
    ///
    /// This option is intended for internal tests only.
    #[arg(long = "simplify-log-format", hide = true)]
    pub simplify_log_format: bool,
}

impl LoggingArgs {
    /// Returns the most verbose level that should be written.
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            false => log::LevelFilter::Info,
            true => log::LevelFilter::Trace,
        }
    }

    fn simplelog_config(&self) -> simplelog::Config {
        use log::LevelFilter::{Error, Off};

        // Note: This has no target filters because `FramerLogger` calls
        // `util::log::standard_filter` to do it.
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_time_level(if self.simplify_log_format { Off } else { Error })
            .build()
    }
}

/// Install a [`log`] global logger based on user-provided `options`.
///
/// Fails if a global logger has already been installed.
pub fn install(options: &LoggingArgs) -> Result<(), anyhow::Error> {
    let max_level = options.level();
    let stderr_logger =
        *simplelog::WriteLogger::new(max_level, options.simplelog_config(), std::io::stderr());

    log::set_boxed_logger(Box::new(FramerLogger { stderr_logger }))
        .context("failed to initialize logging")?;
    log::set_max_level(max_level);
    Ok(())
}

/// [`log::Log`] implementation that [`install()`] registers globally.
struct FramerLogger {
    stderr_logger: simplelog::WriteLogger<std::io::Stderr>,
}

impl log::Log for FramerLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        framer::util::log::standard_filter(metadata)
            && log::Log::enabled(&self.stderr_logger, metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if !framer::util::log::standard_filter(record.metadata()) {
            return;
        }
        log::Log::log(&self.stderr_logger, record);
    }

    fn flush(&self) {
        log::Log::flush(&self.stderr_logger);
    }
}
