//! Persistent default framing settings, and the command-line options which override them.

use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use directories_next::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use framer::math::QuarterRotation;
use framer::{FitMode, Origin};

/// If this environment variable is set, then [`load_config()`] refuses to touch the user's
/// configuration directory. Tests set it to make sure they are hermetic.
const NO_USER_CONFIG_ENV: &str = "FRAMER_DO_NOT_USE_CONFIG_FILES_IN_TESTS";

/// Framing choices that are likely to stay the same across many invocations, and so may be
/// stored in a settings file.
///
/// Fields missing from the file take their default values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FramerSettings {
    /// Origin convention of the coordinates the user works in.
    pub origin: Origin,
    /// Whether the picture is fitted inside the frame or fills it.
    pub fit: FitMode,
    /// Rotation applied to generated quads.
    pub rotation: QuarterRotation,
    /// Whether generated quads are mirrored.
    pub mirror: bool,
}

// -------------------------------------------------------------------------------------------------

/// Load settings from a platform-appropriate read/write location, creating the file with
/// default contents if it does not exist.
///
/// This does not respect command-line options. Use [`SettingsArgs`] for that.
pub fn load_config() -> Result<FramerSettings, anyhow::Error> {
    if std::env::var_os(NO_USER_CONFIG_ENV).is_some() {
        anyhow::bail!(
            "tests should be hermetic and not touch user config files \
            (environment variable {NO_USER_CONFIG_ENV} set, \
            but --no-config-files not passed)"
        );
    }

    let project_dirs = ProjectDirs::from("", "", "framer")
        .ok_or_else(|| anyhow::anyhow!("could not find configuration directory"))?;
    fs::create_dir_all(project_dirs.config_dir())?;

    Ok(read_or_create_default_json_file(
        "framer settings",
        &project_dirs.config_dir().join("settings.json"),
        FramerSettings::default,
    ))
}

// -------------------------------------------------------------------------------------------------

/// [`clap::Args`] argument group struct for args that affect what settings are used.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct SettingsArgs {
    /// Ignore all configuration files, using only defaults and command-line options.
    #[arg(long = "no-config-files", conflicts_with = "config_file")]
    pub no_config_files: bool,

    /// Read settings from this file instead of the default location.
    ///
    /// Unlike the default settings file, this file must exist.
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,
}

impl SettingsArgs {
    /// Finds the [`FramerSettings`] these args call for.
    pub fn load_settings(&self) -> Result<FramerSettings, anyhow::Error> {
        match (self.no_config_files, &self.config_file) {
            (true, _) => Ok(FramerSettings::default()),
            (false, Some(path)) => read_json_file(path)
                .with_context(|| format!("Error loading settings file {}", path.display())),
            (false, None) => load_config().context("Error loading configuration files"),
        }
    }
}

// -------------------------------------------------------------------------------------------------

fn read_json_file<V: DeserializeOwned>(path: &Path) -> Result<V, anyhow::Error> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    log::trace!("Loaded settings from {path}", path = path.display());
    Ok(value)
}

fn read_or_create_default_json_file<V: DeserializeOwned + Serialize>(
    description: &str,
    path: &Path,
    default: fn() -> V,
) -> V {
    match File::open(path) {
        Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
            Ok(value) => {
                log::trace!("Loaded {description} from {path}", path = path.display());
                value
            }
            Err(e) => {
                log::warn!(
                    "Syntax error in {description} loaded from {path}; \
                    using default values. Error: {e}",
                    path = path.display(),
                );
                default()
            }
        },
        Err(open_for_read_error) if open_for_read_error.kind() == std::io::ErrorKind::NotFound => {
            log::info!(
                "No {description} file found; creating {path}",
                path = path.display()
            );
            let value = default();
            let write_result = serde_json::to_string_pretty(&value)
                .map_err(anyhow::Error::from)
                .and_then(|json_text| Ok(fs::write(path, json_text.as_bytes())?));
            match write_result {
                Ok(()) => log::trace!(
                    "Wrote default {description} to {path}",
                    path = path.display()
                ),
                Err(write_error) => log::error!(
                    "Error while writing default {description} file {path}: {write_error}",
                    path = path.display(),
                ),
            }
            value
        }
        Err(e) => {
            log::error!(
                "Error while reading {description} file {path}: {e}",
                path = path.display(),
            );
            default()
        }
    }
}
