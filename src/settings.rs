// std imports
use std::include_str;
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;
use wildcard::Granularity;

// local imports
use crate::error::Result;

// ---

pub const APP_NAME: &str = "wcm";

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub ignore_case: bool,
    pub granularity: Granularity,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid with a configuration file.
    ///
    /// An explicitly given file must exist, the per-user file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        let builder = match path {
            Some(path) => {
                log::debug!("loading configuration from {}", path.display());
                builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
            }
            None => match default_path() {
                Some(path) => {
                    log::debug!("looking for configuration at {}", path.display());
                    builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
                }
                None => builder,
            },
        };

        Ok(builder.build()?.try_deserialize()?)
    }
}

/// Returns the location of the per-user configuration file.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}
