use std::{fs, io, path::Path};

use potato_blocker_util::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod logging;

pub use logging::LoggingConfig;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] io::Error),
    #[error("Config file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where [`BlockerConfig::load`] got its values from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file.
    File,
    /// The file did not exist and the defaults were written to it.
    CreatedDefault,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct BlockerConfig {
    /// Language used for player feedback and log lines.
    pub language: Language,
    pub logging: LoggingConfig,
}

impl BlockerConfig {
    /// Reads the config at `path`, writing the defaults there first if the file
    /// does not exist yet. Missing fields fall back to their defaults.
    ///
    /// Nothing is logged here, since this runs before the plugin's logger is
    /// installed; callers report the returned [`ConfigSource`] themselves.
    pub fn load(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok((toml::from_str(&content)?, ConfigSource::File))
        } else {
            let config = Self::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, toml::to_string(&config)?)?;
            Ok((config, ConfigSource::CreatedDefault))
        }
    }
}
