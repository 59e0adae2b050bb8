use std::path::PathBuf;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_SAVE_FILENAME};
use crate::error::ConfigError;

/// Prefix of the environment variables read by [`load_config`].
pub const ENV_PREFIX: &str = "PACMAN_";

/// Display layer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where [`crate::display::MainViewModel::save`] writes the game
    #[serde(default = "default_save_filename")]
    pub save_filename: PathBuf,
    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    pub fn new(save_filename: impl Into<PathBuf>) -> Self {
        Self {
            save_filename: save_filename.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_filename: default_save_filename(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_save_filename() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_FILENAME)
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Loads the configuration from `PACMAN_`-prefixed environment variables,
/// falling back to defaults for anything unset.
pub fn load_config() -> Result<Config, ConfigError> {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()?;

    if config.save_filename.as_os_str().is_empty() {
        return Err(ConfigError::EmptySaveFilename);
    }

    Ok(config)
}
