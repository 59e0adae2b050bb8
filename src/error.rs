//! Centralized error types for the display layer.
//!
//! Very little here can fail: bad input is ignored and the engine validates
//! its own data. What remains is writing save files and loading configuration.

use std::{io, path::PathBuf};

/// Main error type for the display layer.
#[derive(thiserror::Error, Debug)]
pub enum DisplayError {
    #[error("Save error: {0}")]
    Save(#[from] SaveError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while writing a save file.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("Could not create save file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write save file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Save filename must not be empty")]
    EmptySaveFilename,
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Extract(Box::new(error))
    }
}

/// Result type for display layer operations.
pub type DisplayResult<T> = Result<T, DisplayError>;
