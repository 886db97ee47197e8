//! Error types for the infrastructure around the simulation.
//!
//! The simulation itself is total; these only cover loading configuration
//! and persisting the best score.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::config::GameConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for a game config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parsed but describe an unplayable game.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while persisting the best score.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
