//! # Pool Error Types
//!
//! Errors raised while loading pool configuration. Pool operations
//! themselves never fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring a pool.
#[derive(Error, Debug)]
pub enum PoolError {
    /// The configuration file could not be read.
    #[error("failed to read pool config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid TOML or has the wrong shape.
    #[error("failed to parse pool config: {0}")]
    Parse(String),

    /// The configuration parsed but holds contradictory values.
    #[error("invalid pool configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for PoolError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type for pool configuration.
pub type PoolResult<T> = Result<T, PoolError>;
