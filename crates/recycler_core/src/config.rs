//! # Pool Configuration
//!
//! Pool tuning loaded once at startup from TOML.
//!
//! ```toml
//! name = "particles"
//! initial_capacity = 256
//! max_idle = 1024
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, PoolResult};

/// Tuning for a single pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// Label used in log output.
    pub name: String,
    /// Free-list slots reserved up front. No instances are constructed.
    pub initial_capacity: usize,
    /// Upper bound on idle instances. `None` keeps every returned instance.
    pub max_idle: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: String::from("pool"),
            initial_capacity: 0,
            max_idle: None,
        }
    }
}

impl PoolConfig {
    /// Largest accepted `initial_capacity`.
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

    /// Creates a named config with default tuning.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parses and validates a config from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Parse`] for malformed TOML and
    /// [`PoolError::InvalidConfig`] if validation fails.
    pub fn from_toml_str(source: &str) -> PoolResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(
            name = %config.name,
            initial_capacity = config.initial_capacity,
            max_idle = ?config.max_idle,
            "loaded pool config"
        );
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`PoolConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> PoolResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| PoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks the config for contradictory values.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] when `initial_capacity` exceeds
    /// [`PoolConfig::MAX_INITIAL_CAPACITY`], or when `max_idle` is zero or
    /// smaller than `initial_capacity`.
    pub fn validate(&self) -> PoolResult<()> {
        if self.initial_capacity > Self::MAX_INITIAL_CAPACITY {
            return Err(PoolError::InvalidConfig(format!(
                "pool '{}': initial_capacity {} exceeds limit {}",
                self.name,
                self.initial_capacity,
                Self::MAX_INITIAL_CAPACITY
            )));
        }

        match self.max_idle {
            Some(0) => Err(PoolError::InvalidConfig(format!(
                "pool '{}': max_idle must be greater than zero",
                self.name
            ))),
            Some(max_idle) if self.initial_capacity > max_idle => {
                Err(PoolError::InvalidConfig(format!(
                    "pool '{}': initial_capacity {} exceeds max_idle {}",
                    self.name, self.initial_capacity, max_idle
                )))
            }
            _ => Ok(()),
        }
    }
}
