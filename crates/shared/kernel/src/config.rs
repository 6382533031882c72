//! Layered configuration loading for the host application.
//!
//! A config file (when given) provides the base; environment variables
//! prefixed with `CREWDECK__` override it, with `__` separating nesting
//! levels (`CREWDECK__LOG__LEVEL` maps to `log.level`).

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to build configuration: {0}")]
    Build(#[source] config::ConfigError),
    #[error("Failed to deserialize configuration: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// Loads a configuration of type `T` from an optional file plus the
/// `CREWDECK__*` environment.
///
/// When `path` is `None`, only the environment is consulted; `T`'s serde
/// defaults must then cover everything the environment does not set.
///
/// # Errors
/// Returns [`ConfigError`] when the named file is missing or malformed, or
/// when the merged sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();
    if let Some(path) = path {
        info!(path = %path.as_ref().display(), "Loading configuration file");
        builder = builder.add_source(File::from(path.as_ref()).required(true));
    }
    builder = builder.add_source(
        Environment::with_prefix("CREWDECK")
            .separator("__")
            .convert_case(config::Case::Snake),
    );

    builder
        .build()
        .map_err(ConfigError::Build)?
        .try_deserialize::<T>()
        .map_err(ConfigError::Deserialize)
}
