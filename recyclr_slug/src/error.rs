//! Error types for slug configuration and the uniqueness search.

use std::path::PathBuf;

use thiserror::Error;

/// Problems detected while validating slug options or searching for a free slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("invalid separator {0:?}: must not be alphanumeric or whitespace")]
    InvalidSeparator(char),
    #[error("invalid max length {0}: must be at least 1")]
    InvalidMaxLength(usize),
    #[error("invalid max attempts {0}: must be at least 1")]
    InvalidMaxAttempts(usize),
}

/// Failure of a uniqueness search.
///
/// `E` is the error type of the caller's existence check.
#[derive(Debug, Error)]
pub enum UniqueSlugError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[error("no free slug for '{base}' after {attempts} attempts")]
    Exhausted { base: String, attempts: usize },
    #[error("existence check failed: {0}")]
    Check(#[source] E),
}

/// Failure to load a slug configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse slug config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid slug config: {0}")]
    Invalid(#[from] SlugError),
}
