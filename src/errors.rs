use std::path::PathBuf;

use ringhash_core::RingError;
use thiserror::Error;

/// Errors raised while loading configuration or setting up from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("failed to install tracing subscriber: {0}")]
    Telemetry(String),

    #[error(transparent)]
    Ring(#[from] RingError),
}
