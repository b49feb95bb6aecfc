//! Tracing subscriber set-up.
//!
//! The ring emits `debug!` events when targets come and go, `warn!` on
//! position collisions and `trace!` when its sorted cache is rebuilt. Call
//! [`init`] once at startup to print them.

use tracing::Level;

use crate::config::LogSection;
use crate::errors::ConfigError;

/// Installs a global `fmt` subscriber according to the `[log]` section.
///
/// Fails if the level does not parse or a global subscriber is already set.
pub fn init(log: &LogSection) -> Result<(), ConfigError> {
    let level = parse_level(&log.level)?;
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level);

    let installed = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| ConfigError::Telemetry(e.to_string()))
}

fn parse_level(level: &str) -> Result<Level, ConfigError> {
    level
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}
