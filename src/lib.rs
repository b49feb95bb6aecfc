//! Consistent hash ring for sharded caches, partitioned storage and other
//! load-distribution layers.
//!
//! The ring engine lives in [`ringhash_core`] and is re-exported here. This
//! crate adds what an embedding service needs around it: a thread-safe
//! [`SharedRing`] handle, TOML configuration via [`RingConfig`], and
//! [`telemetry`] set-up for the ring's `tracing` events.

pub mod config;
mod errors;
pub mod shared;
pub mod telemetry;

pub use config::RingConfig;
pub use errors::ConfigError;
pub use ringhash_core::*;
pub use shared::SharedRing;
