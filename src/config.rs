//! TOML configuration for building a ring.
//!
//! Every section is optional; an empty file yields a CRC32 ring with
//! [`DEFAULT_REPLICAS`] replicas and no targets.
//!
//! ```toml
//! [ring]
//! replicas = 64
//! hasher = "murmur3"
//!
//! [[ring.targets]]
//! name = "cache-a:11211"
//!
//! [[ring.targets]]
//! name = "cache-b:11211"
//! weight = 2.0
//!
//! [log]
//! level = "debug"
//! json = true
//! ```

use std::path::Path;

use ringhash_core::{BoxedHasher, DEFAULT_REPLICAS, HashAlgorithm, HashRing};
use serde::Deserialize;
use tracing::info;

use crate::errors::ConfigError;
use crate::shared::SharedRing;

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Ring shape and initial membership.
    pub ring: RingSection,
    /// Logging configuration.
    pub log: LogSection,
}

/// `[ring]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RingSection {
    /// Positions per unit of weight. Must be greater than zero.
    pub replicas: u32,
    /// Hash strategy: `crc32`, `fnv1a`, `murmur3`, `xxh32` or `md5`.
    pub hasher: HashAlgorithm,
    /// Targets registered at start-up, in this order.
    pub targets: Vec<TargetSection>,
}

impl Default for RingSection {
    fn default() -> Self {
        Self {
            replicas: DEFAULT_REPLICAS,
            hasher: HashAlgorithm::default(),
            targets: Vec::new(),
        }
    }
}

/// One `[[ring.targets]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSection {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// `[log]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Maximum level emitted (e.g. `"info"`, `"debug"`, `"trace"`).
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl RingConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse config from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Builds a ring and registers the configured targets in file order.
    ///
    /// Registration stops at the first invalid target; the error names it.
    pub fn build_ring(&self) -> Result<HashRing<BoxedHasher>, ConfigError> {
        let section = &self.ring;
        let hasher = section.hasher.build();
        let mut ring = HashRing::with_hasher_and_replicas(hasher, section.replicas)?;
        for target in &section.targets {
            ring.add_target_weighted(&target.name, target.weight)?;
        }

        info!(
            hasher = %section.hasher,
            replicas = section.replicas,
            targets = ring.target_count(),
            positions = ring.position_count(),
            "built ring from config"
        );
        Ok(ring)
    }

    /// Same as [`RingConfig::build_ring`], wrapped for sharing across threads.
    pub fn build_shared(&self) -> Result<SharedRing<BoxedHasher>, ConfigError> {
        self.build_ring().map(SharedRing::new)
    }
}
