//! A ring shared between threads.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use ringhash_core::{Crc32Hasher, HashRing, HashStrategy, RingError};

/// Cloneable, thread-safe handle to a [`HashRing`].
///
/// Lookups share a read lock and may run concurrently; registering or
/// removing a target takes the write lock, so readers never observe a
/// half-applied mutation. Lookups return owned strings because the lock is
/// released before they return; use [`SharedRing::read`] to batch borrowed
/// lookups under one guard.
///
/// # Examples
///
/// ```
/// use ringhash::SharedRing;
///
/// let ring = SharedRing::default();
/// ring.add_targets(["shard-0", "shard-1"]).unwrap();
///
/// let handle = ring.clone();
/// let owner = std::thread::spawn(move || handle.lookup("session:9").unwrap())
///     .join()
///     .unwrap();
/// assert_eq!(owner, ring.lookup("session:9").unwrap());
/// ```
pub struct SharedRing<H = Crc32Hasher> {
    inner: Arc<RwLock<HashRing<H>>>,
}

impl<H> Clone for SharedRing<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedRing<Crc32Hasher> {
    fn default() -> Self {
        Self::new(HashRing::new())
    }
}

impl<H> From<HashRing<H>> for SharedRing<H> {
    fn from(ring: HashRing<H>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ring)),
        }
    }
}

impl<H> fmt::Debug for SharedRing<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRing").field(&*self.inner.read()).finish()
    }
}

impl<H: HashStrategy> SharedRing<H> {
    pub fn new(ring: HashRing<H>) -> Self {
        Self::from(ring)
    }

    pub fn add_target(&self, target: &str) -> Result<(), RingError> {
        self.inner.write().add_target(target)
    }

    pub fn add_target_weighted(&self, target: &str, weight: f64) -> Result<(), RingError> {
        self.inner.write().add_target_weighted(target, weight)
    }

    /// Registers all targets under a single write lock. Like
    /// [`HashRing::add_targets`], earlier registrations survive a failure.
    pub fn add_targets<I, S>(&self, targets: I) -> Result<(), RingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().add_targets(targets)
    }

    pub fn add_targets_weighted<I, S>(&self, targets: I, weight: f64) -> Result<(), RingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().add_targets_weighted(targets, weight)
    }

    pub fn remove_target(&self, target: &str) -> Result<(), RingError> {
        self.inner.write().remove_target(target)
    }

    pub fn lookup(&self, resource: impl AsRef<[u8]>) -> Result<String, RingError> {
        self.inner.read().lookup(resource).map(str::to_owned)
    }

    pub fn lookup_list(&self, resource: impl AsRef<[u8]>, requested_count: usize) -> Vec<String> {
        let ring = self.inner.read();
        ring.lookup_list(resource, requested_count)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn all_targets(&self) -> Vec<String> {
        self.inner
            .read()
            .all_targets()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn target_count(&self) -> usize {
        self.inner.read().target_count()
    }

    pub fn contains_target(&self, target: &str) -> bool {
        self.inner.read().contains_target(target)
    }

    /// Read guard over the ring. Holding it blocks writers.
    pub fn read(&self) -> RwLockReadGuard<'_, HashRing<H>> {
        self.inner.read()
    }
}
