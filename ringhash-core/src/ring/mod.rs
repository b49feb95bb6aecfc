//! The consistent hash ring.
//!
//! Each target is hashed onto `replicas * weight` positions of a shared `u32`
//! space. A resource belongs to the first target found walking clockwise
//! from the resource's own hash, wrapping past `u32::MAX` back to the start.

mod bisect;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::{debug, trace, warn};

use crate::errors::RingError;
use crate::hasher::{Crc32Hasher, HashStrategy};

pub use bisect::bisect_left;

/// Positions per unit of weight when none is configured.
pub const DEFAULT_REPLICAS: u32 = 64;

// a target can never occupy more positions than the u32 space holds
const MAX_TARGET_POSITIONS: f64 = u32::MAX as f64;

#[derive(Debug, Clone)]
struct TargetEntry {
    /// Registration order, used to report targets as they were added.
    seq: u64,
    weight: f64,
    /// Every position this target was hashed to, in replica order.
    positions: Vec<u32>,
}

/// Consistent hash ring mapping resources to weighted targets.
///
/// Lookups take `&self`; the ascending position list they search is cached
/// and only rebuilt on the first lookup after a mutation.
///
/// Two targets may hash to the same position. The later registration wins
/// that position and the earlier target silently loses it.
///
/// # Examples
///
/// ```
/// use ringhash_core::HashRing;
///
/// let mut ring = HashRing::new();
/// ring.add_targets(["cache-a", "cache-b", "cache-c"]).unwrap();
///
/// let owner = ring.lookup("user:42").unwrap();
/// assert!(ring.all_targets().contains(&owner));
///
/// let fallbacks = ring.lookup_list("user:42", 2);
/// assert_eq!(fallbacks[0], owner);
/// assert!(fallbacks.len() <= 2);
/// ```
#[derive(Clone)]
pub struct HashRing<H = Crc32Hasher> {
    hasher: H,
    replicas: u32,
    position_to_target: HashMap<u32, Arc<str>>,
    target_to_positions: HashMap<Arc<str>, TargetEntry>,
    next_seq: u64,
    sorted_positions: OnceLock<Vec<u32>>,
}

impl HashRing<Crc32Hasher> {
    /// Empty ring using CRC32 and [`DEFAULT_REPLICAS`].
    pub fn new() -> Self {
        Self::build(Crc32Hasher, DEFAULT_REPLICAS)
    }

    pub fn with_replicas(replicas: u32) -> Result<Self, RingError> {
        Self::with_hasher_and_replicas(Crc32Hasher, replicas)
    }
}

impl Default for HashRing<Crc32Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HashStrategy> HashRing<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self::build(hasher, DEFAULT_REPLICAS)
    }

    /// Empty ring using `hasher`, placing each target on `replicas` positions
    /// per unit of weight.
    ///
    /// Fails with [`RingError::InvalidReplicaCount`] if `replicas` is zero.
    pub fn with_hasher_and_replicas(hasher: H, replicas: u32) -> Result<Self, RingError> {
        if replicas == 0 {
            return Err(RingError::InvalidReplicaCount(replicas));
        }
        Ok(Self::build(hasher, replicas))
    }

    fn build(hasher: H, replicas: u32) -> Self {
        Self {
            hasher,
            replicas,
            position_to_target: HashMap::new(),
            target_to_positions: HashMap::new(),
            next_seq: 0,
            sorted_positions: OnceLock::new(),
        }
    }

    pub fn add_target(&mut self, target: &str) -> Result<(), RingError> {
        self.add_target_weighted(target, 1.0)
    }

    /// Registers `target` on `round(replicas * weight)` positions.
    ///
    /// Replica `i` is placed at `hash(target ++ i)`, with `i` rendered in
    /// decimal. Fails without touching the ring if the target is already
    /// registered, or if the weight is not a positive finite number small
    /// enough to fit the replica count in a `u32`.
    pub fn add_target_weighted(&mut self, target: &str, weight: f64) -> Result<(), RingError> {
        if self.target_to_positions.contains_key(target) {
            return Err(RingError::DuplicateTarget(target.to_owned()));
        }
        let replica_count = (f64::from(self.replicas) * weight).round();
        if !weight.is_finite() || weight <= 0.0 || replica_count > MAX_TARGET_POSITIONS {
            return Err(RingError::InvalidWeight(weight));
        }

        let name: Arc<str> = Arc::from(target);
        let replica_count = replica_count as u32;
        let mut positions = Vec::new();

        for i in 0..replica_count {
            let position = self.hasher.hash(format!("{target}{i}").as_bytes());
            let previous = self.position_to_target.insert(position, Arc::clone(&name));
            if let Some(previous) = previous.filter(|owner| *owner != name) {
                warn!(position, "target {name} took position from {previous}");
            }
            positions.push(position);
        }

        if replica_count == 0 {
            warn!(
                weight,
                replicas = self.replicas,
                "target {name} rounds to zero positions"
            );
        }

        let entry = TargetEntry {
            seq: self.next_seq,
            weight,
            positions,
        };
        self.next_seq += 1;
        self.target_to_positions.insert(name, entry);
        self.invalidate();

        debug!(
            weight,
            replicas = replica_count,
            "added target {target} to ring"
        );
        Ok(())
    }

    /// Registers every target with weight `1.0`, in order.
    ///
    /// Stops at the first failure. Targets registered before it stay on the
    /// ring.
    pub fn add_targets<I, S>(&mut self, targets: I) -> Result<(), RingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_targets_weighted(targets, 1.0)
    }

    pub fn add_targets_weighted<I, S>(&mut self, targets: I, weight: f64) -> Result<(), RingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for target in targets {
            self.add_target_weighted(target.as_ref(), weight)?;
        }
        Ok(())
    }

    /// Removes `target` and every position it was placed at.
    ///
    /// A position the target lost to a later colliding registration is
    /// removed as well, so the newer target loses it too.
    pub fn remove_target(&mut self, target: &str) -> Result<(), RingError> {
        let Some(entry) = self.target_to_positions.remove(target) else {
            return Err(RingError::TargetNotFound(target.to_owned()));
        };

        for position in &entry.positions {
            self.position_to_target.remove(position);
        }
        self.invalidate();

        debug!(
            replicas = entry.positions.len(),
            "removed target {target} from ring"
        );
        Ok(())
    }

    /// The target owning `resource`.
    ///
    /// Fails with [`RingError::NoTargets`] when the ring is empty.
    pub fn lookup(&self, resource: impl AsRef<[u8]>) -> Result<&str, RingError> {
        let mut owners = self.lookup_list(resource, 1).into_iter();
        owners.next().ok_or(RingError::NoTargets)
    }

    /// Distinct targets for `resource`, in order of precedence.
    ///
    /// Visits `requested_count` positions clockwise from the resource's hash,
    /// or every position once if the ring holds fewer, and keeps each owner
    /// the first time it is met. Neighbouring positions often share an
    /// owner, so fewer than `requested_count` targets may come back. A ring
    /// with a single target answers with it for any non-zero count.
    pub fn lookup_list(&self, resource: impl AsRef<[u8]>, requested_count: usize) -> Vec<&str> {
        if requested_count == 0 || self.position_to_target.is_empty() {
            return Vec::new();
        }
        if self.target_to_positions.len() == 1 {
            return self.target_to_positions.keys().map(|name| &**name).collect();
        }

        let sorted = self.sorted_positions();
        let len = sorted.len();
        let start = bisect_left(sorted, self.hasher.hash(resource.as_ref()));
        let mut results: Vec<&str> = Vec::new();

        for step in 0..requested_count.min(len) {
            let position = sorted[(start + step) % len];
            if let Some(owner) = self.position_to_target.get(&position) {
                let owner = &**owner;
                if !results.contains(&owner) {
                    results.push(owner);
                }
            }
        }

        results
    }

    /// All registered targets, in the order they were added.
    pub fn all_targets(&self) -> Vec<&str> {
        let mut entries: Vec<_> = self.target_to_positions.iter().collect();
        entries.sort_unstable_by_key(|(_, entry)| entry.seq);
        entries.into_iter().map(|(name, _)| &**name).collect()
    }

    pub fn replicas(&self) -> u32 {
        self.replicas
    }

    pub fn target_count(&self) -> usize {
        self.target_to_positions.len()
    }

    /// Number of occupied positions on the ring.
    pub fn position_count(&self) -> usize {
        self.position_to_target.len()
    }

    pub fn contains_target(&self, target: &str) -> bool {
        self.target_to_positions.contains_key(target)
    }

    pub fn weight_of(&self, target: &str) -> Option<f64> {
        self.target_to_positions
            .get(target)
            .map(|entry| entry.weight)
    }

    /// Positions `target` was placed at, in replica order. Includes any it
    /// has since lost to a colliding registration.
    pub fn positions_of(&self, target: &str) -> Option<&[u32]> {
        self.target_to_positions
            .get(target)
            .map(|entry| entry.positions.as_slice())
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    fn invalidate(&mut self) {
        self.sorted_positions = OnceLock::new();
    }

    /// Occupied positions in ascending order, re-sorted only if a mutation
    /// happened since the last call.
    fn sorted_positions(&self) -> &[u32] {
        self.sorted_positions.get_or_init(|| {
            let mut positions: Vec<u32> = self.position_to_target.keys().copied().collect();
            positions.sort_unstable();
            trace!(positions = positions.len(), "rebuilt sorted positions");
            positions
        })
    }
}

impl<H> fmt::Debug for HashRing<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRing")
            .field("replicas", &self.replicas)
            .field("targets", &self.target_to_positions.len())
            .field("positions", &self.position_to_target.len())
            .field("sorted", &self.sorted_positions.get().is_some())
            .finish()
    }
}
