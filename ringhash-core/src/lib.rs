//! Consistent hashing over a weighted, changing set of named targets.
//!
//! Targets are spread over a `u32` ring through a pluggable [`HashStrategy`];
//! resources map to the first targets met walking clockwise from their own
//! hash. Adding or removing one target out of N remaps roughly 1/N of
//! resources.

mod errors;
pub mod hasher;
mod ring;

pub use errors::RingError;
pub use hasher::{
    BoxedHasher, Crc32Hasher, Fnv1aHasher, HashAlgorithm, HashStrategy, Md5Hasher, Murmur3Hasher,
    Xxh32Hasher,
};
pub use ring::{DEFAULT_REPLICAS, HashRing, bisect_left};
