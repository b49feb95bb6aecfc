use twox_hash::XxHash32;

use super::HashStrategy;

/// XXH32 with seed 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh32Hasher;

impl HashStrategy for Xxh32Hasher {
    #[inline]
    fn hash(&self, input: &[u8]) -> u32 {
        XxHash32::oneshot(0, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_vectors() {
        assert_eq!(Xxh32Hasher.hash(b""), 0x02cc_5d05);
    }
}
