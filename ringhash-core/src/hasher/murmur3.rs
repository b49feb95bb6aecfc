use super::HashStrategy;

/// MurmurHash3, x86 32-bit variant, seed 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur3Hasher;

impl HashStrategy for Murmur3Hasher {
    #[inline]
    fn hash(&self, input: &[u8]) -> u32 {
        mur3::murmurhash3_x86_32(&mut &input[..], 0)
    }
}
