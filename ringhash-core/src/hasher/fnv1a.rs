use super::HashStrategy;

const OFFSET_BASIS: u32 = 0x811c_9dc5;
const PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1aHasher;

impl HashStrategy for Fnv1aHasher {
    #[inline]
    fn hash(&self, input: &[u8]) -> u32 {
        let mut hash = OFFSET_BASIS;
        for &byte in input {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(PRIME);
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_vectors() {
        assert_eq!(Fnv1aHasher.hash(b""), 0x811c_9dc5);
        assert_eq!(Fnv1aHasher.hash(b"a"), 0xe40c_292c);
        assert_eq!(Fnv1aHasher.hash(b"foobar"), 0xbf9c_f968);
    }
}
