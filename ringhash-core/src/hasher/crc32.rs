use super::HashStrategy;

/// CRC32 (IEEE) checksum of the input. The default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32Hasher;

impl HashStrategy for Crc32Hasher {
    #[inline]
    fn hash(&self, input: &[u8]) -> u32 {
        crc32fast::hash(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ieee_check_value() {
        assert_eq!(Crc32Hasher.hash(b"123456789"), 0xCBF4_3926);
        assert_eq!(Crc32Hasher.hash(b""), 0);
    }
}
