use super::HashStrategy;

/// MD5 digest truncated to its first four bytes, read big-endian.
///
/// That is the value of the first eight hex digits of the digest, so
/// positions line up with rings that hash via `substr(md5(x), 0, 8)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl HashStrategy for Md5Hasher {
    #[inline]
    fn hash(&self, input: &[u8]) -> u32 {
        let digest = md5::compute(input);
        u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }
}
