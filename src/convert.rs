/// Little-endian word loads at arbitrary byte offsets.
///
/// All of the hash functions in this crate read their input as little-endian words regardless of
/// the host, so a given byte string hashes to the same value on every platform.
pub(crate) trait ReadFromSlice {
    fn fetch32(&self, offset: usize) -> u32;
    fn fetch64(&self, offset: usize) -> u64;
    fn read_last_u64(&self) -> u64;
}

impl ReadFromSlice for [u8] {
    #[inline(always)]
    fn fetch32(&self, offset: usize) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self[offset..offset + 4]);
        u32::from_le_bytes(word)
    }

    #[inline(always)]
    fn fetch64(&self, offset: usize) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self[offset..offset + 8]);
        u64::from_le_bytes(word)
    }

    #[inline(always)]
    fn read_last_u64(&self) -> u64 {
        self.fetch64(self.len() - 8)
    }
}
