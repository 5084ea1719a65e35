//! MurmurHash64A, the 64-bit MurmurHash2 variant for 64-bit platforms.

use crate::convert::ReadFromSlice;

const M: u64 = 0xc6a4_a793_5bd1_e995;
const R: u32 = 47;

/// Hashes `data` with MurmurHash64A.
///
/// The body is read as little-endian words, so unlike the reference C code the result does not
/// depend on the host's byte order.
///
/// ```
/// assert_eq!(hash64::murmur64a(b"", 0), 0);
/// assert_eq!(hash64::murmur64a(b"Retezeckzahashovani", 0), 3129611591639464408);
/// ```
pub fn murmur64a(data: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ (data.len() as u64).wrapping_mul(M);

    let mut blocks = data.chunks_exact(8);
    for block in &mut blocks {
        let mut k = block.fetch64(0);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);
        h ^= k;
        h = h.wrapping_mul(M);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        for (i, byte) in tail.iter().enumerate() {
            h ^= (*byte as u64) << (8 * i);
        }
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;
    h
}
