use crate::{farmhash, murmur};
use alloc::vec::Vec;
use core::hash::Hasher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Seeds {
    #[default]
    None,
    One(u64),
    Two(u64, u64),
}

/// A [Hasher] computing FarmHash over everything written to it.
///
/// FarmHash is not a streaming hash, so the written bytes are buffered and hashed in one go by
/// `finish()`. Integers are written as their little-endian bytes, which makes the output
/// independent of the platform.
///
/// A default `FarmHasher` computes [crate::hash64] over the concatenated input:
///
/// ```
/// use std::hash::Hasher;
/// use hash64::FarmHasher;
///
/// let mut hasher = FarmHasher::default();
/// hasher.write(b"Reteze");
/// hasher.write(b"ckzahashovani");
/// assert_eq!(hasher.finish(), hash64::hash64(b"Retezeckzahashovani"));
/// ```
///
/// [Clone] is also provided in case you wish to calculate hashes for two different items that
/// start with the same data.
#[derive(Debug, Clone, Default)]
pub struct FarmHasher {
    buffer: Vec<u8>,
    seeds: Seeds,
}

impl FarmHasher {
    /// Creates a hasher whose output is [crate::hash64_with_seed].
    #[inline]
    pub fn with_seed(seed: u64) -> FarmHasher {
        FarmHasher {
            buffer: Vec::new(),
            seeds: Seeds::One(seed),
        }
    }

    /// Creates a hasher whose output is [crate::hash64_with_seeds].
    #[inline]
    pub fn with_seeds(seed0: u64, seed1: u64) -> FarmHasher {
        FarmHasher {
            buffer: Vec::new(),
            seeds: Seeds::Two(seed0, seed1),
        }
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub(crate) fn hash_bytes(&self, data: &[u8]) -> u64 {
        match self.seeds {
            Seeds::None => farmhash::hash64(data),
            Seeds::One(seed) => farmhash::hash64_with_seed(data, seed),
            Seeds::Two(seed0, seed1) => farmhash::hash64_with_seeds(data, seed0, seed1),
        }
    }
}

/// A [Hasher] computing MurmurHash64A over everything written to it.
///
/// Buffers its input the same way [FarmHasher] does.
#[derive(Debug, Clone, Default)]
pub struct MurmurHasher {
    buffer: Vec<u8>,
    seed: u64,
}

impl MurmurHasher {
    #[inline]
    pub fn with_seed(seed: u64) -> MurmurHasher {
        MurmurHasher {
            buffer: Vec::new(),
            seed,
        }
    }
}

// Both hashers only differ in what `finish` does with the buffer.
macro_rules! buffered_writes {
    () => {
        #[inline]
        fn write(&mut self, bytes: &[u8]) {
            self.buffer.extend_from_slice(bytes);
        }

        #[inline]
        fn write_u8(&mut self, i: u8) {
            self.buffer.push(i);
        }

        #[inline]
        fn write_u16(&mut self, i: u16) {
            self.buffer.extend_from_slice(&i.to_le_bytes());
        }

        #[inline]
        fn write_u32(&mut self, i: u32) {
            self.buffer.extend_from_slice(&i.to_le_bytes());
        }

        #[inline]
        fn write_u64(&mut self, i: u64) {
            self.buffer.extend_from_slice(&i.to_le_bytes());
        }

        #[inline]
        fn write_u128(&mut self, i: u128) {
            self.buffer.extend_from_slice(&i.to_le_bytes());
        }

        #[inline]
        fn write_usize(&mut self, i: usize) {
            self.write_u64(i as u64);
        }
    };
}

impl Hasher for FarmHasher {
    buffered_writes!();

    #[inline]
    fn finish(&self) -> u64 {
        self.hash_bytes(&self.buffer)
    }
}

impl Hasher for MurmurHasher {
    buffered_writes!();

    #[inline]
    fn finish(&self) -> u64 {
        murmur::murmur64a(&self.buffer, self.seed)
    }
}
