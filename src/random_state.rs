use crate::specialize::{CallHasher, OneShot};
use crate::{farmhash, murmur, FarmHasher, MurmurHasher};
use core::hash::{BuildHasher, Hash};
use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(all(feature = "compile-time-rng", not(test)))]
use const_random::const_random;

///This constant come from Kunth's prng
pub(crate) const MULTIPLE: u64 = 6364136223846793005;
pub(crate) const INCREMENT: u64 = 1442695040888963407;

// Const random provides randomized starting key with no runtime cost.
#[cfg(all(feature = "compile-time-rng", not(test)))]
const INIT_SEED: u64 = const_random!(u64);

#[cfg(any(not(feature = "compile-time-rng"), test))]
const INIT_SEED: u64 = INCREMENT;

static COUNTER: AtomicUsize = AtomicUsize::new(INIT_SEED as usize);

#[inline(always)]
fn folded_multiply(s: u64, by: u64) -> u64 {
    let result = (s as u128).wrapping_mul(by as u128);
    (result as u64).wrapping_add((result >> 64) as u64)
}

/// Seed material shared by every state created in this process.
#[cfg(feature = "runtime-rng")]
fn process_seeds() -> [u64; 2] {
    use alloc::boxed::Box;
    use once_cell::race::OnceBox;

    static SEEDS: OnceBox<[u64; 2]> = OnceBox::new();

    *SEEDS.get_or_init(|| {
        let mut bytes = [0u8; 16];
        let seeds = match getrandom::getrandom(&mut bytes) {
            Ok(()) => {
                let mut low = [0u8; 8];
                let mut high = [0u8; 8];
                low.copy_from_slice(&bytes[..8]);
                high.copy_from_slice(&bytes[8..]);
                [u64::from_le_bytes(low), u64::from_le_bytes(high)]
            }
            // No entropy source available; fall back to what the address space gives us.
            Err(_) => [INIT_SEED ^ (&COUNTER as *const _ as u64), INIT_SEED.rotate_left(32)],
        };
        Box::new(seeds)
    })
}

#[cfg(not(feature = "runtime-rng"))]
#[inline]
fn process_seeds() -> [u64; 2] {
    [INIT_SEED, INIT_SEED.rotate_left(32)]
}

/// Derives a new pair of keys. Every call returns different keys.
pub(crate) fn fresh_keys() -> (u64, u64) {
    let [s0, s1] = process_seeds();
    //Using a self pointer. When running with ASLR this is a random value.
    let previous = COUNTER.load(Ordering::Relaxed) as u64;
    let stack_mem_loc = &previous as *const _ as u64;
    //only one multiply is needed because memory locations are not under an attackers control.
    let current = previous
        .wrapping_add(stack_mem_loc)
        .wrapping_add(INCREMENT)
        .wrapping_mul(MULTIPLE)
        .rotate_right(31);
    COUNTER.store(current as usize, Ordering::Relaxed);
    scramble_keys(s0 ^ current, s1 ^ (&COUNTER as *const _ as u64))
}

#[inline]
pub(crate) fn scramble_keys(a: u64, b: u64) -> (u64, u64) {
    let ab = folded_multiply(INIT_SEED ^ a, MULTIPLE).wrapping_add(b);
    let ba = folded_multiply(INIT_SEED ^ b, MULTIPLE).wrapping_add(a);
    let combined = folded_multiply(a ^ b, MULTIPLE).wrapping_add(INIT_SEED);
    let rot1 = (combined & 63) as u32;
    let rot2 = (combined >> 58) as u32;
    (ab.rotate_left(rot2), ba.rotate_left(rot1))
}

/// Provides a [FarmHasher] factory. This is typically used (e.g. by [`HashMap`]) to create
/// [FarmHasher]s in order to hash the keys of the map.
///
/// Every hasher built from one `FarmState` uses the same pair of seeds, so they agree with each
/// other. Two states created with [FarmState::new] use different seeds.
///
/// [HashMap]: std::collections::HashMap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmState {
    pub(crate) k0: u64,
    pub(crate) k1: u64,
}

impl FarmState {
    /// Creates a state with fresh, unpredictable seeds.
    #[inline]
    pub fn new() -> FarmState {
        let (k0, k1) = fresh_keys();
        FarmState { k0, k1 }
    }

    /// Allows for explicitly setting the seeds to use.
    pub const fn with_seeds(k0: u64, k1: u64) -> FarmState {
        FarmState { k0, k1 }
    }

    pub fn seeds(&self) -> (u64, u64) {
        (self.k0, self.k1)
    }

    /// Calculates the hash of a single value.
    ///
    /// Byte strings (`str`, `String`, `[u8]`, `Vec<u8>` and references to them) are hashed in a
    /// single pass without a length prefix or terminator, so the result equals
    /// [crate::hash64_with_seeds] over the raw bytes. This is not the value a hasher built with
    /// [BuildHasher::build_hasher] would produce for the same string, as the standard [Hash] impl
    /// for `str` appends a `0xff` byte.
    ///
    /// # Example
    ///
    /// ```
    /// use hash64::FarmState;
    ///
    /// let state = FarmState::with_seeds(1, 2);
    /// assert_eq!(state.hash_one("abc"), hash64::hash64_with_seeds(b"abc", 1, 2));
    /// ```
    #[inline]
    pub fn hash_one<T: Hash>(&self, x: T) -> u64 {
        T::get_hash(&x, self)
    }
}

impl Default for FarmState {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for FarmState {
    type Hasher = FarmHasher;

    /// Constructs a new [FarmHasher] keyed with this state's seeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use hash64::FarmState;
    /// use std::hash::{Hasher, BuildHasher};
    ///
    /// let build_hasher = FarmState::new();
    /// let mut hasher_1 = build_hasher.build_hasher();
    /// let mut hasher_2 = build_hasher.build_hasher();
    ///
    /// hasher_1.write_u32(1234);
    /// hasher_2.write_u32(1234);
    ///
    /// assert_eq!(hasher_1.finish(), hasher_2.finish());
    ///
    /// let other_build_hasher = FarmState::new();
    /// let mut different_hasher = other_build_hasher.build_hasher();
    /// different_hasher.write_u32(1234);
    /// assert_ne!(different_hasher.finish(), hasher_1.finish());
    /// ```
    #[inline]
    fn build_hasher(&self) -> FarmHasher {
        FarmHasher::with_seeds(self.k0, self.k1)
    }
}

impl OneShot for FarmState {
    #[inline]
    fn hash_bytes(&self, data: &[u8]) -> u64 {
        farmhash::hash64_with_seeds(data, self.k0, self.k1)
    }
}

/// Provides a [MurmurHasher] factory. Same contract as [FarmState], with a single seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MurmurState {
    pub(crate) seed: u64,
}

impl MurmurState {
    #[inline]
    pub fn new() -> MurmurState {
        let (k0, k1) = fresh_keys();
        MurmurState { seed: k0 ^ k1.rotate_left(23) }
    }

    pub const fn with_seed(seed: u64) -> MurmurState {
        MurmurState { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Calculates the hash of a single value. See [FarmState::hash_one].
    #[inline]
    pub fn hash_one<T: Hash>(&self, x: T) -> u64 {
        T::get_hash(&x, self)
    }
}

impl Default for MurmurState {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for MurmurState {
    type Hasher = MurmurHasher;

    #[inline]
    fn build_hasher(&self) -> MurmurHasher {
        MurmurHasher::with_seed(self.seed)
    }
}

impl OneShot for MurmurState {
    #[inline]
    fn hash_bytes(&self, data: &[u8]) -> u64 {
        murmur::murmur64a(data, self.seed)
    }
}
