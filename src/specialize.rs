use core::any::TypeId;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;

use alloc::string::String;
use alloc::vec::Vec;

#[inline]
fn is<Generic, Expected>() -> bool
where
    Generic: ?Sized,
    Expected: ?Sized + 'static,
{
    typeid::of::<Generic>() == TypeId::of::<Expected>()
}

/// A [BuildHasher] that can also hash a complete byte string in a single call.
pub(crate) trait OneShot: BuildHasher {
    fn hash_bytes(&self, data: &[u8]) -> u64;
}

/// Captures the bytes of a byte-string [Hash] impl and hashes them in one shot.
///
/// The `Hash` impls of `str`, `[u8]` and friends make exactly one call to `write` with the
/// content. Around it they emit a length prefix (`write_usize`) or a terminator (`write_u8`),
/// both of which are dropped here.
struct BytesHasher<'a, S> {
    state: &'a S,
    hash: u64,
}

impl<S: OneShot> Hasher for BytesHasher<'_, S> {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.hash = self.state.hash_bytes(bytes);
    }

    #[inline]
    fn write_u8(&mut self, _i: u8) {}

    #[inline]
    fn write_usize(&mut self, _i: usize) {}

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}

/// Provides a way to get an optimized hash for a given data type.
/// Rather than buffering every value through a generic [Hasher], byte strings are handed straight
/// to the one-shot hash function.
pub(crate) trait CallHasher {
    fn get_hash<S: OneShot>(value: &Self, state: &S) -> u64;
}

impl<T> CallHasher for T
where
    T: Hash + ?Sized,
{
    #[inline]
    fn get_hash<S: OneShot>(value: &Self, state: &S) -> u64 {
        if is::<T, str>()
            || is::<T, &str>()
            || is::<T, String>()
            || is::<T, &String>()
            || is::<T, [u8]>()
            || is::<T, &[u8]>()
            || is::<T, Vec<u8>>()
            || is::<T, &Vec<u8>>()
        {
            let mut hasher = BytesHasher { state, hash: state.hash_bytes(&[]) };
            value.hash(&mut hasher);
            hasher.finish()
        } else {
            let mut hasher = state.build_hasher();
            value.hash(&mut hasher);
            hasher.finish()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::*;
    use alloc::string::ToString;

    #[test]
    pub fn test_specialized_invoked() {
        let state = FarmState::with_seeds(1, 2);
        let shortened = str::get_hash("abc", &state);
        assert_eq!(shortened, hash64_with_seeds(b"abc", 1, 2));
        let mut hasher = state.build_hasher();
        "abc".hash(&mut hasher);
        assert_ne!(hasher.finish(), shortened);
    }

    #[test]
    pub fn test_generic_types_use_hasher() {
        let state = FarmState::with_seeds(1, 2);
        let mut hasher = state.build_hasher();
        0_u64.hash(&mut hasher);
        assert_eq!(hasher.finish(), u64::get_hash(&0_u64, &state));
        assert_eq!(hash64_with_seeds(&[0u8; 8], 1, 2), u64::get_hash(&0_u64, &state));

        let mut hasher = state.build_hasher();
        7_u32.hash(&mut hasher);
        assert_eq!(hasher.finish(), u32::get_hash(&7_u32, &state));
        assert_eq!(hash64_with_seeds(&[7, 0, 0, 0], 1, 2), u32::get_hash(&7_u32, &state));
    }

    #[test]
    pub fn test_hashed_type_is_the_classified_type() {
        let state = FarmState::with_seeds(1, 2);
        let pair = (1_u64, 2_u64);
        let mut hasher = state.build_hasher();
        pair.hash(&mut hasher);
        assert_eq!(<(u64, u64)>::get_hash(&pair, &state), hasher.finish());
        assert_ne!(<(u64, u64)>::get_hash(&pair, &state), hash64_with_seeds(b"", 1, 2));
        assert_eq!(state.hash_one(pair), hasher.finish());
    }

    #[test]
    pub fn test_ref_independent() {
        let state = FarmState::with_seeds(1, 2);
        let expected = hash64_with_seeds(b"test", 1, 2);
        assert_eq!(str::get_hash("test", &state), expected);
        assert_eq!(<&str>::get_hash(&"test", &state), expected);
        assert_eq!(String::get_hash(&"test".to_string(), &state), expected);
        assert_eq!(<[u8]>::get_hash("test".as_bytes(), &state), expected);
        assert_eq!(<&[u8]>::get_hash(&"test".as_bytes(), &state), expected);
        assert_eq!(Vec::<u8>::get_hash(&b"test".to_vec(), &state), expected);

        let state = MurmurState::with_seed(7);
        assert_eq!(str::get_hash("abc", &state), 0xcc82712c1f7f6fa5);
        assert_eq!(<[u8]>::get_hash(b"abc", &state), 0xcc82712c1f7f6fa5);
    }

    #[test]
    pub fn test_empty_strings() {
        let state = FarmState::with_seeds(1, 2);
        assert_eq!(str::get_hash("", &state), hash64_with_seeds(b"", 1, 2));
        assert_eq!(<[u8]>::get_hash(b"", &state), hash64_with_seeds(b"", 1, 2));
    }
}
