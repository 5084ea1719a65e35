//! # hash64
//!
//! Portable 64-bit string hashes: FarmHash (`Hash64`, `Fingerprint64` and the seeded variants) and
//! MurmurHash64A.
//!
//! All functions read their input as little-endian words, so a byte string hashes to the same
//! value on every platform. None of them are cryptographic, and FarmHash without seeds is not
//! DOS resistant.
//!
//! ```
//! use hash64::{hash64, murmur64a};
//!
//! assert_eq!(hash64(b"Retezeckzahashovani"), 17735793547992799661);
//! assert_eq!(murmur64a(b"Retezeckzahashovani", 0), 3129611591639464408);
//! ```
//!
//! # Use in collections
//!
//! [FarmState] and [MurmurState] implement [BuildHasher](core::hash::BuildHasher) and pick fresh
//! seeds per instance, in the same way std's `RandomState` does:
//!
//! ```
//! use hash64::FarmHashMap;
//!
//! let mut map: FarmHashMap<&str, i32> = FarmHashMap::default();
//! map.insert("answer", 42);
//! assert_eq!(map.get("answer"), Some(&42));
//! ```
//!
//! For reproducible hashing across runs use [FarmState::with_seeds] or
//! `BuildHasherDefault<FarmHasher>`.
//!
//! # Feature Flags
//!
//! * `std` - enables the `FarmHashMap` / `FarmHashSet` aliases and the I/O error variants.
//! * `runtime-rng` - seeds new states from the operating system via `getrandom`.
//! * `compile-time-rng` - bakes a random seed into the binary with `const-random`.
//! * `serde` - (de)serializes [Algorithm] by name.
//! * `cli` - builds the `hash64` command line tool.
#![deny(clippy::correctness, clippy::complexity, clippy::perf)]
#![allow(clippy::pedantic, clippy::cast_lossless, clippy::unreadable_literal)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod algorithm;
mod convert;
mod error;
mod farmhash;
mod hasher;
mod murmur;
mod random_state;
mod specialize;


#[cfg(feature = "cli")]
pub mod cli;

pub use crate::algorithm::Algorithm;
pub use crate::error::{Error, Result};
pub use crate::farmhash::{fingerprint64, hash64, hash64_with_seed, hash64_with_seeds};
pub use crate::hasher::{FarmHasher, MurmurHasher};
pub use crate::murmur::murmur64a;
pub use crate::random_state::{FarmState, MurmurState};

/// Builds unseeded [FarmHasher]s, so maps hash exactly with [hash64].
pub type FarmBuildHasher = core::hash::BuildHasherDefault<FarmHasher>;

/// A [`HashMap`](std::collections::HashMap) using [FarmState] to hash the items.
#[cfg(feature = "std")]
pub type FarmHashMap<K, V> = std::collections::HashMap<K, V, FarmState>;

/// A [`HashSet`](std::collections::HashSet) using [FarmState] to hash the items.
#[cfg(feature = "std")]
pub type FarmHashSet<T> = std::collections::HashSet<T, FarmState>;
