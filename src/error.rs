use crate::algorithm::Algorithm;
use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown hash algorithm `{0}` (expected farm, fingerprint or murmur)")]
    UnknownAlgorithm(String),

    #[error("invalid seed `{0}`: expected a decimal or 0x-prefixed hexadecimal u64")]
    InvalidSeed(String),

    #[error("{0} does not take a seed")]
    SeedNotSupported(Algorithm),

    #[cfg(feature = "std")]
    #[error("failed to read {}", path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
