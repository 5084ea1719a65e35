use crate::error::{Error, Result};
use crate::{farmhash, murmur};
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

/// Selects one of the hash functions provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// FarmHash `Hash64`, see [crate::hash64].
    #[default]
    Farm,
    /// FarmHash `Fingerprint64`, see [crate::fingerprint64]. Takes no seed.
    Fingerprint,
    /// MurmurHash64A, see [crate::murmur64a]. Unseeded means a seed of zero.
    Murmur,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Farm, Algorithm::Fingerprint, Algorithm::Murmur];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Farm => "farm",
            Algorithm::Fingerprint => "fingerprint",
            Algorithm::Murmur => "murmur",
        }
    }

    pub fn supports_seed(&self) -> bool {
        !matches!(self, Algorithm::Fingerprint)
    }

    /// Hashes `data`, optionally folding in `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use hash64::Algorithm;
    ///
    /// let hash = Algorithm::Farm.hash(b"Retezeckzahashovani", None).unwrap();
    /// assert_eq!(hash, 17735793547992799661);
    /// assert!(Algorithm::Fingerprint.hash(b"abc", Some(1)).is_err());
    /// ```
    pub fn hash(&self, data: &[u8], seed: Option<u64>) -> Result<u64> {
        match (self, seed) {
            (Algorithm::Farm, None) => Ok(farmhash::hash64(data)),
            (Algorithm::Farm, Some(seed)) => Ok(farmhash::hash64_with_seed(data, seed)),
            (Algorithm::Fingerprint, None) => Ok(farmhash::fingerprint64(data)),
            (Algorithm::Fingerprint, Some(_)) => Err(Error::SeedNotSupported(*self)),
            (Algorithm::Murmur, seed) => Ok(murmur::murmur64a(data, seed.unwrap_or(0))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("farm") || trimmed.eq_ignore_ascii_case("farmhash") {
            Ok(Algorithm::Farm)
        } else if trimmed.eq_ignore_ascii_case("fingerprint") || trimmed.eq_ignore_ascii_case("fingerprint64") {
            Ok(Algorithm::Fingerprint)
        } else if trimmed.eq_ignore_ascii_case("murmur") || trimmed.eq_ignore_ascii_case("murmur64a") {
            Ok(Algorithm::Murmur)
        } else {
            Err(Error::UnknownAlgorithm(name.to_string()))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &[u8] = b"Retezeckzahashovani";

    #[test]
    fn test_default_is_farm() {
        assert_eq!(Algorithm::default(), Algorithm::Farm);
        assert_eq!(Algorithm::default().hash(SAMPLE, None).unwrap(), 17735793547992799661);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("farm".parse::<Algorithm>().unwrap(), Algorithm::Farm);
        assert_eq!("FarmHash".parse::<Algorithm>().unwrap(), Algorithm::Farm);
        assert_eq!("fingerprint64".parse::<Algorithm>().unwrap(), Algorithm::Fingerprint);
        assert_eq!(" MURMUR ".parse::<Algorithm>().unwrap(), Algorithm::Murmur);
        assert_eq!("murmur64a".parse::<Algorithm>().unwrap(), Algorithm::Murmur);
        match "sip".parse::<Algorithm>() {
            Err(Error::UnknownAlgorithm(name)) => assert_eq!(name, "sip"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), *algorithm);
        }
    }

    #[test]
    fn test_hash_dispatch() {
        assert_eq!(Algorithm::Farm.hash(SAMPLE, Some(1234)).unwrap(), 9153656099632311435);
        assert_eq!(Algorithm::Fingerprint.hash(SAMPLE, None).unwrap(), 17735793547992799661);
        assert_eq!(Algorithm::Murmur.hash(SAMPLE, None).unwrap(), 3129611591639464408);
        assert_eq!(
            Algorithm::Murmur.hash(SAMPLE, Some(0)).unwrap(),
            Algorithm::Murmur.hash(SAMPLE, None).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_rejects_seed() {
        assert!(!Algorithm::Fingerprint.supports_seed());
        match Algorithm::Fingerprint.hash(SAMPLE, Some(7)) {
            Err(Error::SeedNotSupported(Algorithm::Fingerprint)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Algorithm::Murmur).unwrap(), "\"murmur\"");
        let parsed: Algorithm = serde_json::from_str("\"fingerprint\"").unwrap();
        assert_eq!(parsed, Algorithm::Fingerprint);
    }
}
