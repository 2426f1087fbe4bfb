//! Reproducible shuffle seeds.

use std::{fmt, str::FromStr};

use rand::Rng as _;

/// A 32-byte seed for reproducible shuffles.
///
/// The seed feeds the shuffler's deterministic random number generator directly, so
/// the same seed always produces the same shuffled board for a given size and step
/// budget. Seeds display as, and parse from, 64 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use fifteen_shuffle::ShuffleSeed;
///
/// let seed: ShuffleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///         .parse()
///         .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed([u8; Self::LEN]);

impl ShuffleSeed {
    /// Seed length in bytes.
    pub const LEN: usize = 32;

    /// Generates a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; Self::LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl fmt::Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShuffleSeed({self})")
    }
}

/// Errors from parsing a [`ShuffleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 hex characters.
    #[display("seed must be {expected} hex characters, got {len}")]
    InvalidLength {
        /// Expected character count.
        expected: usize,
        /// Actual character count.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("seed contains a non-hex character at offset {offset}")]
    InvalidHexDigit {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expected = Self::LEN * 2;
        if s.len() != expected {
            return Err(ParseSeedError::InvalidLength {
                expected,
                len: s.len(),
            });
        }
        let mut bytes = [0; Self::LEN];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_value(chunk[0]).ok_or(ParseSeedError::InvalidHexDigit { offset: 2 * i })?;
            let lo = hex_value(chunk[1])
                .ok_or(ParseSeedError::InvalidHexDigit { offset: 2 * i + 1 })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED_HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: ShuffleSeed = SEED_HEX.parse().unwrap();
        assert_eq!(seed.to_string(), SEED_HEX);
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let upper: ShuffleSeed = SEED_HEX.to_uppercase().parse().unwrap();
        let lower: ShuffleSeed = SEED_HEX.parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            "abcd".parse::<ShuffleSeed>(),
            Err(ParseSeedError::InvalidLength {
                expected: 64,
                len: 4
            })
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let mut input = SEED_HEX.to_owned();
        input.replace_range(10..11, "g");
        assert_eq!(
            input.parse::<ShuffleSeed>(),
            Err(ParseSeedError::InvalidHexDigit { offset: 10 })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(ShuffleSeed::random(), ShuffleSeed::random());
    }
}
