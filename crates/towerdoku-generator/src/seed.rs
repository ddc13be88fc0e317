//! Reproducible generation seeds.

use std::{
    fmt,
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed from which every random decision of a generation run is
/// derived.
///
/// Each generation stage (path carving, solution seeding, reveal
/// shuffling, retry attempts) draws from its own RNG stream, derived by
/// hashing the seed together with a stage label. Re-running generation
/// with the same seed therefore reproduces the same board exactly.
///
/// Seeds render as 64 lowercase hex characters and parse back from the
/// same form:
///
/// ```
/// use towerdoku_generator::BoardSeed;
///
/// let seed = BoardSeed::from_bytes([0xab; 32]);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<BoardSeed>(), Ok(seed));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a fresh seed from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0_u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the RNG stream for a named generation stage.
    #[must_use]
    pub(crate) fn stage_rng(&self, stage: &str) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(stage.as_bytes());
        let digest = hasher.finalize();
        let mut stream_seed = [0_u8; 32];
        stream_seed.copy_from_slice(&digest);
        Pcg64::from_seed(stream_seed)
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardSeed({self})")
    }
}

impl FromStr for BoardSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::BadLength { len });
        }
        let mut bytes = [0_u8; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let hi = hex_value(chars.next().expect("length checked above"))?;
            let lo = hex_value(chars.next().expect("length checked above"))?;
            *byte = hi << 4 | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(character: char) -> Result<u8, ParseSeedError> {
    character
        .to_digit(16)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or(ParseSeedError::BadCharacter { character })
}

/// Error returned when parsing a [`BoardSeed`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    BadLength {
        /// Observed character count.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("invalid seed character {character:?}")]
    BadCharacter {
        /// The offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = BoardSeed::from_bytes(std::array::from_fn(|i| {
            u8::try_from(i).expect("index fits in u8")
        }));
        let text = seed.to_string();
        assert_eq!(text.parse::<BoardSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<BoardSeed>(),
            Err(ParseSeedError::BadLength { len: 3 })
        );
        let bad = format!("g{}", "0".repeat(63));
        assert_eq!(
            bad.parse::<BoardSeed>(),
            Err(ParseSeedError::BadCharacter { character: 'g' })
        );
    }

    #[test]
    fn test_stage_streams_are_deterministic_and_distinct() {
        let seed = BoardSeed::from_bytes([7; 32]);

        let a: u64 = seed.stage_rng("path").random();
        let b: u64 = seed.stage_rng("path").random();
        assert_eq!(a, b);

        let c: u64 = seed.stage_rng("solution").random();
        assert_ne!(a, c);
    }

    #[test]
    fn test_entropy_seeds_differ() {
        assert_ne!(BoardSeed::from_entropy(), BoardSeed::from_entropy());
    }
}
