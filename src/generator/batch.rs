//! Batch generation of distinct keys.
//!
//! Keys are collected into a `HashSet` so duplicates collapse, and
//! generation continues until the set holds the requested count. Before any
//! drawing starts, the request is checked against the size of the key space
//! so an impossible request fails instead of looping forever.

use std::collections::HashSet;
use std::path::Path;

use rand::{CryptoRng, RngCore};
use thiserror::Error;

use super::{GenerateError, KeyFormat, KeyGenerator};
use crate::alphabet::{Alphabet, AlphabetError};
use crate::output::{self, OutputError};

/// Errors from a full batch run (resolve, generate, write).
#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Statistics for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Distinct keys produced.
    pub keys: usize,
    /// Total keys drawn, including discarded duplicates.
    pub draws: usize,
    /// Draws discarded because the key was already in the set.
    pub collisions: usize,
    /// Number of distinct keys the format allows (saturating).
    pub key_space: u128,
}

/// Number of distinct keys of `format` over an alphabet of `alphabet_len`.
///
/// Saturates at `u128::MAX`, which callers treat as unbounded.
pub fn key_space_size(alphabet_len: usize, format: KeyFormat) -> u128 {
    if alphabet_len <= 1 {
        return alphabet_len as u128;
    }
    let Ok(exponent) = u32::try_from(format.random_chars()) else {
        return u128::MAX;
    };
    (alphabet_len as u128)
        .checked_pow(exponent)
        .unwrap_or(u128::MAX)
}

/// Draw keys until `count` distinct ones have been collected.
///
/// Fails without drawing anything when fewer than `count` distinct keys
/// exist.
pub fn generate_unique_keys<R: RngCore + CryptoRng>(
    generator: &mut KeyGenerator<R>,
    count: usize,
) -> Result<(HashSet<String>, BatchReport), GenerateError> {
    let key_space = key_space_size(generator.alphabet().len(), generator.format());
    if key_space < count as u128 {
        return Err(GenerateError::KeySpaceTooSmall {
            requested: count,
            available: key_space,
        });
    }
    if (count as u128).saturating_mul(2) > key_space {
        tracing::warn!(
            count,
            key_space,
            "requested count is more than half the key space; expect many collisions"
        );
    }

    let mut keys = HashSet::new();
    keys.try_reserve(count)
        .map_err(|_| GenerateError::TooManyKeys { requested: count })?;
    let mut draws = 0usize;
    let mut collisions = 0usize;

    // One initial pass of `count` draws, then top up until no duplicates remain.
    while draws < count || keys.len() < count {
        draws += 1;
        if !keys.insert(generator.generate()) {
            collisions += 1;
            tracing::trace!(collisions, "discarded duplicate key");
        }
    }

    let report = BatchReport {
        keys: keys.len(),
        draws,
        collisions,
        key_space,
    };
    tracing::debug!(?report, "batch complete");
    Ok((keys, report))
}

/// Parameters for one generate-and-write run, as given by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub blocks: usize,
    pub chars: usize,
    pub alphabet_len: usize,
    pub count: usize,
}

impl BatchRequest {
    /// Validate the request, generate the keys, and write them to `path`.
    pub fn run(&self, path: &Path) -> Result<BatchReport, BatchError> {
        let alphabet = Alphabet::with_length(self.alphabet_len)?;
        let format = KeyFormat::new(self.blocks, self.chars)?;
        tracing::debug!(
            blocks = self.blocks,
            chars = self.chars,
            alphabet = %alphabet,
            count = self.count,
            "generating keys"
        );

        let mut generator = KeyGenerator::from_os_rng(format, alphabet);
        let (keys, report) = generate_unique_keys(&mut generator, self.count)?;
        output::write_keys_to_file(path, &keys)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(blocks: usize, chars: usize, len: usize) -> KeyGenerator<StdRng> {
        KeyGenerator::new(
            KeyFormat::new(blocks, chars).unwrap(),
            Alphabet::with_length(len).unwrap(),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn key_space_small_values() {
        let format = KeyFormat::new(1, 1).unwrap();
        assert_eq!(key_space_size(2, format), 2);
        assert_eq!(key_space_size(1, format), 1);

        let format = KeyFormat::new(2, 3).unwrap();
        assert_eq!(key_space_size(3, format), 729);
    }

    #[test]
    fn key_space_default_format() {
        let format = KeyFormat::default();
        assert_eq!(key_space_size(32, format), 1u128 << 75);
    }

    #[test]
    fn key_space_saturates() {
        let format = KeyFormat::new(10, 10).unwrap();
        assert_eq!(key_space_size(56, format), u128::MAX);

        let long = KeyFormat::new(1, 4000).unwrap();
        assert_eq!(key_space_size(2, long), u128::MAX);
    }

    #[test]
    fn one_char_alphabet_has_single_key() {
        let format = KeyFormat::new(10, 100).unwrap();
        assert_eq!(key_space_size(1, format), 1);
    }

    #[test]
    fn produces_requested_distinct_count() {
        let mut generator = generator(3, 5, 32);
        let (keys, report) = generate_unique_keys(&mut generator, 500).unwrap();
        assert_eq!(keys.len(), 500);
        assert_eq!(report.keys, 500);
        assert_eq!(report.draws, report.keys + report.collisions);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut generator = generator(3, 5, 32);
        let (keys, report) = generate_unique_keys(&mut generator, 0).unwrap();
        assert!(keys.is_empty());
        assert_eq!(report.draws, 0);
    }

    #[test]
    fn exhausts_a_tiny_key_space() {
        let mut generator = generator(1, 1, 2);
        let (keys, report) = generate_unique_keys(&mut generator, 2).unwrap();
        let expected: HashSet<String> = ["2".to_string(), "3".to_string()].into();
        assert_eq!(keys, expected);
        assert_eq!(report.key_space, 2);
    }

    #[test]
    fn full_space_of_two_by_two() {
        // 3^4 = 81 keys, request all of them.
        let mut generator = generator(2, 2, 3);
        let (keys, report) = generate_unique_keys(&mut generator, 81).unwrap();
        assert_eq!(keys.len(), 81);
        assert!(report.collisions > 0);
    }

    #[test]
    fn rejects_count_beyond_key_space() {
        let mut generator = generator(1, 1, 2);
        let err = generate_unique_keys(&mut generator, 3).unwrap_err();
        assert_eq!(
            err,
            GenerateError::KeySpaceTooSmall {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn run_rejects_long_alphabet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.txt");
        let request = BatchRequest {
            blocks: 3,
            chars: 5,
            alphabet_len: 57,
            count: 10,
        };
        let err = request.run(&path).unwrap_err();
        assert!(matches!(err, BatchError::Alphabet(AlphabetError::TooLong { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn run_rejects_zero_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.txt");
        let request = BatchRequest {
            blocks: 0,
            chars: 5,
            alphabet_len: 32,
            count: 10,
        };
        let err = request.run(&path).unwrap_err();
        assert!(matches!(err, BatchError::Generate(GenerateError::ZeroBlocks)));
    }

    #[test]
    fn unallocatable_count_is_an_error() {
        let mut generator = generator(3, 5, 32);
        let err = generate_unique_keys(&mut generator, usize::MAX).unwrap_err();
        assert_eq!(err, GenerateError::TooManyKeys { requested: usize::MAX });
    }

    #[test]
    fn run_rejects_huge_count_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.txt");
        let request = BatchRequest {
            blocks: 3,
            chars: 5,
            alphabet_len: 32,
            count: usize::MAX,
        };
        let err = request.run(&path).unwrap_err();
        assert!(matches!(err, BatchError::Generate(GenerateError::TooManyKeys { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn run_rejects_overflowing_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.txt");
        let request = BatchRequest {
            blocks: 1 << 33,
            chars: 1 << 33,
            alphabet_len: 32,
            count: 1,
        };
        let err = request.run(&path).unwrap_err();
        assert!(matches!(err, BatchError::Generate(GenerateError::FormatTooLarge { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.txt");
        let request = BatchRequest {
            blocks: 2,
            chars: 4,
            alphabet_len: 56,
            count: 25,
        };
        let report = request.run(&path).unwrap();
        assert_eq!(report.keys, 25);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 25);
        assert!(content.ends_with('\n'));
    }
}
