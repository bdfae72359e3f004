//! Single-key generation.
//!
//! A key is `blocks` groups of `chars` characters joined by hyphens, each
//! character drawn independently and uniformly from an [`Alphabet`]. The
//! random source must be a CSPRNG: [`KeyGenerator`] only accepts RNGs that
//! implement [`CryptoRng`].

pub mod batch;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use thiserror::Error;

use crate::alphabet::Alphabet;
use crate::constants::{BLOCK_SEPARATOR, DEFAULT_BLOCKS, DEFAULT_CHARS, MAX_KEY_LEN};

pub use batch::{BatchError, BatchReport, BatchRequest, generate_unique_keys, key_space_size};

/// Errors for key shapes that cannot be generated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("number of blocks must be at least 1")]
    ZeroBlocks,

    #[error("characters per block must be at least 1")]
    ZeroChars,

    #[error("key format {blocks}x{chars} is too long (max {max} characters per key)")]
    FormatTooLarge {
        blocks: usize,
        chars: usize,
        max: usize,
    },

    #[error("cannot generate {requested} unique keys: only {available} distinct keys exist for this format")]
    KeySpaceTooSmall { requested: usize, available: u128 },

    #[error("cannot hold {requested} keys in memory")]
    TooManyKeys { requested: usize },
}

/// Shape of a key: number of blocks and characters per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFormat {
    blocks: usize,
    chars: usize,
}

impl KeyFormat {
    /// Build a format, rejecting empty blocks, empty keys, and keys longer
    /// than [`MAX_KEY_LEN`].
    pub fn new(blocks: usize, chars: usize) -> Result<Self, GenerateError> {
        if blocks == 0 {
            return Err(GenerateError::ZeroBlocks);
        }
        if chars == 0 {
            return Err(GenerateError::ZeroChars);
        }
        let key_len = blocks
            .checked_mul(chars)
            .and_then(|random| random.checked_add(blocks - 1));
        match key_len {
            Some(len) if len <= MAX_KEY_LEN => Ok(Self { blocks, chars }),
            _ => Err(GenerateError::FormatTooLarge {
                blocks,
                chars,
                max: MAX_KEY_LEN,
            }),
        }
    }

    pub fn blocks(&self) -> usize {
        self.blocks
    }

    pub fn chars(&self) -> usize {
        self.chars
    }

    /// Number of random characters in one key.
    pub fn random_chars(&self) -> usize {
        self.blocks * self.chars
    }

    /// Full key length including separators.
    pub fn key_len(&self) -> usize {
        self.random_chars() + self.blocks - 1
    }
}

impl Default for KeyFormat {
    fn default() -> Self {
        Self {
            blocks: DEFAULT_BLOCKS,
            chars: DEFAULT_CHARS,
        }
    }
}

/// Generates keys of a fixed format from a cryptographically secure RNG.
pub struct KeyGenerator<R> {
    format: KeyFormat,
    alphabet: Alphabet,
    rng: R,
}

impl KeyGenerator<OsRng> {
    /// Generator backed by the operating system's CSPRNG.
    pub fn from_os_rng(format: KeyFormat, alphabet: Alphabet) -> Self {
        Self::new(format, alphabet, OsRng)
    }
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    pub fn new(format: KeyFormat, alphabet: Alphabet, rng: R) -> Self {
        Self {
            format,
            alphabet,
            rng,
        }
    }

    pub fn format(&self) -> KeyFormat {
        self.format
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Produce one key.
    pub fn generate(&mut self) -> String {
        let mut key = String::with_capacity(self.format.key_len());
        for block in 0..self.format.blocks {
            if block > 0 {
                key.push(BLOCK_SEPARATOR);
            }
            for _ in 0..self.format.chars {
                key.push(self.draw());
            }
        }
        key
    }

    /// One uniform draw from the alphabet.
    fn draw(&mut self) -> char {
        let index = self.rng.gen_range(0..self.alphabet.len());
        // gen_range stays below len, and an alphabet is never empty.
        self.alphabet.char_at(index).unwrap_or_default()
    }
}

/// Generate a single key using the OS random source.
pub fn generate_key(format: KeyFormat, alphabet: Alphabet) -> String {
    KeyGenerator::from_os_rng(format, alphabet).generate()
}

/// Check that `key` has the shape `format` describes over `alphabet`.
///
/// This is a structural check only; it says nothing about whether a key was
/// ever issued.
pub fn is_well_formed(key: &str, format: KeyFormat, alphabet: Alphabet) -> bool {
    let blocks: Vec<&str> = key.split(BLOCK_SEPARATOR).collect();
    blocks.len() == format.blocks
        && blocks.iter().all(|block| {
            block.len() == format.chars && block.chars().all(|c| alphabet.contains(c))
        })
}
