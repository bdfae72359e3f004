//! Alphabet selection.
//!
//! An alphabet is a prefix of [`KEY_CHARSET`]; only its length is
//! configurable. Shorter alphabets drop the lowercase letters first, so the
//! common 32-character alphabet is digits and uppercase letters only.

use std::fmt;

use thiserror::Error;

use crate::constants::{DEFAULT_ALPHABET_LEN, KEY_CHARSET};

/// Errors when resolving an alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet length must be at least 1")]
    Empty,

    #[error("alphabet length {requested} is too large (max {max})")]
    TooLong { requested: usize, max: usize },
}

/// A resolved set of characters keys are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    chars: &'static [u8],
}

impl Alphabet {
    /// Largest supported alphabet length.
    pub const MAX_LEN: usize = KEY_CHARSET.len();

    /// Select the first `len` characters of the superset.
    pub fn with_length(len: usize) -> Result<Self, AlphabetError> {
        if len == 0 {
            return Err(AlphabetError::Empty);
        }
        if len > Self::MAX_LEN {
            return Err(AlphabetError::TooLong {
                requested: len,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self {
            chars: &KEY_CHARSET.as_bytes()[..len],
        })
    }

    /// Number of characters in the alphabet (never zero).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; an empty alphabet cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, or `None` when out of range.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&b| b as char)
    }

    /// Whether `c` belongs to this alphabet.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars.contains(&(c as u8))
    }

    /// The alphabet as a string slice.
    pub fn as_str(&self) -> &'static str {
        // Prefix of an ASCII constant, so the slice is always on a char boundary.
        &KEY_CHARSET[..self.chars.len()]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: &KEY_CHARSET.as_bytes()[..DEFAULT_ALPHABET_LEN],
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
