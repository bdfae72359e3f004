//! keymint — unique, human-friendly, cryptographically random unlock keys
//! (library crate).
//!
//! Re-exports public modules for the binary and integration tests.

pub mod alphabet;
pub mod config;
pub mod constants;
pub mod env;
pub mod generator;
pub mod logging;
pub mod output;

pub use alphabet::{Alphabet, AlphabetError};
pub use generator::{
    BatchError, BatchReport, BatchRequest, GenerateError, KeyFormat, KeyGenerator, generate_key,
};
