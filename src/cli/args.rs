//! Clap argument types.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use keymint::config::Overrides;

/// Generate unique, human-friendly, cryptographically random keys.
///
/// Keys use digits and letters without the look-alikes 1, I, i, 0, O and o,
/// and are written to a file one per line.
#[derive(Parser, Debug)]
#[command(name = keymint::constants::APP_NAME, version = keymint::constants::VERSION)]
pub struct Cli {
    /// Number of character blocks per key (default 3).
    #[arg(short = 'b', long, value_name = "N")]
    pub blocks: Option<usize>,

    /// Number of characters per block (default 5).
    #[arg(short = 'c', long, value_name = "N")]
    pub chars: Option<usize>,

    /// Number of eligible characters (recommended 32, max 56).
    #[arg(short = 'l', long, value_name = "N")]
    pub length: Option<usize>,

    /// Number of keys to generate (default 1000).
    #[arg(short = 'k', long, value_name = "N")]
    pub keys: Option<usize>,

    /// File to write the keys to (default keys.txt).
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read settings from this TOML file instead of ./.keymint.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress the summary line.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags that override the loaded configuration.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            blocks: self.blocks,
            chars: self.chars,
            length: self.length,
            count: self.keys,
            file: self.file.clone(),
        }
    }
}
