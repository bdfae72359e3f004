//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! default key shape, and the character superset so a rename only requires
//! changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "keymint";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.keymint.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".keymint.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "keymint";

/// Every character a key may contain, in selection order.
///
/// Digits and letters without the look-alikes `1 I i 0 O o`. An alphabet of
/// length `n` is always the first `n` bytes of this string.
pub const KEY_CHARSET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjklmnpqrstuvwxyz";

/// Separator placed between blocks of a key.
pub const BLOCK_SEPARATOR: char = '-';

/// Longest key, separators included, that a format may describe.
pub const MAX_KEY_LEN: usize = 4096;

// ── Defaults ────────────────────────────────────────────────────────

pub const DEFAULT_BLOCKS: usize = 3;
pub const DEFAULT_CHARS: usize = 5;
pub const DEFAULT_ALPHABET_LEN: usize = 32;
pub const DEFAULT_KEY_COUNT: usize = 1000;
pub const DEFAULT_OUTPUT_FILE: &str = "keys.txt";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BLOCKS: &str = "KEYMINT_BLOCKS";
pub const ENV_CHARS: &str = "KEYMINT_CHARS";
pub const ENV_LENGTH: &str = "KEYMINT_LENGTH";
pub const ENV_KEYS: &str = "KEYMINT_KEYS";
pub const ENV_FILE: &str = "KEYMINT_FILE";
pub const ENV_LOG: &str = "KEYMINT_LOG";
