//! Configuration loading and layering.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary via [`Config::apply_overrides`])
//! 2. Environment variables (`KEYMINT_*`)
//! 3. `--config <path>`, or `.keymint.toml` in the working directory
//! 4. `~/.config/keymint/config.toml` (global defaults)
//! 5. Built-in defaults

mod file;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_ALPHABET_LEN, DEFAULT_BLOCKS, DEFAULT_CHARS,
    DEFAULT_KEY_COUNT, DEFAULT_OUTPUT_FILE, ENV_BLOCKS, ENV_CHARS, ENV_FILE, ENV_KEYS, ENV_LENGTH,
};
use crate::env::Env;
use crate::generator::BatchRequest;

use file::ConfigFile;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub key: KeyConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key: KeyConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Shape of each generated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    /// Hyphen-separated blocks per key.
    pub blocks: usize,
    /// Characters per block.
    pub chars: usize,
    /// Alphabet length (max 56).
    pub length: usize,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            blocks: DEFAULT_BLOCKS,
            chars: DEFAULT_CHARS,
            length: DEFAULT_ALPHABET_LEN,
        }
    }
}

/// How many keys to produce and where to put them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub count: usize,
    pub file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_KEY_COUNT,
            file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Per-run overrides, typically from CLI flags. `None` keeps the loaded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub blocks: Option<usize>,
    pub chars: Option<usize>,
    pub length: Option<usize>,
    pub count: Option<usize>,
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with the full layering, including the global file.
    ///
    /// `explicit` replaces the local `.keymint.toml` lookup in `working_dir`.
    pub fn load(
        explicit: Option<&Path>,
        working_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), explicit, working_dir, env)
    }

    /// Load configuration from the given layer locations.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        working_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global {
            if global_path.exists() {
                config.merge(ConfigFile::load(global_path)?);
            }
        }

        // Layer 3: explicit file, or local config
        match explicit {
            Some(path) => config.merge(ConfigFile::load(path)?),
            None => {
                if let Some(dir) = working_dir {
                    let local_path = dir.join(CONFIG_FILENAME);
                    if local_path.exists() {
                        config.merge(ConfigFile::load(&local_path)?);
                    }
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Apply values that were explicitly set in a config file.
    fn merge(&mut self, other: ConfigFile) {
        if let Some(key) = other.key {
            if let Some(blocks) = key.blocks {
                self.key.blocks = blocks;
            }
            if let Some(chars) = key.chars {
                self.key.chars = chars;
            }
            if let Some(length) = key.length {
                self.key.length = length;
            }
        }
        if let Some(output) = other.output {
            if let Some(count) = output.count {
                self.output.count = count;
            }
            if let Some(file) = output.file {
                self.output.file = file;
            }
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Values that do not parse are reported and ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        let numeric = [
            (ENV_BLOCKS, &mut self.key.blocks),
            (ENV_CHARS, &mut self.key.chars),
            (ENV_LENGTH, &mut self.key.length),
            (ENV_KEYS, &mut self.output.count),
        ];
        for (name, slot) in numeric {
            match env.parsed::<usize>(name) {
                Some(Ok(value)) => *slot = value,
                Some(Err(raw)) => eprintln!("Warning: ignoring invalid {name} value: {raw}"),
                None => {}
            }
        }
        if let Some(file) = env.var(ENV_FILE) {
            self.output.file = PathBuf::from(file);
        }
    }

    /// Apply per-run overrides on top of the loaded layers.
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(blocks) = overrides.blocks {
            self.key.blocks = blocks;
        }
        if let Some(chars) = overrides.chars {
            self.key.chars = chars;
        }
        if let Some(length) = overrides.length {
            self.key.length = length;
        }
        if let Some(count) = overrides.count {
            self.output.count = count;
        }
        if let Some(file) = overrides.file {
            self.output.file = file;
        }
    }

    /// The batch this configuration describes.
    pub fn batch_request(&self) -> BatchRequest {
        BatchRequest {
            blocks: self.key.blocks,
            chars: self.key.chars,
            alphabet_len: self.key.length,
            count: self.output.count,
        }
    }
}
