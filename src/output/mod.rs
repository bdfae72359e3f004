//! Key file output: one key per line, `\n` terminated, no header.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors writing the key file.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write keys to {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// Write each key followed by a newline.
pub fn write_keys<W, I, S>(writer: &mut W, keys: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for key in keys {
        writer.write_all(key.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write the keys into it.
///
/// An empty key set still creates an empty file.
pub fn write_keys_to_file<I, S>(path: &Path, keys: I) -> Result<(), OutputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let to_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_keys(&mut writer, keys).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    tracing::debug!(path = %path.display(), "wrote key file");
    Ok(())
}
