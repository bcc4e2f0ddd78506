//! File wrappers around the codec.
//!
//! Each call opens its own handle and drops it before returning, on the error
//! paths as well. Paths are attached to every I/O failure.
//!
//! Writes go to a temporary file in the target's directory which is then
//! renamed over the target, so a failed write never leaves a truncated config
//! behind.

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ConfigError;
use crate::types::Config;

impl Config {
    /// Load a config from `path`.
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist and
    /// [`ConfigError::ParseError`] if its content is malformed.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::io(path, e),
        })?;

        Config::decode(&content).map_err(|e| with_path(e, path))
    }

    /// Write this config to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist. The existing file is left
    /// untouched if any step fails.
    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let bytes = self.encode()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(dir, e))?;
        tmp.write_all(&bytes)
            .and_then(|()| tmp.flush())
            .map_err(|e| ConfigError::io(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| ConfigError::io(path, e.error))?;
        Ok(())
    }
}

/// Attach `path` to a decode failure.
pub(crate) fn with_path(err: ConfigError, path: &Path) -> ConfigError {
    match err {
        ConfigError::Decode(source) => ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}
