//! Legacy filename migration.
//!
//! Older clients stored the config as [`LEGACY_FILE`](crate::file::LEGACY_FILE).
//! [`normalize_filename`] makes sure the current file holds the best data
//! available, based on which of the two files exist:
//!
//! | legacy | current | outcome |
//! |--------|---------|---------|
//! | no     | no      | [`Migration::NothingToMigrate`] |
//! | no     | yes     | [`Migration::AlreadyCurrent`] |
//! | yes    | no      | legacy copied to current, [`Migration::Migrated`] |
//! | yes    | yes     | current wins, [`Migration::CurrentTakesPrecedence`] |
//!
//! The legacy file is never removed. Running the migration again after a copy
//! lands in the "both" row, so repeated calls converge on the same state.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::file::{filename, legacy_filename};
use crate::persist::with_path;
use crate::types::Config;

/// Which of the two config files exist in a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Neither,
    LegacyOnly,
    CurrentOnly,
    Both,
}

impl FileState {
    /// Inspect `config_dir` once for both files.
    pub fn detect(config_dir: &Path) -> Result<FileState, ConfigError> {
        let legacy = exists(&legacy_filename(config_dir))?;
        let current = exists(&filename(config_dir))?;
        Ok(match (legacy, current) {
            (false, false) => FileState::Neither,
            (true, false) => FileState::LegacyOnly,
            (false, true) => FileState::CurrentOnly,
            (true, true) => FileState::Both,
        })
    }
}

/// What [`normalize_filename`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Migration {
    NothingToMigrate,
    AlreadyCurrent,
    Migrated { from: PathBuf, to: PathBuf },
    CurrentTakesPrecedence,
}

impl fmt::Display for Migration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Migration::NothingToMigrate => write!(f, "No config file to migrate"),
            Migration::AlreadyCurrent => write!(f, "Config file is already current"),
            Migration::Migrated { from, to } => {
                write!(f, "Migrated {} to {}", from.display(), to.display())
            }
            Migration::CurrentTakesPrecedence => {
                write!(f, "Current config file takes precedence over legacy file")
            }
        }
    }
}

/// Reconcile the legacy and current config files in `config_dir`.
///
/// Fails only on I/O errors while checking, reading the legacy file or writing
/// the current one, or when a non-empty legacy file cannot be parsed.
pub fn normalize_filename(config_dir: &Path) -> Result<Migration, ConfigError> {
    let state = FileState::detect(config_dir)?;
    tracing::debug!(
        event = "config.migrate.detected",
        dir = %config_dir.display(),
        state = ?state,
    );

    match state {
        FileState::Neither => Ok(Migration::NothingToMigrate),
        FileState::CurrentOnly => Ok(Migration::AlreadyCurrent),
        FileState::Both => Ok(Migration::CurrentTakesPrecedence),
        FileState::LegacyOnly => {
            let from = legacy_filename(config_dir);
            let to = filename(config_dir);
            let config = read_legacy(&from)?;
            config.to_file(&to)?;
            tracing::debug!(
                event = "config.migrate.copied",
                from = %from.display(),
                to = %to.display(),
            );
            Ok(Migration::Migrated { from, to })
        }
    }
}

/// Read the legacy file. Blank content yields an empty record.
fn read_legacy(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read(path).map_err(|e| ConfigError::io(path, e))?;
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Config::default());
    }
    Config::decode(&content).map_err(|e| with_path(e, path))
}

fn exists(path: &Path) -> Result<bool, ConfigError> {
    path.try_exists().map_err(|e| ConfigError::io(path, e))
}
