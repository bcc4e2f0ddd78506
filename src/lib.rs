//! Configuration persistence for the exercism command-line client.
//!
//! The crate knows where the per-user config file lives, how to read and
//! write it, and how to bring a legacy config file forward:
//!
//! ```ignore
//! let store = ConfigStore::system();
//! store.normalize()?;
//! let mut config = store.load_or_default()?;
//! config.exercism_directory = store.replace_tilde("~/exercism");
//! store.save(&config)?;
//! ```
//!
//! # File layout
//!
//! The config directory is the user's home directory. It holds at most two
//! files:
//!
//! - [`FILE`] (`.exercism.json`): the current format, read and written.
//! - [`LEGACY_FILE`] (`.exercism.go`): written by older clients, only ever
//!   read during migration.
//!
//! The current file is a single compact JSON object with four string keys in
//! fixed order, terminated by a newline:
//!
//! ```text
//! {"githubUsername":"user","apiKey":"MyKey","exercismDirectory":"/home/user/exercism","hostname":"http://exercism.io"}
//! ```
//!
//! # Sanitizing
//!
//! Values pasted into a terminal tend to pick up stray spaces and `\r\n`.
//! Every field is trimmed both when encoding and when decoding, through the
//! same [`sanitize`] function, so `decode(encode(c)) == c.sanitized()` holds
//! for any [`Config`]. Whitespace inside a value is kept.
//!
//! # Migration
//!
//! [`normalize_filename`] (or [`ConfigStore::normalize`]) copies the legacy
//! file to the current name when only the legacy file exists. When both
//! exist the current file wins and nothing is written. The legacy file is
//! never deleted, and running the migration again changes nothing.
//!
//! # Home directory
//!
//! All home lookups go through the [`HomeDir`] trait. [`SystemHome`] asks the
//! platform; [`FixedHome`] pins a directory, which keeps tests away from the
//! real `$HOME`.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`ConfigArgs`] gives a host CLI
//! `config list|get|set|path|migrate`. [`ConfigArgs::into_action`] produces a
//! [`ConfigAction`], which [`ConfigStore::handle`] executes. Without clap,
//! build the [`ConfigAction`] yourself.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfigError`]. I/O failures carry the
//! path involved; a missing file is reported as [`ConfigError::NotFound`] so
//! callers can tell "no config yet" apart from a real failure.

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod codec;
mod file;
mod migrate;
mod ops;
mod persist;

#[cfg(test)]
mod fixtures;

pub use builder::{ConfigStore, ConfigStoreBuilder, DEFAULT_HOSTNAME};
#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use codec::sanitize;
pub use error::ConfigError;
pub use file::{
    DEMO_DIRNAME, FILE, FixedHome, HomeDir, LEGACY_FILE, SystemHome, config_dir, demo_directory,
    filename, legacy_filename, replace_tilde,
};
pub use migrate::{FileState, Migration, normalize_filename};
pub use ops::ConfigResult;
pub use types::{Config, ConfigAction, KEYS};
