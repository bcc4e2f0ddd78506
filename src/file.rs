//! Path resolution for the configuration file and the demo directory.
//!
//! Every lookup of the user's home directory goes through the [`HomeDir`]
//! trait. Production code uses [`SystemHome`], which asks the `directories`
//! crate (honouring `$HOME` on Unix). Tests and embedders pass a
//! [`FixedHome`] instead, so nothing here needs to touch the process
//! environment.
//!
//! The configuration directory is the home directory itself: both config
//! files are dotfiles living directly under `$HOME`.
//!
//! [`filename`] and [`legacy_filename`] are pure joins and perform no I/O.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Basename of the current-format config file.
pub const FILE: &str = ".exercism.json";

/// Basename of the legacy config file, still read during migration.
pub const LEGACY_FILE: &str = ".exercism.go";

/// Directory name (under home) offered to new users for downloaded exercises.
pub const DEMO_DIRNAME: &str = "exercism-demo";

/// Source of the user's home directory.
pub trait HomeDir {
    /// Returns `None` if the home directory cannot be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Home directory of the current user, as reported by the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeDir for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        let user = directories::UserDirs::new()?;
        Some(user.home_dir().to_path_buf())
    }
}

/// A home directory fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHome(PathBuf);

impl FixedHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl HomeDir for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

impl<H: HomeDir + ?Sized> HomeDir for &H {
    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}

impl<H: HomeDir + ?Sized> HomeDir for Box<H> {
    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}

fn require_home(home: &impl HomeDir) -> Result<PathBuf, ConfigError> {
    home.home_dir().ok_or(ConfigError::HomeDirUnavailable)
}

/// The per-user configuration directory.
pub fn config_dir(home: &impl HomeDir) -> Result<PathBuf, ConfigError> {
    require_home(home)
}

/// The default exercise directory for a new user: `<home>/exercism-demo`.
pub fn demo_directory(home: &impl HomeDir) -> Result<PathBuf, ConfigError> {
    Ok(require_home(home)?.join(DEMO_DIRNAME))
}

/// Replace a leading `~` in `path` with the home directory.
///
/// Only the first character is considered; a `~` anywhere else is kept as-is.
/// If the home directory cannot be determined, or is not valid UTF-8, the
/// path is returned unchanged.
pub fn replace_tilde(path: &str, home: &impl HomeDir) -> String {
    let Some(rest) = path.strip_prefix('~') else {
        return path.to_string();
    };
    match home.home_dir().as_deref().and_then(Path::to_str) {
        Some(dir) => format!("{dir}{rest}"),
        None => path.to_string(),
    }
}

/// Path of the current-format config file inside `dir`.
pub fn filename(dir: &Path) -> PathBuf {
    dir.join(FILE)
}

/// Path of the legacy config file inside `dir`.
pub fn legacy_filename(dir: &Path) -> PathBuf {
    dir.join(LEGACY_FILE)
}
