use std::path::PathBuf;

use crate::error::ConfigError;
use crate::file::{self, HomeDir, SystemHome};
use crate::migrate::{self, Migration};
use crate::ops::{self, ConfigResult};
use crate::types::{Config, ConfigAction};

/// Hostname used when the user has not configured one.
pub const DEFAULT_HOSTNAME: &str = "http://exercism.io";

/// Entry point for loading and saving the user's configuration.
///
/// All paths are derived from a [`HomeDir`] provider, resolved on every call.
/// Nothing is cached between calls.
pub struct ConfigStore {
    home: Box<dyn HomeDir>,
    config_dir: Option<PathBuf>,
}

impl ConfigStore {
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// A store backed by the platform home directory.
    pub fn system() -> Self {
        Self::builder().build()
    }

    /// Directory holding the config files.
    pub fn config_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_dir {
            Some(dir) => Ok(dir.clone()),
            None => file::config_dir(&self.home),
        }
    }

    /// Path of the current-format config file.
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(file::filename(&self.config_dir()?))
    }

    /// Default exercise directory offered to a new user.
    pub fn demo_directory(&self) -> Result<PathBuf, ConfigError> {
        file::demo_directory(&self.home)
    }

    /// Expand a leading `~` using this store's home directory.
    pub fn replace_tilde(&self, path: &str) -> String {
        file::replace_tilde(path, &self.home)
    }

    /// Migrate the legacy config file, if any. Call once at startup.
    pub fn normalize(&self) -> Result<Migration, ConfigError> {
        migrate::normalize_filename(&self.config_dir()?)
    }

    /// Values for a user who has never configured anything.
    ///
    /// The exercise directory is left empty if the home path is not valid
    /// UTF-8.
    pub fn defaults(&self) -> Result<Config, ConfigError> {
        let demo = self.demo_directory()?;
        Ok(Config {
            exercism_directory: demo.to_str().map(str::to_string).unwrap_or_default(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            ..Config::default()
        })
    }

    /// Normalize, then read the current config file.
    ///
    /// Returns [`ConfigError::NotFound`] if there is no config yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        self.normalize()?;
        Config::from_file(&self.config_path()?)
    }

    /// Like [`load`](Self::load), falling back to [`defaults`](Self::defaults)
    /// when no config file exists.
    pub fn load_or_default(&self) -> Result<Config, ConfigError> {
        match self.load() {
            Err(e) if e.is_not_found() => self.defaults(),
            other => other,
        }
    }

    /// Write `config` to the current config file, creating the directory if
    /// needed. Returns the path written.
    pub fn save(&self, config: &Config) -> Result<PathBuf, ConfigError> {
        let dir = self.config_dir()?;
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::io(&dir, e))?;

        let path = file::filename(&dir);
        config.to_file(&path)?;
        tracing::debug!(event = "config.saved", path = %path.display());
        Ok(path)
    }

    /// Handle a `ConfigAction` and print the result to stdout.
    pub fn handle_and_print(&self, action: &ConfigAction) -> Result<(), ConfigError> {
        let result = self.handle(action)?;
        println!("{result}");
        Ok(())
    }

    /// Handle a `ConfigAction` (list / get / set / path / migrate).
    pub fn handle(&self, action: &ConfigAction) -> Result<ConfigResult, ConfigError> {
        match action {
            ConfigAction::List => {
                let config = self.load_or_default()?;
                Ok(ops::list_values(&config))
            }
            ConfigAction::Get { key } => {
                let config = self.load_or_default()?;
                ops::get_value(&config, key)
            }
            ConfigAction::Set { key, value } => {
                let mut config = self.load_or_default()?;
                let value = if key == "exercismDirectory" {
                    self.replace_tilde(value.trim())
                } else {
                    value.clone()
                };
                config.set(key, &value)?;
                self.save(&config)?;

                let stored = config.get(key).unwrap_or_default().to_string();
                Ok(ConfigResult::ValueSet {
                    key: key.clone(),
                    value: stored,
                })
            }
            ConfigAction::Path => Ok(ConfigResult::Path(self.config_path()?)),
            ConfigAction::Migrate => Ok(ConfigResult::Migrated(self.normalize()?)),
        }
    }
}

/// Builder for [`ConfigStore`].
pub struct ConfigStoreBuilder {
    home: Option<Box<dyn HomeDir>>,
    config_dir: Option<PathBuf>,
}

impl ConfigStoreBuilder {
    fn new() -> Self {
        Self {
            home: None,
            config_dir: None,
        }
    }

    /// Use a custom home directory provider (default: [`SystemHome`]).
    pub fn home(mut self, home: impl HomeDir + 'static) -> Self {
        self.home = Some(Box::new(home));
        self
    }

    /// Keep the config files in `dir` instead of the home directory.
    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> ConfigStore {
        ConfigStore {
            home: self.home.unwrap_or_else(|| Box::new(SystemHome)),
            config_dir: self.config_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::{FILE, FixedHome, LEGACY_FILE};
    use crate::fixtures::test::{sample, store_in};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn config_dir_defaults_to_home() {
        let store = ConfigStore::builder().home(FixedHome::new("/tmp/xyz")).build();
        assert_eq!(store.config_dir().unwrap(), PathBuf::from("/tmp/xyz"));
        assert_eq!(
            store.config_path().unwrap(),
            PathBuf::from("/tmp/xyz/.exercism.json")
        );
    }

    #[test]
    fn config_dir_override() {
        let store = ConfigStore::builder()
            .home(FixedHome::new("/tmp/xyz"))
            .config_dir("/etc/exercism")
            .build();
        assert_eq!(store.config_dir().unwrap(), PathBuf::from("/etc/exercism"));
        assert_eq!(
            store.demo_directory().unwrap(),
            PathBuf::from("/tmp/xyz/exercism-demo")
        );
    }

    #[test]
    fn defaults_use_demo_directory() {
        let store = ConfigStore::builder().home(FixedHome::new("/tmp/xyz")).build();
        let config = store.defaults().unwrap();
        assert_eq!(config.exercism_directory, "/tmp/xyz/exercism-demo");
        assert_eq!(config.hostname, DEFAULT_HOSTNAME);
        assert!(config.api_key.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn defaults_skip_non_utf8_demo_directory() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let store = ConfigStore::builder()
            .home(FixedHome::new(OsStr::from_bytes(b"/home/\xffuser")))
            .build();
        let config = store.defaults().unwrap();
        assert_eq!(config.exercism_directory, "");
        assert_eq!(config.hostname, DEFAULT_HOSTNAME);
    }

    #[test]
    fn load_missing_is_not_found() {
        let home = TempDir::new().unwrap();
        let store = store_in(&home);
        assert!(store.load().unwrap_err().is_not_found());
    }

    #[test]
    fn load_or_default_without_file() {
        let home = TempDir::new().unwrap();
        let store = store_in(&home);
        assert_eq!(store.load_or_default().unwrap(), store.defaults().unwrap());
        assert!(!home.path().join(FILE).exists());
    }

    #[test]
    fn save_then_load() {
        let home = TempDir::new().unwrap();
        let store = store_in(&home);

        let path = store.save(&sample()).unwrap();
        assert_eq!(path, home.path().join(FILE));
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_creates_config_dir() {
        let home = TempDir::new().unwrap();
        let nested = home.path().join("a").join("b");
        let store = ConfigStore::builder()
            .home(FixedHome::new(home.path()))
            .config_dir(&nested)
            .build();

        store.save(&sample()).unwrap();
        assert!(nested.join(FILE).exists());
    }

    #[test]
    fn load_migrates_legacy_file() {
        let home = TempDir::new().unwrap();
        sample().to_file(&home.path().join(LEGACY_FILE)).unwrap();

        let store = store_in(&home);
        assert_eq!(store.load().unwrap(), sample());
        assert!(home.path().join(FILE).exists());
        assert!(home.path().join(LEGACY_FILE).exists());
    }

    #[test]
    fn handle_path() {
        let home = TempDir::new().unwrap();
        let result = store_in(&home).handle(&ConfigAction::Path).unwrap();
        assert_eq!(result, ConfigResult::Path(home.path().join(FILE)));
    }

    #[test]
    fn handle_set_persists() {
        let home = TempDir::new().unwrap();
        let store = store_in(&home);

        let result = store
            .handle(&ConfigAction::Set {
                key: "apiKey".into(),
                value: "secret \n".into(),
            })
            .unwrap();
        assert_eq!(
            result,
            ConfigResult::ValueSet {
                key: "apiKey".into(),
                value: "secret".into(),
            }
        );

        let config = store.load().unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.hostname, DEFAULT_HOSTNAME);
    }

    #[test]
    fn handle_set_directory_expands_tilde() {
        let home = TempDir::new().unwrap();
        let store = store_in(&home);

        store
            .handle(&ConfigAction::Set {
                key: "exercismDirectory".into(),
                value: " ~/code/exercism".into(),
            })
            .unwrap();

        let config = store.load().unwrap();
        assert_eq!(
            config.exercism_directory,
            format!("{}/code/exercism", home.path().display())
        );
    }

    #[test]
    fn handle_set_unknown_key_does_not_write() {
        let home = TempDir::new().unwrap();
        let store = store_in(&home);

        let result = store.handle(&ConfigAction::Set {
            key: "nope".into(),
            value: "x".into(),
        });
        assert!(matches!(result, Err(ConfigError::KeyNotFound(_))));
        assert!(!home.path().join(FILE).exists());
    }

    #[test]
    fn handle_get_and_list() {
        let home = TempDir::new().unwrap();
        let store = store_in(&home);
        store.save(&sample()).unwrap();

        let get = store
            .handle(&ConfigAction::Get {
                key: "hostname".into(),
            })
            .unwrap();
        assert_eq!(get.to_string(), "hostname = localhost");

        let list = store.handle(&ConfigAction::List).unwrap().to_string();
        assert!(list.starts_with("githubUsername = user"));
        assert_eq!(list.lines().count(), 4);
    }

    #[test]
    fn handle_migrate_reports_outcome() {
        let home = TempDir::new().unwrap();
        fs::File::create(home.path().join(LEGACY_FILE)).unwrap();
        let store = store_in(&home);

        let first = store.handle(&ConfigAction::Migrate).unwrap();
        assert!(matches!(
            first,
            ConfigResult::Migrated(Migration::Migrated { .. })
        ));
        let second = store.handle(&ConfigAction::Migrate).unwrap();
        assert_eq!(
            second,
            ConfigResult::Migrated(Migration::CurrentTakesPrecedence)
        );
    }
}
