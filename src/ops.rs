//! Config operations: key lookup, listing, and result types.
//!
//! Provides the logic behind `config list`, `config get` and `config set`, and
//! the `ConfigResult` enum that callers use to display results.

use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::migrate::Migration;
use crate::types::{Config, KEYS};

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// A single key's stored value.
    KeyValue { key: String, value: String },
    /// Confirmation that a value was persisted.
    ValueSet { key: String, value: String },
    /// All stored configuration key-value pairs.
    Listing { entries: Vec<(String, String)> },
    /// Location of the current config file.
    Path(PathBuf),
    /// Outcome of the legacy filename migration.
    Migrated(Migration),
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::KeyValue { key, value } => write!(f, "{key} = {value}"),
            ConfigResult::ValueSet { key, value } => write!(f, "Set {key} = {value}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            ConfigResult::Path(path) => write!(f, "{}", path.display()),
            ConfigResult::Migrated(migration) => write!(f, "{migration}"),
        }
    }
}

impl Config {
    /// Look up a field by its JSON key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "githubUsername" => Some(&self.github_username),
            "apiKey" => Some(&self.api_key),
            "exercismDirectory" => Some(&self.exercism_directory),
            "hostname" => Some(&self.hostname),
            _ => None,
        }
    }

    /// Set a field by its JSON key. The value is sanitized.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let slot = match key {
            "githubUsername" => &mut self.github_username,
            "apiKey" => &mut self.api_key,
            "exercismDirectory" => &mut self.exercism_directory,
            "hostname" => &mut self.hostname,
            _ => return Err(ConfigError::KeyNotFound(key.into())),
        };
        *slot = crate::codec::sanitize(value);
        Ok(())
    }
}

/// Get a config value by key.
pub fn get_value(config: &Config, key: &str) -> Result<ConfigResult, ConfigError> {
    let value = config
        .get(key)
        .ok_or_else(|| ConfigError::KeyNotFound(key.into()))?;
    Ok(ConfigResult::KeyValue {
        key: key.into(),
        value: format_value(value),
    })
}

/// List all config values in file order.
pub fn list_values(config: &Config) -> ConfigResult {
    let entries = KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|v| (key.to_string(), format_value(v))))
        .collect();
    ConfigResult::Listing { entries }
}

fn format_value(value: &str) -> String {
    if value.is_empty() {
        "<not set>".to_string()
    } else {
        value.to_string()
    }
}
