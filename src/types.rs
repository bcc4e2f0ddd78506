use serde::{Deserialize, Serialize};

/// The persisted per-user configuration.
///
/// Field order here is the key order on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub github_username: String,
    pub api_key: String,
    pub exercism_directory: String,
    pub hostname: String,
}

/// Keys of [`Config`], as they appear in the JSON file.
pub const KEYS: [&str; 4] = ["githubUsername", "apiKey", "exercismDirectory", "hostname"];

/// A config operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    List,
    Get { key: String },
    Set { key: String, value: String },
    Path,
    Migrate,
}
