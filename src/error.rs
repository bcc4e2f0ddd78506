use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot determine home directory")]
    HomeDirUnavailable,

    #[error("Config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to decode config: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to parse {}: {source}", .path.display())]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to write config: {0}")]
    Write(#[source] std::io::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown config key '{0}' (expected one of: githubUsername, apiKey, exercismDirectory, hostname)")]
    KeyNotFound(String),
}

impl ConfigError {
    /// True when the error means "the file simply isn't there".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::IoError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_path() {
        let err = ConfigError::NotFound {
            path: "/home/user/.exercism.json".into(),
        };
        assert!(err.to_string().contains(".exercism.json"));
        assert!(err.is_not_found());
    }

    #[test]
    fn key_not_found_lists_valid_keys() {
        let err = ConfigError::KeyNotFound("apikey".into());
        let msg = err.to_string();
        assert!(msg.contains("apikey"));
        assert!(msg.contains("apiKey"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn io_error_keeps_source() {
        let err = ConfigError::io(
            "/etc/exercism",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/etc/exercism"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn parse_error_formats_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::ParseError {
            path: "/tmp/.exercism.json".into(),
            source,
        };
        assert!(err.to_string().starts_with("Failed to parse /tmp/.exercism.json"));
    }
}
