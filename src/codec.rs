//! Encoding and decoding of [`Config`] records.
//!
//! Both directions run every field through [`sanitize`], so a value read back
//! is always the trimmed form of what was written. The on-disk shape is one
//! compact JSON object, keys in declaration order, followed by a newline:
//!
//! ```text
//! {"githubUsername":"user","apiKey":"MyKey","exercismDirectory":"/home/user","hostname":"localhost"}
//! ```
//!
//! Nothing here touches the filesystem; see `persist` for the file wrappers.

use std::io::{Read, Write};

use crate::error::ConfigError;
use crate::types::Config;

/// Trim leading and trailing whitespace, including `\r` and `\n`.
pub fn sanitize(value: &str) -> String {
    value.trim().to_string()
}

impl Config {
    /// Copy of this record with every field sanitized.
    pub fn sanitized(&self) -> Config {
        Config {
            github_username: sanitize(&self.github_username),
            api_key: sanitize(&self.api_key),
            exercism_directory: sanitize(&self.exercism_directory),
            hostname: sanitize(&self.hostname),
        }
    }

    /// Serialize the sanitized record, newline-terminated.
    pub fn encode(&self) -> Result<Vec<u8>, ConfigError> {
        let mut buf = serde_json::to_vec(&self.sanitized()).map_err(ConfigError::Encode)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Like [`encode`](Self::encode) but writes into `writer`.
    pub fn encode_to<W: Write>(&self, mut writer: W) -> Result<(), ConfigError> {
        let bytes = self.encode()?;
        writer.write_all(&bytes).map_err(ConfigError::Write)
    }

    /// Parse a JSON object and sanitize every field.
    ///
    /// Unknown keys are ignored; missing keys decode as empty strings.
    pub fn decode(bytes: &[u8]) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_slice(bytes).map_err(ConfigError::Decode)?;
        Ok(config.sanitized())
    }

    /// Like [`decode`](Self::decode) but reads from `reader`.
    pub fn decode_from<R: Read>(reader: R) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::Decode)?;
        Ok(config.sanitized())
    }
}
