#[cfg(test)]
pub mod test {
    use tempfile::TempDir;

    use crate::builder::ConfigStore;
    use crate::file::FixedHome;
    use crate::types::Config;

    /// A clean, fully populated config.
    pub fn sample() -> Config {
        Config {
            github_username: "user".into(),
            api_key: "MyKey".into(),
            exercism_directory: "/exercism/directory".into(),
            hostname: "localhost".into(),
        }
    }

    /// The same values padded with whitespace and line endings.
    pub fn unsanitized() -> Config {
        Config {
            github_username: "user\r\n".into(),
            api_key: "  MyKey ".into(),
            exercism_directory: "\t/home/user name  ".into(),
            hostname: "localhost \r\n".into(),
        }
    }

    /// A store whose home (and config dir) is `home`.
    pub fn store_in(home: &TempDir) -> ConfigStore {
        ConfigStore::builder()
            .home(FixedHome::new(home.path()))
            .build()
    }

    #[test]
    fn unsanitized_differs_from_sample() {
        assert_ne!(unsanitized(), sample());
        assert_eq!(unsanitized().sanitized().api_key, sample().api_key);
    }
}
