//! Clap adapter.
//!
//! Compiled only with the `clap` Cargo feature (on by default). Embed
//! [`ConfigArgs`] in a host CLI to get `config list|get|set|path|migrate`.
//! The only bridge to the core is [`ConfigArgs::into_action()`]; everything
//! after that goes through [`ConfigStore::handle()`](crate::ConfigStore::handle).

use clap::{Args, Subcommand};

use crate::types::ConfigAction;

/// Clap-derived args for the `config` subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Config(ConfigArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show all stored configuration values.
    List,
    /// Show the stored value for a key.
    Get {
        /// One of githubUsername, apiKey, exercismDirectory, hostname.
        key: String,
    },
    /// Persist a configuration value.
    Set {
        /// One of githubUsername, apiKey, exercismDirectory, hostname.
        key: String,
        /// Value to set. A leading `~` in exercismDirectory is expanded.
        value: String,
    },
    /// Print the config file location.
    Path,
    /// Copy a legacy config file to the current filename.
    Migrate,
}

impl ConfigArgs {
    /// Convert clap-parsed args into a framework-agnostic `ConfigAction`.
    ///
    /// Bare `config` (no subcommand) and explicit `config list` both map to
    /// `ConfigAction::List`.
    pub fn into_action(self) -> ConfigAction {
        match self.action {
            None | Some(ConfigSubcommand::List) => ConfigAction::List,
            Some(ConfigSubcommand::Get { key }) => ConfigAction::Get { key },
            Some(ConfigSubcommand::Set { key, value }) => ConfigAction::Set { key, value },
            Some(ConfigSubcommand::Path) => ConfigAction::Path,
            Some(ConfigSubcommand::Migrate) => ConfigAction::Migrate,
        }
    }
}
