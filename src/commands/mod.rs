//! Command implementations behind the `forecourt` CLI.
//!
//! Each command loads the config, opens the repository on the file store and
//! reports through [`CommandOutput`], which prints either JSON or text.

mod config;
mod create;
mod delete;
mod ls;
mod makes;
mod reset;
mod show;
mod update;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use delete::cmd_delete;
pub use ls::{LsOptions, cmd_ls};
pub use makes::cmd_makes;
pub use reset::cmd_reset;
pub use show::cmd_show;
pub use update::{UpdateOptions, cmd_update};

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::paths::data_dir;
use crate::repository::ListingRepository;
use crate::store::{FileBackend, KeyValueStore};
use crate::types::Specs;
use crate::utils::parse_spec;

/// Repository over the on-disk store named by `config`.
pub type FileRepository = ListingRepository<KeyValueStore<FileBackend>>;

pub fn open_repository(config: &Config) -> FileRepository {
    ListingRepository::new(
        KeyValueStore::new(FileBackend::new(data_dir())).with_storage_key(&config.storage_key),
    )
}

/// Parse repeated `--spec LABEL=VALUE` arguments, keeping their order.
pub(crate) fn parse_specs(raw: &[String]) -> Result<Specs> {
    let mut specs = Specs::new();
    for entry in raw {
        let (label, value) = parse_spec(entry)?;
        specs.insert(label, value);
    }
    Ok(specs)
}

/// The result of a command, printable as JSON or as text.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    /// Text shown instead of the JSON when not in JSON mode.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !output_json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}
