//! Top-level application configuration.
//!
//! Configuration is stored in `.forecourt/config.yaml` and includes:
//! - The storage key the listing collection lives under
//! - The sort order `ls` uses when none is given
//! - An optional default cap on `ls` results

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ForecourtError, Result};
use crate::paths::forecourt_root;
use crate::query::SortKey;
use crate::store::DEFAULT_STORAGE_KEY;

/// Keys accepted by `config get` / `config set`.
pub const CONFIG_KEYS: &[&str] = &["storage_key", "default_sort", "default_limit"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Storage key for the listing collection (default: `forecourt_listings_v1`)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Sort applied by `ls` when `--sort` is not given
    #[serde(default)]
    pub default_sort: SortKey,

    /// Result cap applied by `ls` when `--limit` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<usize>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default_sort: SortKey::default(),
            default_limit: None,
        }
    }
}

/// Storage keys become file names, so keep them to a safe alphabet.
fn validate_storage_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(ForecourtError::Config(format!(
            "invalid storage_key '{key}': use letters, digits, '_' or '-'"
        )));
    }
    Ok(())
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        forecourt_root().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            ForecourtError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        validate_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ForecourtError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            ForecourtError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;
        Ok(())
    }

    /// Current value of `key` as text. An unset limit reads as `none`.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage_key" => Ok(self.storage_key.clone()),
            "default_sort" => Ok(self.default_sort.to_string()),
            "default_limit" => Ok(self
                .default_limit
                .map_or_else(|| "none".to_string(), |n| n.to_string())),
            _ => Err(ForecourtError::UnknownConfigKey(key.to_string())),
        }
    }

    /// Parse and assign `value` to `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "storage_key" => {
                validate_storage_key(value)?;
                self.storage_key = value.to_string();
            }
            "default_sort" => {
                let lowered = value.to_lowercase();
                if !SortKey::ALL_STRINGS.contains(&lowered.as_str()) {
                    return Err(ForecourtError::Config(format!(
                        "invalid default_sort '{value}': expected one of {}",
                        SortKey::ALL_STRINGS.join(", ")
                    )));
                }
                self.default_sort = SortKey::from_key(&lowered);
            }
            "default_limit" => {
                self.default_limit = match value.to_lowercase().as_str() {
                    "" | "none" => None,
                    n => Some(n.parse::<usize>().map_err(|_| {
                        ForecourtError::Config(format!(
                            "invalid default_limit '{value}': expected a whole number or 'none'"
                        ))
                    })?),
                };
            }
            _ => return Err(ForecourtError::UnknownConfigKey(key.to_string())),
        }
        Ok(())
    }
}
