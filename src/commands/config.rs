//! Configuration commands for managing Forecourt settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::CommandOutput;
use crate::config::{CONFIG_KEYS, Config};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    let json_output = json!({
        "storage_key": config.storage_key,
        "default_sort": config.default_sort.to_string(),
        "default_limit": config.default_limit,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = format!(
        "{}\n\n",
        "Configuration:".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    for key in CONFIG_KEYS {
        text_output.push_str(&format!(
            "{}: {}\n",
            key.if_supports_color(Stream::Stdout, |t| t.cyan()),
            config.get(key)?
        ));
    }
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display())
            .if_supports_color(Stream::Stdout, |t| t.dimmed())
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Print one configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value.clone())
    .print(output_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    let stored = config.get(key)?;

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(format!(
        "Set {} to {}",
        key.if_supports_color(Stream::Stdout, |t| t.cyan()),
        stored
    ))
    .print(output_json)
}
