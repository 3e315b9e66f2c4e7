use serde_json::json;

use super::{CommandOutput, open_repository};
use crate::config::Config;
use crate::error::Result;
use crate::query::unique_makes;

/// List each make in the inventory once
pub fn cmd_makes(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let repo = open_repository(&config);
    let makes = unique_makes(&repo.get_all_listings());

    CommandOutput::new(json!(makes))
        .with_text(makes.join("\n"))
        .print(output_json)
}
