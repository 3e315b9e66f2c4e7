use serde_json::json;

use super::{CommandOutput, open_repository};
use crate::config::Config;
use crate::error::Result;

/// Throw away all edits and restore the seed catalog
pub fn cmd_reset(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let repo = open_repository(&config);
    let restored = repo.reset_to_seed();

    CommandOutput::new(json!({
        "action": "reset",
        "listings": restored.len(),
    }))
    .with_text(format!("Restored {} seed listing(s)", restored.len()))
    .print(output_json)
}
