use serde_json::json;

use super::{CommandOutput, open_repository};
use crate::config::Config;
use crate::error::{ForecourtError, Result};

/// Remove a listing
pub fn cmd_delete(id: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let repo = open_repository(&config);

    if !repo.delete_listing(id) {
        return Err(ForecourtError::ListingNotFound(id.to_string()));
    }
    tracing::info!("deleted listing {id}");

    CommandOutput::new(json!({
        "id": id,
        "action": "deleted",
    }))
    .with_text(format!("Deleted {id}"))
    .print(output_json)
}
