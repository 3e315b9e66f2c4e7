use serde_json::json;

use super::{CommandOutput, open_repository};
use crate::config::Config;
use crate::display::format_listing_detail;
use crate::error::{ForecourtError, Result};

/// Display one listing in full
pub fn cmd_show(id: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let repo = open_repository(&config);

    let listing = repo
        .get_listing_by_id(id)
        .ok_or_else(|| ForecourtError::ListingNotFound(id.to_string()))?;

    CommandOutput::new(json!(listing))
        .with_text(format_listing_detail(&listing).trim_end())
        .print(output_json)
}
