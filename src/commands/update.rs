use serde_json::json;

use super::{CommandOutput, open_repository, parse_specs};
use crate::config::Config;
use crate::error::{ForecourtError, Result};
use crate::types::ListingPatch;
use crate::utils::validate_patch;

/// Options for updating a listing. Only the fields given are changed.
///
/// List-valued options replace the stored list when non-empty.
#[derive(Debug, Default)]
pub struct UpdateOptions {
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub clear_trim: bool,
    pub price: Option<f64>,
    pub mileage: Option<f64>,
    pub location: Option<String>,
    pub badges: Vec<String>,
    pub images: Vec<String>,
    pub description: Option<String>,
    pub clear_description: bool,
    /// Raw `LABEL=VALUE` pairs
    pub specs: Vec<String>,
    pub json: bool,
}

impl UpdateOptions {
    fn into_patch(self) -> Result<ListingPatch> {
        let specs = if self.specs.is_empty() {
            None
        } else {
            Some(parse_specs(&self.specs)?)
        };
        let non_empty = |v: Vec<String>| (!v.is_empty()).then_some(v);

        Ok(ListingPatch {
            year: self.year,
            make: self.make,
            model: self.model,
            trim: if self.clear_trim {
                Some(None)
            } else {
                self.trim.map(Some)
            },
            price: self.price,
            mileage: self.mileage,
            location: self.location,
            badges: non_empty(self.badges),
            images: non_empty(self.images),
            description: if self.clear_description {
                Some(None)
            } else {
                self.description.map(Some)
            },
            specs,
        })
    }
}

/// Apply a partial update to an existing listing
pub fn cmd_update(id: &str, options: UpdateOptions) -> Result<()> {
    let output_json = options.json;
    let patch = options.into_patch()?;
    if patch.is_empty() {
        return Err(ForecourtError::InvalidInput(
            "no fields to update".to_string(),
        ));
    }
    let patch = validate_patch(patch)?;

    let config = Config::load()?;
    let repo = open_repository(&config);
    let listing = repo
        .update_listing(id, patch)
        .ok_or_else(|| ForecourtError::ListingNotFound(id.to_string()))?;
    tracing::info!("updated listing {id}");

    CommandOutput::new(json!(listing))
        .with_text(format!("Updated {id}"))
        .print(output_json)
}
