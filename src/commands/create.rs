use serde_json::json;

use super::{CommandOutput, open_repository, parse_specs};
use crate::config::Config;
use crate::error::Result;
use crate::types::NewListing;
use crate::utils::validate_new_listing;

/// Options for creating a new listing
#[derive(Debug, Default)]
pub struct CreateOptions {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub price: f64,
    pub mileage: f64,
    pub location: String,
    pub badges: Vec<String>,
    pub images: Vec<String>,
    pub description: Option<String>,
    /// Raw `LABEL=VALUE` pairs
    pub specs: Vec<String>,
    pub json: bool,
}

/// Create a new listing and print its id
pub fn cmd_create(options: CreateOptions) -> Result<()> {
    let payload = validate_new_listing(NewListing {
        year: options.year,
        make: options.make,
        model: options.model,
        trim: options.trim,
        price: options.price,
        mileage: options.mileage,
        location: options.location,
        badges: options.badges,
        images: options.images,
        description: options.description,
        specs: parse_specs(&options.specs)?,
    })?;

    let config = Config::load()?;
    let repo = open_repository(&config);
    let listing = repo.create_listing(payload);
    tracing::info!("created listing {}", listing.id);

    CommandOutput::new(json!(listing))
        .with_text(listing.id.to_string())
        .print(options.json)
}
