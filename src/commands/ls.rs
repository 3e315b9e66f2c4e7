use serde_json::json;

use super::{CommandOutput, open_repository};
use crate::config::Config;
use crate::display::format_listing_table;
use crate::error::Result;
use crate::query::{ListingFilters, ListingQueryBuilder, SortKey};

/// Options for `ls`. Unset sort and limit fall back to the config.
#[derive(Debug, Default)]
pub struct LsOptions {
    pub search: Option<String>,
    pub filters: ListingFilters,
    pub sort: Option<SortKey>,
    pub limit: Option<usize>,
    pub json: bool,
}

/// List listings through the search, filter and sort pipeline
pub fn cmd_ls(options: LsOptions) -> Result<()> {
    let config = Config::load()?;
    let repo = open_repository(&config);

    let mut builder = ListingQueryBuilder::new()
        .with_search(options.search.unwrap_or_default())
        .with_filters(options.filters)
        .with_sort(options.sort.unwrap_or(config.default_sort));
    if let Some(limit) = options.limit.or(config.default_limit) {
        builder = builder.with_limit(limit);
    }

    let listings = builder.build().apply(&repo.get_all_listings());

    let text = if listings.is_empty() {
        "No listings found.".to_string()
    } else {
        format!(
            "{}\n\n{} listing(s)",
            format_listing_table(&listings),
            listings.len()
        )
    };

    CommandOutput::new(json!(listings))
        .with_text(text)
        .print(options.json)
}
