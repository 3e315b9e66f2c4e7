use owo_colors::{OwoColorize, Stream};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::data_formatting::{format_list, format_mileage, format_price};
use crate::types::Listing;

/// Multi-line detail view used by `show`.
pub fn format_listing_detail(listing: &Listing) -> String {
    let label = |name: &str| -> String {
        format!("{name}:")
            .if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string()
    };

    let mut out = format!(
        "{}\n",
        listing.title().if_supports_color(Stream::Stdout, |t| t.bold())
    );
    out.push_str(&format!("{} {}\n", label("id"), listing.id));
    out.push_str(&format!(
        "{} {}\n",
        label("price"),
        format_price(listing.price).if_supports_color(Stream::Stdout, |t| t.green())
    ));
    out.push_str(&format!(
        "{} {}\n",
        label("mileage"),
        format_mileage(listing.mileage)
    ));
    out.push_str(&format!("{} {}\n", label("location"), listing.location));

    if !listing.badges.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            label("badges"),
            format_list(&listing.badges)
        ));
    }
    if let Some(image) = listing.primary_image() {
        let more = listing.images.len() - 1;
        if more > 0 {
            out.push_str(&format!("{} {image} (+{more} more)\n", label("image")));
        } else {
            out.push_str(&format!("{} {image}\n", label("image")));
        }
    }
    if !listing.specs.is_empty() {
        out.push_str(&format!("{}\n", label("specs")));
        for (spec, value) in listing.specs.iter() {
            out.push_str(&format!("  {spec}: {value}\n"));
        }
    }
    if let Some(description) = listing.description.as_deref() {
        out.push_str(&format!("\n{description}\n"));
    }
    out
}

/// A row in the listing table
#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Make")]
    make: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Trim")]
    trim: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Mileage")]
    mileage: String,
    #[tabled(rename = "Location")]
    location: String,
}

impl From<&Listing> for ListingRow {
    fn from(listing: &Listing) -> Self {
        ListingRow {
            id: listing.id.to_string(),
            year: listing.year,
            make: listing.make.clone(),
            model: listing.model.clone(),
            trim: listing.trim.clone().unwrap_or_else(|| "-".to_string()),
            price: format_price(listing.price),
            mileage: format_mileage(listing.mileage),
            location: listing.location.clone(),
        }
    }
}

/// Render listings as a rounded table.
pub fn format_listing_table(listings: &[Listing]) -> String {
    let mut table = Table::new(listings.iter().map(ListingRow::from));
    table.with(Style::rounded());
    table.to_string()
}
