//! Sort stage of the listing query pipeline.

use std::cmp::Ordering;

use crate::types::Listing;

/// Display ordering for listings.
///
/// Parsing is lenient: any key that is not recognized means "keep the order
/// the listings came in".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Model year, newest first.
    Newest,
    PriceAsc,
    PriceDesc,
    /// Input order untouched.
    #[default]
    Unsorted,
}

impl SortKey {
    /// All recognized string keys.
    pub const ALL_STRINGS: &[&str] = &["newest", "price-asc", "price-desc", "unsorted"];

    /// Map a key to a sort order; anything unrecognized is `Unsorted`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "newest" => SortKey::Newest,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::Unsorted,
        }
    }
}

enum_display!(
    SortKey,
    {
        Newest => "newest",
        PriceAsc => "price-asc",
        PriceDesc => "price-desc",
        Unsorted => "unsorted",
    }
);

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        SortKey::from_key(key)
    }
}

impl serde::Serialize for SortKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for SortKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(SortKey::from_key(&key))
    }
}

/// `-0.0` and `0.0` are the same price.
fn cmp_price(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Return a sorted copy; the input is left as is. Ties keep their input order.
pub fn apply_sort(listings: &[Listing], sort: SortKey) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    match sort {
        SortKey::Newest => sorted.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::PriceAsc => sorted.sort_by(|a, b| cmp_price(a.price, b.price)),
        SortKey::PriceDesc => sorted.sort_by(|a, b| cmp_price(b.price, a.price)),
        SortKey::Unsorted => {}
    }
    sorted
}
