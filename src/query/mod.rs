//! Search, filter and sort over a listing collection.
//!
//! Every stage takes a slice and returns a new `Vec`; inputs are never
//! mutated. [`ListingQuery`] composes the stages in their fixed order:
//! search, then filters, then sort, then an optional limit.

use indexmap::IndexSet;
use unicase::UniCase;

use crate::types::Listing;

pub mod sort;

pub use sort::{SortKey, apply_sort};

/// Lower-case and trim for case-insensitive substring matching.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// The text a search query is matched against: year, make, model and trim.
fn haystack(listing: &Listing) -> String {
    normalize(&format!(
        "{} {} {} {}",
        listing.year,
        listing.make,
        listing.model,
        listing.trim.as_deref().unwrap_or("")
    ))
}

/// Keep listings whose year/make/model/trim text contains `query`.
///
/// A blank query returns the input unchanged.
pub fn apply_search(listings: &[Listing], query: &str) -> Vec<Listing> {
    let needle = normalize(query);
    if needle.is_empty() {
        return listings.to_vec();
    }
    listings
        .iter()
        .filter(|l| haystack(l).contains(&needle))
        .cloned()
        .collect()
}

/// Keep listings that satisfy every constraint set in `filters`.
pub fn apply_filters(listings: &[Listing], filters: &ListingFilters) -> Vec<Listing> {
    let active = filters.to_filters();
    listings
        .iter()
        .filter(|l| active.iter().all(|f| f.matches(l)))
        .cloned()
        .collect()
}

/// Each distinct make once, ordered case-insensitively.
pub fn unique_makes(listings: &[Listing]) -> Vec<String> {
    let mut makes: Vec<String> = listings
        .iter()
        .map(|l| l.make.clone())
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect();
    makes.sort_by(|a, b| {
        UniCase::new(a.as_str())
            .cmp(&UniCase::new(b.as_str()))
            .then_with(|| a.cmp(b))
    });
    makes
}

/// A single predicate over a listing.
pub trait ListingFilter: Send + Sync {
    fn matches(&self, listing: &Listing) -> bool;
}

/// Inclusive price bounds; either end may be open.
pub struct PriceRangeFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceRangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl ListingFilter for PriceRangeFilter {
    fn matches(&self, listing: &Listing) -> bool {
        self.min.is_none_or(|min| listing.price >= min)
            && self.max.is_none_or(|max| listing.price <= max)
    }
}

/// Inclusive model-year bounds; either end may be open.
pub struct YearRangeFilter {
    min: Option<i32>,
    max: Option<i32>,
}

impl YearRangeFilter {
    pub fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }
}

impl ListingFilter for YearRangeFilter {
    fn matches(&self, listing: &Listing) -> bool {
        self.min.is_none_or(|min| listing.year >= min)
            && self.max.is_none_or(|max| listing.year <= max)
    }
}

/// Case-insensitive exact match on make.
pub struct MakeFilter {
    make: String,
}

impl MakeFilter {
    pub fn new(make: impl Into<String>) -> Self {
        Self { make: make.into() }
    }
}

impl ListingFilter for MakeFilter {
    fn matches(&self, listing: &Listing) -> bool {
        UniCase::new(listing.make.as_str()) == UniCase::new(self.make.as_str())
    }
}

/// Independently optional filter constraints. Unset fields restrict nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilters {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    /// A blank make is the same as no make.
    pub make: Option<String>,
}

impl ListingFilters {
    pub fn is_empty(&self) -> bool {
        self.to_filters().is_empty()
    }

    /// The active constraints as filter objects.
    pub fn to_filters(&self) -> Vec<Box<dyn ListingFilter>> {
        let mut filters: Vec<Box<dyn ListingFilter>> = Vec::new();
        if self.min_price.is_some() || self.max_price.is_some() {
            filters.push(Box::new(PriceRangeFilter::new(
                self.min_price,
                self.max_price,
            )));
        }
        if self.min_year.is_some() || self.max_year.is_some() {
            filters.push(Box::new(YearRangeFilter::new(self.min_year, self.max_year)));
        }
        if let Some(make) = self.make.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            filters.push(Box::new(MakeFilter::new(make)));
        }
        filters
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.to_filters().iter().all(|f| f.matches(listing))
    }
}

/// A configured pipeline run.
pub struct ListingQuery {
    search: String,
    filters: ListingFilters,
    sort: SortKey,
    limit: Option<usize>,
}

impl ListingQuery {
    /// Run search, filters, sort and limit, in that order.
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let searched = apply_search(listings, &self.search);
        let filtered = apply_filters(&searched, &self.filters);
        let mut sorted = apply_sort(&filtered, self.sort);
        if let Some(limit) = self.limit {
            sorted.truncate(limit);
        }
        sorted
    }
}

/// Builder for [`ListingQuery`].
#[derive(Default)]
pub struct ListingQueryBuilder {
    search: String,
    filters: ListingFilters,
    sort: SortKey,
    limit: Option<usize>,
}

impl ListingQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn with_filters(mut self, filters: ListingFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> ListingQuery {
        ListingQuery {
            search: self.search,
            filters: self.filters,
            sort: self.sort,
            limit: self.limit,
        }
    }
}
