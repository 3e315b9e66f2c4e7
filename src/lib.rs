#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod paths;
pub mod query;
pub mod repository;
pub mod seed;
pub mod store;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{ForecourtError, Result};
pub use query::{
    ListingFilter, ListingFilters, ListingQuery, ListingQueryBuilder, SortKey, apply_filters,
    apply_search, apply_sort, unique_makes,
};
pub use repository::ListingRepository;
pub use seed::seed_catalog;
pub use store::{
    Backend, DEFAULT_STORAGE_KEY, FileBackend, KeyValueStore, ListingStore, MemoryBackend,
};
pub use types::{Listing, ListingId, ListingPatch, NewListing, Specs};
