//! Durable persistence of the whole listing collection as one blob.
//!
//! The store favors availability over durability: a missing or corrupt blob
//! is replaced by the seed catalog, and a failed write is logged and dropped.
//! Callers always get a collection back.

use tracing::{debug, warn};

use crate::seed::seed_catalog;
use crate::types::{Listing, ListingId};
use crate::utils::generate_listing_id;

pub mod backend;

pub use backend::{Backend, FileBackend, MemoryBackend};

/// Versioned key the collection is stored under. Schema changes get a new key.
pub const DEFAULT_STORAGE_KEY: &str = "forecourt_listings_v1";

/// Persistence boundary beneath the repository.
pub trait ListingStore {
    /// Read the persisted collection, seeding it first if absent or unreadable.
    ///
    /// Two calls with no write in between return equal collections.
    fn load_all(&self) -> Vec<Listing>;

    /// Overwrite the persisted collection. Best effort: failures are logged.
    fn save_all(&self, listings: &[Listing]);

    /// A fresh opaque identifier.
    fn generate_id(&self) -> ListingId;

    /// Forget the persisted collection so the next load reseeds.
    fn reset(&self);
}

/// [`ListingStore`] over any [`Backend`], serializing the collection as JSON.
#[derive(Debug, Clone)]
pub struct KeyValueStore<B> {
    backend: B,
    storage_key: String,
    seed: Vec<Listing>,
}

impl<B: Backend> KeyValueStore<B> {
    /// Store under [`DEFAULT_STORAGE_KEY`], seeded from the built-in catalog.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: seed_catalog().to_vec(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Replace the catalog used to populate an empty store.
    pub fn with_seed(mut self, seed: Vec<Listing>) -> Self {
        self.seed = seed;
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn seed_and_persist(&self) -> Vec<Listing> {
        debug!(
            "seeding '{}' with {} listings",
            self.storage_key,
            self.seed.len()
        );
        let listings = self.seed.clone();
        self.save_all(&listings);
        listings
    }
}

impl<B: Backend> ListingStore for KeyValueStore<B> {
    fn load_all(&self) -> Vec<Listing> {
        match self.backend.get(&self.storage_key) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Listing>>(&blob) {
                Ok(listings) => {
                    debug!(
                        "loaded {} listings from '{}'",
                        listings.len(),
                        self.storage_key
                    );
                    return listings;
                }
                Err(e) => {
                    warn!(
                        "stored listings under '{}' are unreadable, reseeding: {e}",
                        self.storage_key
                    );
                }
            },
            Ok(None) => {}
            Err(e) => {
                warn!(
                    "failed to read listings under '{}', reseeding: {e}",
                    self.storage_key
                );
            }
        }

        self.seed_and_persist()
    }

    fn save_all(&self, listings: &[Listing]) {
        // JSON has no NaN or infinity; such a blob would not load back.
        if let Some(bad) = listings
            .iter()
            .find(|l| !l.price.is_finite() || !l.mileage.is_finite())
        {
            warn!(
                "refusing to save listings under '{}': listing {} has a non-finite price or mileage",
                self.storage_key, bad.id
            );
            return;
        }

        let blob = match serde_json::to_string(listings) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("failed to serialize listings: {e}");
                return;
            }
        };

        match self.backend.set(&self.storage_key, &blob) {
            Ok(()) => debug!(
                "saved {} listings to '{}'",
                listings.len(),
                self.storage_key
            ),
            Err(e) => warn!(
                "failed to save listings under '{}': {e}",
                self.storage_key
            ),
        }
    }

    fn generate_id(&self) -> ListingId {
        generate_listing_id()
    }

    fn reset(&self) {
        if let Err(e) = self.backend.remove(&self.storage_key) {
            warn!(
                "failed to clear listings under '{}': {e}",
                self.storage_key
            );
        }
    }
}
