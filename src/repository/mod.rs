//! Record-level access to the listing collection.
//!
//! The repository is the only supported way to read or mutate listings. It
//! holds no cache: every call re-reads the collection from its store, applies
//! the change, and writes the whole collection back.

use crate::store::ListingStore;
use crate::types::{Listing, ListingId, ListingPatch, NewListing};

/// Attempts at drawing an id that is not already in the collection.
const ID_RETRIES: u32 = 16;

pub struct ListingRepository<S> {
    store: S,
}

impl<S: ListingStore> ListingRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All listings in stored order (most recently created first).
    pub fn get_all_listings(&self) -> Vec<Listing> {
        self.store.load_all()
    }

    pub fn get_listing_by_id(&self, id: &str) -> Option<Listing> {
        self.store.load_all().into_iter().find(|l| l.id == id)
    }

    /// Assign a fresh id, put the listing at the front, persist.
    pub fn create_listing(&self, payload: NewListing) -> Listing {
        let mut all = self.store.load_all();
        let id = self.fresh_id(&all);
        let listing = Listing::from_new(id, payload);
        all.insert(0, listing.clone());
        self.store.save_all(&all);
        listing
    }

    /// Merge `patch` over the stored record in place. `None` if no such id;
    /// nothing is written in that case.
    pub fn update_listing(&self, id: &str, patch: ListingPatch) -> Option<Listing> {
        let mut all = self.store.load_all();
        let slot = all.iter_mut().find(|l| l.id == id)?;
        let updated = slot.merge(patch);
        *slot = updated.clone();
        self.store.save_all(&all);
        Some(updated)
    }

    /// Remove the listing with `id`. Returns whether anything was removed;
    /// only then is the collection written back.
    pub fn delete_listing(&self, id: &str) -> bool {
        let mut all = self.store.load_all();
        let before = all.len();
        all.retain(|l| l.id != id);
        if all.len() == before {
            return false;
        }
        self.store.save_all(&all);
        true
    }

    /// Drop everything persisted and start over from the seed catalog.
    pub fn reset_to_seed(&self) -> Vec<Listing> {
        self.store.reset();
        self.store.load_all()
    }

    fn fresh_id(&self, existing: &[Listing]) -> ListingId {
        let mut id = self.store.generate_id();
        for _ in 0..ID_RETRIES {
            if !existing.iter().any(|l| l.id == id) {
                break;
            }
            tracing::debug!("generated id {id} already in use, drawing again");
            id = self.store.generate_id();
        }
        id
    }
}
