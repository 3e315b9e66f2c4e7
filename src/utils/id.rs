use uuid::Uuid;

use crate::types::ListingId;

/// A fresh random listing id (hyphenated UUID v4).
pub fn generate_listing_id() -> ListingId {
    ListingId::new_unchecked(Uuid::new_v4().to_string())
}
