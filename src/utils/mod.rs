pub mod id;
pub mod validation;

pub use id::generate_listing_id;
pub use validation::{
    MIN_MODEL_YEAR, max_model_year, normalize_list, parse_spec, validate_new_listing,
    validate_patch,
};
