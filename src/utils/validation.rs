//! Write-boundary validation for listing payloads.
//!
//! The repository stores whatever it is given. Every entry point that accepts
//! user input (CLI flags, JSON files) runs payloads through here first so the
//! stored collection keeps its invariants: required text present, amounts
//! non-negative, model year plausible, tag lists free of blanks and repeats.

use indexmap::IndexSet;
use jiff::Zoned;

use crate::error::{ForecourtError, Result};
use crate::types::{ListingPatch, NewListing, Specs};

// ============================================================================
// Constants
// ============================================================================

/// Oldest model year accepted.
pub const MIN_MODEL_YEAR: i32 = 1900;

/// Newest model year accepted: next year's models go on sale this year.
pub fn max_model_year() -> i32 {
    i32::from(Zoned::now().year()) + 1
}

// ============================================================================
// Field rules
// ============================================================================

pub fn validate_year(year: i32) -> Result<i32> {
    let max = max_model_year();
    if !(MIN_MODEL_YEAR..=max).contains(&year) {
        return Err(ForecourtError::YearOutOfRange {
            year,
            min: MIN_MODEL_YEAR,
            max,
        });
    }
    Ok(year)
}

/// Prices and odometer readings: finite and `>= 0`.
pub fn validate_amount(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ForecourtError::InvalidAmount { field, value });
    }
    // Fold -0.0 into 0.0.
    Ok(value + 0.0)
}

/// Trim a required text field, rejecting blanks.
pub fn require_text(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ForecourtError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank becomes absent.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim entries, drop blanks and repeats, keep first-seen order.
pub fn normalize_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Trim labels and values; entries with a blank label are dropped.
pub fn normalize_specs(specs: Specs) -> Specs {
    specs
        .iter()
        .map(|(label, value)| (label.trim(), value.trim()))
        .filter(|(label, _)| !label.is_empty())
        .collect()
}

/// Parse a `LABEL=VALUE` spec argument. The value may itself contain `=`.
pub fn parse_spec(raw: &str) -> Result<(String, String)> {
    let (label, value) = raw
        .split_once('=')
        .ok_or_else(|| ForecourtError::InvalidSpec(raw.to_string()))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(ForecourtError::InvalidSpec(raw.to_string()));
    }
    Ok((label.to_string(), value.trim().to_string()))
}

// ============================================================================
// Payloads
// ============================================================================

/// Validate and normalize a creation payload.
pub fn validate_new_listing(new: NewListing) -> Result<NewListing> {
    Ok(NewListing {
        year: validate_year(new.year)?,
        make: require_text("make", &new.make)?,
        model: require_text("model", &new.model)?,
        trim: normalize_optional_text(new.trim),
        price: validate_amount("price", new.price)?,
        mileage: validate_amount("mileage", new.mileage)?,
        location: require_text("location", &new.location)?,
        badges: normalize_list(new.badges),
        images: normalize_list(new.images),
        description: normalize_optional_text(new.description),
        specs: normalize_specs(new.specs),
    })
}

/// Validate and normalize the fields present in an update payload.
pub fn validate_patch(patch: ListingPatch) -> Result<ListingPatch> {
    Ok(ListingPatch {
        year: patch.year.map(validate_year).transpose()?,
        make: patch.make.map(|v| require_text("make", &v)).transpose()?,
        model: patch.model.map(|v| require_text("model", &v)).transpose()?,
        trim: patch.trim.map(normalize_optional_text),
        price: patch
            .price
            .map(|v| validate_amount("price", v))
            .transpose()?,
        mileage: patch
            .mileage
            .map(|v| validate_amount("mileage", v))
            .transpose()?,
        location: patch
            .location
            .map(|v| require_text("location", &v))
            .transpose()?,
        badges: patch.badges.map(normalize_list),
        images: patch.images.map(normalize_list),
        description: patch.description.map(normalize_optional_text),
        specs: patch.specs.map(normalize_specs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_listing() -> NewListing {
        NewListing {
            year: 2020,
            make: "  Honda ".to_string(),
            model: "Civic".to_string(),
            trim: Some("   ".to_string()),
            price: 18_000.0,
            mileage: 40_000.0,
            location: "Main Lot".to_string(),
            badges: vec![
                "Clean Title".to_string(),
                "".to_string(),
                " Clean Title ".to_string(),
                "One Owner".to_string(),
            ],
            images: vec!["a.jpg".to_string(), "a.jpg".to_string()],
            description: None,
            specs: Specs::new(),
        }
    }

    #[test]
    fn test_new_listing_is_normalized() {
        let validated = validate_new_listing(new_listing()).unwrap();
        assert_eq!(validated.make, "Honda");
        assert_eq!(validated.trim, None);
        assert_eq!(validated.badges, vec!["Clean Title", "One Owner"]);
        assert_eq!(validated.images, vec!["a.jpg"]);
    }

    #[test]
    fn test_required_fields_rejected_when_blank() {
        for field in ["make", "model", "location"] {
            let mut new = new_listing();
            match field {
                "make" => new.make = " ".to_string(),
                "model" => new.model = String::new(),
                _ => new.location = "\t".to_string(),
            }
            let err = validate_new_listing(new).unwrap_err();
            assert!(
                matches!(err, ForecourtError::EmptyField(f) if f == field),
                "expected EmptyField({field}), got {err}"
            );
        }
    }

    #[test]
    fn test_year_bounds() {
        assert!(validate_year(MIN_MODEL_YEAR).is_ok());
        assert!(validate_year(max_model_year()).is_ok());
        assert!(validate_year(MIN_MODEL_YEAR - 1).is_err());
        assert!(validate_year(max_model_year() + 1).is_err());
    }

    #[test]
    fn test_amounts_must_be_non_negative_and_finite() {
        assert_eq!(validate_amount("price", 0.0).unwrap(), 0.0);
        assert!(validate_amount("price", -1.0).is_err());
        assert!(validate_amount("mileage", f64::NAN).is_err());
        assert!(validate_amount("mileage", f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_zero_amount_normalized() {
        let price = validate_amount("price", -0.0).unwrap();
        assert_eq!(price, 0.0);
        assert!(price.is_sign_positive());
    }

    #[test]
    fn test_parse_spec() {
        assert_eq!(
            parse_spec("Engine = 2.5L").unwrap(),
            ("Engine".to_string(), "2.5L".to_string())
        );
        assert_eq!(
            parse_spec("Note=a=b").unwrap(),
            ("Note".to_string(), "a=b".to_string())
        );
        assert!(parse_spec("Engine").is_err());
        assert!(parse_spec("=V6").is_err());
    }

    #[test]
    fn test_normalize_specs_drops_blank_labels() {
        let specs: Specs = [(" Engine ", " V6 "), ("  ", "ghost")].into_iter().collect();
        let normalized = normalize_specs(specs);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized.get("Engine"), Some("V6"));
    }

    #[test]
    fn test_patch_only_checks_present_fields() {
        let patch = ListingPatch {
            price: Some(100.0),
            ..Default::default()
        };
        assert_eq!(validate_patch(patch.clone()).unwrap(), patch);

        let bad = ListingPatch {
            mileage: Some(-5.0),
            ..Default::default()
        };
        assert!(validate_patch(bad).is_err());
    }

    #[test]
    fn test_patch_blank_trim_becomes_clear() {
        let patch = ListingPatch {
            trim: Some(Some("  ".to_string())),
            ..Default::default()
        };
        assert_eq!(validate_patch(patch).unwrap().trim, Some(None));
    }
}
