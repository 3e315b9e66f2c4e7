//! Repository and query pipeline behavior through the public library API.

use forecourt::{
    KeyValueStore, Listing, ListingFilters, ListingId, ListingPatch, ListingQueryBuilder,
    ListingRepository, MemoryBackend, NewListing, SortKey, apply_filters, apply_search,
    apply_sort, seed_catalog, unique_makes,
};

type MemoryRepository = ListingRepository<KeyValueStore<MemoryBackend>>;

fn repo() -> MemoryRepository {
    ListingRepository::new(KeyValueStore::new(MemoryBackend::new()))
}

fn repo_with_seed(seed: Vec<Listing>) -> MemoryRepository {
    ListingRepository::new(KeyValueStore::new(MemoryBackend::new()).with_seed(seed))
}

fn record(id: &str, year: i32, make: &str, model: &str, price: f64) -> Listing {
    Listing {
        id: ListingId::new_unchecked(id),
        year,
        make: make.to_string(),
        model: model.to_string(),
        trim: None,
        price,
        mileage: 1_000.0,
        location: "Main Lot".to_string(),
        badges: vec![],
        images: vec![],
        description: None,
        specs: Default::default(),
    }
}

fn payload() -> NewListing {
    NewListing {
        year: 2024,
        make: "Hyundai".to_string(),
        model: "Ioniq 5".to_string(),
        price: 41_000.0,
        mileage: 3_000.0,
        location: "North Lot".to_string(),
        ..Default::default()
    }
}

// ============================================================================
// Repository
// ============================================================================

#[test]
fn test_first_access_returns_seed() {
    assert_eq!(repo().get_all_listings(), seed_catalog().to_vec());
}

#[test]
fn test_get_by_id_round_trips() {
    let repo = repo();
    for listing in repo.get_all_listings() {
        assert_eq!(repo.get_listing_by_id(&listing.id), Some(listing));
    }
    assert!(repo.get_listing_by_id("missing").is_none());
}

#[test]
fn test_create_prepends_fresh_id() {
    let repo = repo();
    let before = repo.get_all_listings();

    let created = repo.create_listing(payload());

    let after = repo.get_all_listings();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0], created);
    assert!(before.iter().all(|l| l.id != created.id));
    assert_eq!(&after[1..], &before[..]);
}

#[test]
fn test_created_ids_are_distinct() {
    let repo = repo();
    let a = repo.create_listing(payload());
    let b = repo.create_listing(payload());
    assert_ne!(a.id, b.id);
}

#[test]
fn test_update_only_touches_given_fields() {
    let repo = repo();
    let target = repo.get_all_listings()[1].clone();

    let updated = repo
        .update_listing(
            &target.id,
            ListingPatch {
                price: Some(1.0),
                ..Default::default()
            },
        )
        .unwrap();

    let mut expected = target.clone();
    expected.price = 1.0;
    assert_eq!(updated, expected);
    assert_eq!(repo.get_all_listings()[1], expected);
}

#[test]
fn test_update_missing_id_changes_nothing() {
    let repo = repo();
    let before = repo.get_all_listings();
    let patch = ListingPatch {
        price: Some(1.0),
        ..Default::default()
    };
    assert!(repo.update_listing("missing", patch).is_none());
    assert_eq!(repo.get_all_listings(), before);
}

#[test]
fn test_patch_cannot_change_id() {
    let repo = repo();
    let id = repo.get_all_listings()[0].id.clone();
    let patch: ListingPatch =
        serde_json::from_str(r#"{"id": "hijack", "make": "Lexus"}"#).unwrap();

    let updated = repo.update_listing(&id, patch).unwrap();
    assert_eq!(updated.id, id);
    assert!(repo.get_listing_by_id("hijack").is_none());
}

#[test]
fn test_delete_then_delete_again() {
    let repo = repo();
    let id = repo.get_all_listings()[2].id.clone();
    let before = repo.get_all_listings();

    assert!(repo.delete_listing(&id));
    assert!(repo.get_listing_by_id(&id).is_none());
    assert!(!repo.delete_listing(&id));

    let expected: Vec<Listing> = before.into_iter().filter(|l| l.id != id).collect();
    assert_eq!(repo.get_all_listings(), expected);
}

#[test]
fn test_empty_collection_stays_empty() {
    let repo = repo();
    for listing in repo.get_all_listings() {
        repo.delete_listing(&listing.id);
    }
    assert!(repo.get_all_listings().is_empty());
    assert!(repo.get_all_listings().is_empty());
}

#[test]
fn test_custom_seed() {
    let repo = repo_with_seed(vec![record("only", 2020, "Kia", "Soul", 9_000.0)]);
    assert_eq!(repo.get_all_listings().len(), 1);
    repo.create_listing(payload());
    assert_eq!(repo.reset_to_seed().len(), 1);
}

#[test]
fn test_non_finite_price_does_not_wipe_earlier_listings() {
    let repo = repo();
    let kept = repo.create_listing(NewListing {
        make: "Kia".to_string(),
        model: "EV6".to_string(),
        price: 40_000.0,
        ..payload()
    });
    let snapshot = repo.get_all_listings();

    repo.create_listing(NewListing {
        make: "Kia".to_string(),
        model: "EV9".to_string(),
        price: f64::NAN,
        ..payload()
    });

    let after = repo.get_all_listings();
    assert_eq!(after, snapshot);
    assert_eq!(repo.get_listing_by_id(&kept.id), Some(kept));
    assert_ne!(after, seed_catalog().to_vec());
}

// ============================================================================
// Query pipeline
// ============================================================================

#[test]
fn test_empty_search_is_identity() {
    let all = seed_catalog().to_vec();
    assert_eq!(apply_search(&all, ""), all);
}

#[test]
fn test_search_by_make() {
    let one = vec![record("c", 2021, "Toyota", "Camry", 1.0)];
    assert_eq!(apply_search(&one, "toyota"), one);
    assert!(apply_search(&one, "honda").is_empty());
}

#[test]
fn test_exact_price_filter() {
    let all = vec![
        record("a", 2020, "X", "Y", 19_000.0),
        record("b", 2020, "X", "Y", 20_000.0),
        record("c", 2020, "X", "Y", 21_000.0),
    ];
    let filters = ListingFilters {
        min_price: Some(20_000.0),
        max_price: Some(20_000.0),
        ..Default::default()
    };
    let matched = apply_filters(&all, &filters);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].price, 20_000.0);
}

#[test]
fn test_price_asc_is_ordered_and_stable() {
    let all = vec![
        record("a", 2020, "X", "Y", 500.0),
        record("b", 2020, "X", "Y", 100.0),
        record("c", 2020, "X", "Y", 500.0),
        record("d", 2020, "X", "Y", 100.0),
    ];
    let sorted = apply_sort(&all, SortKey::PriceAsc);
    assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
    let ids: Vec<&str> = sorted.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "d", "a", "c"]);
}

#[test]
fn test_end_to_end_scenario() {
    let repo = repo_with_seed(vec![
        record("a", 2018, "X", "Y", 15_000.0),
        record("b", 2020, "X", "Y", 30_000.0),
        record("c", 2019, "X", "Y", 22_000.0),
    ]);
    let all = repo.get_all_listings();
    let filters = ListingFilters {
        min_price: Some(20_000.0),
        ..Default::default()
    };

    let result = apply_sort(
        &apply_filters(&apply_search(&all, ""), &filters),
        SortKey::from_key("price-asc"),
    );
    let prices: Vec<f64> = result.iter().map(|l| l.price).collect();
    assert_eq!(prices, vec![22_000.0, 30_000.0]);

    let via_builder = ListingQueryBuilder::new()
        .with_filters(filters)
        .with_sort(SortKey::PriceAsc)
        .build()
        .apply(&all);
    assert_eq!(via_builder, result);
}

#[test]
fn test_unique_makes_of_seed() {
    assert_eq!(
        unique_makes(seed_catalog()),
        vec!["Ford", "Honda", "Jeep", "Tesla", "Toyota"]
    );
}
