//! Built-in demo inventory used to populate an empty store.

use once_cell::sync::Lazy;

use crate::types::{Listing, ListingId, Specs};

static SEED_CATALOG: Lazy<Vec<Listing>> = Lazy::new(build_catalog);

/// The built-in catalog. Callers get a borrow; it is only ever copied into a store.
pub fn seed_catalog() -> &'static [Listing] {
    &SEED_CATALOG
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    year: i32,
    make: &str,
    model: &str,
    trim: Option<&str>,
    price: f64,
    mileage: f64,
    location: &str,
    badges: &[&str],
    images: &[&str],
    description: &str,
    specs: &[(&str, &str)],
) -> Listing {
    Listing {
        id: ListingId::new_unchecked(id),
        year,
        make: make.to_string(),
        model: model.to_string(),
        trim: trim.map(str::to_string),
        price,
        mileage,
        location: location.to_string(),
        badges: badges.iter().map(|b| b.to_string()).collect(),
        images: images.iter().map(|i| i.to_string()).collect(),
        description: Some(description.to_string()),
        specs: specs.iter().copied().collect::<Specs>(),
    }
}

fn build_catalog() -> Vec<Listing> {
    vec![
        listing(
            "seed-camry-2021",
            2021,
            "Toyota",
            "Camry",
            Some("SE"),
            22_500.0,
            31_200.0,
            "Main Lot",
            &["Clean Title", "One Owner"],
            &[
                "https://images.forecourt.local/camry-2021/front.jpg",
                "https://images.forecourt.local/camry-2021/interior.jpg",
            ],
            "Sporty SE trim with a clean history and regular dealer service.",
            &[
                ("Engine", "2.5L 4-Cyl"),
                ("Transmission", "8-Speed Automatic"),
                ("Drivetrain", "FWD"),
                ("Exterior", "Celestial Silver"),
            ],
        ),
        listing(
            "seed-civic-2019",
            2019,
            "Honda",
            "Civic",
            Some("EX"),
            17_900.0,
            48_750.0,
            "Main Lot",
            &["Clean Title"],
            &["https://images.forecourt.local/civic-2019/front.jpg"],
            "Efficient commuter with sunroof and Honda Sensing.",
            &[
                ("Engine", "1.5L Turbo 4-Cyl"),
                ("Transmission", "CVT"),
                ("Drivetrain", "FWD"),
            ],
        ),
        listing(
            "seed-f150-2020",
            2020,
            "Ford",
            "F-150",
            Some("XLT"),
            34_800.0,
            52_300.0,
            "East Lot",
            &["Tow Package", "4x4"],
            &[
                "https://images.forecourt.local/f150-2020/front.jpg",
                "https://images.forecourt.local/f150-2020/bed.jpg",
            ],
            "Crew cab with the 2.7L EcoBoost and factory tow package.",
            &[
                ("Engine", "2.7L EcoBoost V6"),
                ("Transmission", "10-Speed Automatic"),
                ("Drivetrain", "4WD"),
                ("Cab", "SuperCrew"),
            ],
        ),
        listing(
            "seed-model3-2022",
            2022,
            "Tesla",
            "Model 3",
            Some("Long Range"),
            38_900.0,
            18_400.0,
            "Main Lot",
            &["One Owner", "Warranty"],
            &["https://images.forecourt.local/model3-2022/front.jpg"],
            "Dual-motor long range with autopilot and premium interior.",
            &[
                ("Battery", "82 kWh"),
                ("Range", "358 mi"),
                ("Drivetrain", "AWD"),
            ],
        ),
        listing(
            "seed-rav4-2018",
            2018,
            "Toyota",
            "RAV4",
            None,
            19_200.0,
            67_900.0,
            "East Lot",
            &[],
            &["https://images.forecourt.local/rav4-2018/front.jpg"],
            "Reliable compact SUV, new tires in the last 5k miles.",
            &[("Engine", "2.5L 4-Cyl"), ("Drivetrain", "AWD")],
        ),
        listing(
            "seed-wrangler-2017",
            2017,
            "Jeep",
            "Wrangler",
            Some("Sport"),
            24_600.0,
            71_150.0,
            "North Lot",
            &["Clean Title", "Lifted"],
            &[
                "https://images.forecourt.local/wrangler-2017/front.jpg",
                "https://images.forecourt.local/wrangler-2017/side.jpg",
            ],
            "Two-door Sport with a 2\" lift and removable hardtop.",
            &[
                ("Engine", "3.6L V6"),
                ("Transmission", "6-Speed Manual"),
                ("Drivetrain", "4WD"),
            ],
        ),
    ]
}
