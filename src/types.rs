use std::fmt;
use std::ops::Deref;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque listing identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    /// Wrap a raw identifier without checking it.
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ListingId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ListingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ListingId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ListingId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Spec sheet: label → value, kept in insertion order for display.
///
/// Serialized as a JSON object. Deserialization also accepts the older
/// `[{"label": .., "value": ..}]` list form and folds it into the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Specs(IndexMap<String, String>);

#[derive(Deserialize)]
struct SpecEntry {
    label: String,
    value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpecsRepr {
    Map(IndexMap<String, String>),
    Pairs(Vec<SpecEntry>),
}

impl<'de> Deserialize<'de> for Specs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let specs = match SpecsRepr::deserialize(deserializer)? {
            SpecsRepr::Map(map) => Specs(map),
            SpecsRepr::Pairs(pairs) => pairs
                .into_iter()
                .map(|entry| (entry.label, entry.value))
                .collect(),
        };
        Ok(specs)
    }
}

impl Specs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a spec. An existing label keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.0.insert(label.into(), value.into());
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Specs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specs = Specs::new();
        for (label, value) in iter {
            specs.insert(label, value);
        }
        specs
    }
}

/// One vehicle for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub year: i32,
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    pub price: f64,
    pub mileage: f64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Specs::is_empty")]
    pub specs: Specs,
}

impl Listing {
    /// Attach an identifier to a creation payload.
    pub fn from_new(id: ListingId, new: NewListing) -> Self {
        Listing {
            id,
            year: new.year,
            make: new.make,
            model: new.model,
            trim: new.trim,
            price: new.price,
            mileage: new.mileage,
            location: new.location,
            badges: new.badges,
            images: new.images,
            description: new.description,
            specs: new.specs,
        }
    }

    /// Shallow field-by-field merge.
    ///
    /// A field present in `patch` replaces the stored value; an absent field
    /// keeps it. `trim` and `description` can be cleared with `Some(None)`.
    /// The identifier is never touched.
    pub fn merge(&self, patch: ListingPatch) -> Listing {
        Listing {
            id: self.id.clone(),
            year: patch.year.unwrap_or(self.year),
            make: patch.make.unwrap_or_else(|| self.make.clone()),
            model: patch.model.unwrap_or_else(|| self.model.clone()),
            trim: patch.trim.unwrap_or_else(|| self.trim.clone()),
            price: patch.price.unwrap_or(self.price),
            mileage: patch.mileage.unwrap_or(self.mileage),
            location: patch.location.unwrap_or_else(|| self.location.clone()),
            badges: patch.badges.unwrap_or_else(|| self.badges.clone()),
            images: patch.images.unwrap_or_else(|| self.images.clone()),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            specs: patch.specs.unwrap_or_else(|| self.specs.clone()),
        }
    }

    /// "2021 Toyota Camry SE", or without the trim when there is none.
    pub fn title(&self) -> String {
        let base = format!("{} {} {}", self.year, self.make, self.model);
        match self.trim.as_deref() {
            Some(trim) if !trim.is_empty() => format!("{base} {trim}"),
            _ => base,
        }
    }

    /// Primary thumbnail, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Creation payload: a listing without its identifier.
///
/// An `id` key in incoming JSON is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub year: i32,
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    pub price: f64,
    pub mileage: f64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Specs::is_empty")]
    pub specs: Specs,
}

/// Partial update payload. `None` leaves the stored field alone.
///
/// For `trim` and `description`, `Some(None)` clears the field; in JSON that
/// is an explicit `null`, while an omitted key leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingPatch {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub trim: Option<Option<String>>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub mileage: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub badges: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub specs: Option<Specs>,
}

impl ListingPatch {
    pub fn is_empty(&self) -> bool {
        *self == ListingPatch::default()
    }
}

// Distinguishes a present `null` from a missing key.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
