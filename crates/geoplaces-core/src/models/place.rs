//! Place-of-interest records held by the document store.

use super::point::GeoPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub Uuid);

impl PlaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PlaceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

fn default_active() -> bool {
    true
}

/// A point of interest.
///
/// Only `coordinates` is used for geometry. Fields that are not part of the
/// typed shape are kept in `extra` and round-trip through serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlaceId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlaceRecord {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            city: city.into(),
            coordinates: None,
            description: String::new(),
            category: String::new(),
            address: String::new(),
            registered_at: None,
            active: true,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(GeoPoint::new(latitude, longitude));
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// A place annotated with its distance from a search center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    #[serde(flatten)]
    pub place: PlaceRecord,
    /// Distance in kilometers, rounded to two decimals
    pub distance_km: f64,
}

/// Payload for inserting a place
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlace {
    pub name: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: String,
}

impl NewPlace {
    pub fn into_record(self, id: PlaceId, registered_at: DateTime<Utc>) -> PlaceRecord {
        PlaceRecord {
            id: Some(id),
            name: self.name,
            city: self.city,
            coordinates: Some(GeoPoint::new(self.latitude, self.longitude)),
            description: self.description,
            category: self.category,
            address: self.address,
            registered_at: Some(registered_at),
            active: true,
            extra: serde_json::Map::new(),
        }
    }
}

/// Partial update of a place. The id and registration time are not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub city: Option<String>,
    pub coordinates: Option<GeoPoint>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
}

impl PlaceUpdate {
    /// Apply the update in place. Returns true if any field changed.
    pub fn apply(&self, place: &mut PlaceRecord) -> bool {
        let mut modified = false;

        modified |= replace_if_changed(&mut place.name, &self.name);
        modified |= replace_if_changed(&mut place.city, &self.city);
        modified |= replace_if_changed(&mut place.description, &self.description);
        modified |= replace_if_changed(&mut place.category, &self.category);
        modified |= replace_if_changed(&mut place.address, &self.address);
        modified |= replace_if_changed(&mut place.active, &self.active);

        if let Some(coordinates) = self.coordinates {
            if place.coordinates != Some(coordinates) {
                place.coordinates = Some(coordinates);
                modified = true;
            }
        }

        modified
    }
}

fn replace_if_changed<T: PartialEq + Clone>(field: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if field != v => {
            *field = v.clone();
            true
        }
        _ => false,
    }
}
