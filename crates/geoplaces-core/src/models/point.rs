//! Coordinate types shared by the geo engine and its callers.
//!
//! None of these types validate on construction. Range checks are an
//! explicit, separate step (`GeoPoint::is_valid`).

use crate::error::{GeoplacesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair in decimal degrees (WGS 84)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if latitude is in [-90, 90] and longitude in [-180, 180].
    ///
    /// NaN fails both comparisons and is therefore never valid.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Distance model used for proximity searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    /// Geodesic distance on the WGS 84 ellipsoid
    #[default]
    Geodesic,
    /// Great-circle distance on a sphere of radius 6371 km
    Haversine,
}

impl FromStr for DistanceMethod {
    type Err = GeoplacesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "geodesic" | "ellipsoidal" => Ok(DistanceMethod::Geodesic),
            "haversine" | "spherical" => Ok(DistanceMethod::Haversine),
            _ => Err(GeoplacesError::ConfigInvalid {
                key: "distance_method".to_string(),
                reason: format!("Invalid distance method: {}. Use geodesic or haversine", s),
            }),
        }
    }
}

/// Compass direction attached to a degrees/minutes/seconds value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Apply the hemisphere sign to an unsigned decimal value.
    pub fn apply(self, decimal: f64) -> f64 {
        match self {
            Hemisphere::South | Hemisphere::West => -decimal,
            Hemisphere::North | Hemisphere::East => decimal,
        }
    }
}

impl FromStr for Hemisphere {
    type Err = GeoplacesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "N" => Ok(Hemisphere::North),
            "S" => Ok(Hemisphere::South),
            "E" => Ok(Hemisphere::East),
            "W" => Ok(Hemisphere::West),
            _ => Err(GeoplacesError::InvalidDirection { direction: s.to_string() }),
        }
    }
}

/// Axis-aligned box approximating a circular search area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// False when the longitude span is infinite, NaN, or covers the whole globe.
    ///
    /// Near the poles the longitude delta grows without bound; such boxes
    /// only constrain latitude.
    pub fn has_longitude_constraint(&self) -> bool {
        let span = self.lon_max - self.lon_min;
        span.is_finite() && span < 360.0
    }

    /// Cheap pre-filter check. Final inclusion must still use a distance function.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lat_ok = point.latitude >= self.lat_min && point.latitude <= self.lat_max;
        if !lat_ok {
            return false;
        }
        if !self.has_longitude_constraint() {
            return true;
        }

        // Boxes may extend past the antimeridian
        [point.longitude, point.longitude + 360.0, point.longitude - 360.0]
            .iter()
            .any(|lon| *lon >= self.lon_min && *lon <= self.lon_max)
    }
}

/// Aggregate coordinate statistics over a set of places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoStatistics {
    /// Number of places in the input, with or without coordinates
    pub total_places: usize,
    /// Number of places that carried coordinates
    pub located_places: usize,
    pub mean_latitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub mean_longitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub centroid: GeoPoint,
}
