//! Error types for GeoPlaces

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoplacesError {
    // Coordinate errors
    #[error("Invalid coordinates ({latitude}, {longitude}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Invalid direction code '{direction}': expected N, S, E or W")]
    InvalidDirection { direction: String },

    #[error("Invalid radius {radius_km} km: must be a finite, non-negative number")]
    InvalidRadius { radius_km: f64 },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GeoplacesError {
    fn from(err: serde_json::Error) -> Self {
        GeoplacesError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoplacesError>;
