use crate::models::{GeoPoint, Hemisphere};
use geoplaces_core::error::{GeoplacesError, Result};

/// True iff latitude is in [-90, 90] and longitude in [-180, 180], bounds included.
///
/// No other function in this crate performs this check.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> bool {
    GeoPoint::new(latitude, longitude).is_valid()
}

/// Build a point from raw input, rejecting out-of-range values
pub fn validate_point(latitude: f64, longitude: f64) -> Result<GeoPoint> {
    if validate_coordinates(latitude, longitude) {
        Ok(GeoPoint::new(latitude, longitude))
    } else {
        Err(GeoplacesError::InvalidCoordinates { latitude, longitude })
    }
}

/// Convert degrees/minutes/seconds to signed decimal degrees.
///
/// `direction` is one of N, S, E, W (case-insensitive, surrounding
/// whitespace ignored); S and W negate the result. Any other code is an
/// `InvalidDirection` error. The components themselves are not range-checked.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, direction: &str) -> Result<f64> {
    let hemisphere: Hemisphere = direction.parse()?;
    Ok(hemisphere.apply(degrees + minutes / 60.0 + seconds / 3600.0))
}
