//! Centroid and summary statistics over place coordinates.

use crate::models::{from_geo_point, to_geo_point, GeoPoint, GeoStatistics, PlaceRecord};
use geo::algorithm::centroid::Centroid;
use geo::MultiPoint;

/// Mean latitude and mean longitude of the places that carry coordinates.
///
/// Returns `(0.0, 0.0)` when no place has coordinates, including for empty
/// input. That default is indistinguishable from a real point at the
/// origin; use [`geo_statistics`] when the caller needs to tell them apart.
pub fn centroid(places: &[PlaceRecord]) -> GeoPoint {
    let points: MultiPoint = places
        .iter()
        .filter_map(|place| place.coordinates.as_ref())
        .map(to_geo_point)
        .collect();

    points.centroid().map(from_geo_point).unwrap_or_default()
}

/// Aggregate coordinate statistics, or `None` when no place has coordinates.
pub fn geo_statistics(places: &[PlaceRecord]) -> Option<GeoStatistics> {
    let coordinates: Vec<&GeoPoint> =
        places.iter().filter_map(|place| place.coordinates.as_ref()).collect();

    if coordinates.is_empty() {
        tracing::debug!(total = places.len(), "No geographic data available for statistics");
        return None;
    }

    let count = coordinates.len() as f64;
    let mut sum_lat = 0.0;
    let mut sum_lon = 0.0;
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;

    for point in &coordinates {
        sum_lat += point.latitude;
        sum_lon += point.longitude;
        min_lat = min_lat.min(point.latitude);
        max_lat = max_lat.max(point.latitude);
        min_lon = min_lon.min(point.longitude);
        max_lon = max_lon.max(point.longitude);
    }

    let mean_latitude = sum_lat / count;
    let mean_longitude = sum_lon / count;

    Some(GeoStatistics {
        total_places: places.len(),
        located_places: coordinates.len(),
        mean_latitude,
        min_latitude: min_lat,
        max_latitude: max_lat,
        mean_longitude,
        min_longitude: min_lon,
        max_longitude: max_lon,
        centroid: GeoPoint::new(mean_latitude, mean_longitude),
    })
}
