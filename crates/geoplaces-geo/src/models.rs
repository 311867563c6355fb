//! Point models for geoplaces-geo.
//!
//! Re-exports the canonical types from `geoplaces-core` and converts them
//! to and from the `geo` crate's point type.

pub use geoplaces_core::models::{
    BoundingBox, DistanceMethod, GeoPoint, GeoStatistics, Hemisphere, NearbyPlace, PlaceRecord,
};

/// Convert a GeoPoint to a geo::Point (x = longitude, y = latitude)
pub fn to_geo_point(point: &GeoPoint) -> geo::Point {
    geo::Point::new(point.longitude, point.latitude)
}

/// Convert a geo::Point back to a GeoPoint
pub fn from_geo_point(point: geo::Point) -> GeoPoint {
    GeoPoint::new(point.y(), point.x())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order() {
        let point = GeoPoint::new(-7.11532, -34.861);
        let geo_point = to_geo_point(&point);

        assert_eq!(geo_point.x(), -34.861);
        assert_eq!(geo_point.y(), -7.11532);
        assert_eq!(from_geo_point(geo_point), point);
    }
}
