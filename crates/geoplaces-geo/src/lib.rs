//! GeoPlaces Geo - the geoprocessing engine
//!
//! Stateless functions over in-memory place records: geodesic and haversine
//! distances, proximity search, bounding boxes, centroids, coordinate
//! statistics, coordinate validation and DMS conversion.
//!
//! Nothing here performs I/O or holds state, so every function is safe to
//! call concurrently. Geographic input is never validated implicitly; call
//! [`validate_coordinates`] before trusting user-supplied values.

pub mod distance;
pub mod export;
pub mod models;
pub mod proximity;
pub mod stats;
pub mod validation;

pub use distance::{distance, distance_with, haversine_distance, EARTH_RADIUS_KM};
pub use proximity::{bounding_box, filter_by_category, filter_by_city, find_nearby, find_nearby_with};
pub use stats::{centroid, geo_statistics};
pub use validation::{dms_to_decimal, validate_coordinates, validate_point};
