//! Proximity search and attribute filters over place records.

use crate::distance::distance_with;
use crate::models::{BoundingBox, DistanceMethod, GeoPoint, NearbyPlace, PlaceRecord};
use std::cmp::Ordering;

/// Kilometers per degree of latitude used by the bounding-box approximation
const KM_PER_DEGREE: f64 = 111.0;

/// Find places within `radius_km` of `center`, nearest first.
///
/// Distances use the geodesic model. The boundary is inclusive. Places
/// without coordinates are skipped. Each result carries its distance
/// rounded to two decimals; ties keep their input order.
pub fn find_nearby(places: &[PlaceRecord], center: &GeoPoint, radius_km: f64) -> Vec<NearbyPlace> {
    find_nearby_with(places, center, radius_km, DistanceMethod::Geodesic)
}

/// [`find_nearby`] with a selectable distance model
pub fn find_nearby_with(
    places: &[PlaceRecord],
    center: &GeoPoint,
    radius_km: f64,
    method: DistanceMethod,
) -> Vec<NearbyPlace> {
    let mut nearby: Vec<NearbyPlace> = places
        .iter()
        .filter_map(|place| {
            let coordinates = place.coordinates.as_ref()?;
            let distance_km = distance_with(method, center, coordinates);

            if distance_km <= radius_km {
                Some(NearbyPlace { place: place.clone(), distance_km: round_km(distance_km) })
            } else {
                None
            }
        })
        .collect();

    // Stable sort keeps input order for equal distances
    nearby.sort_by(|a, b| a.distance_km.partial_cmp(&b.distance_km).unwrap_or(Ordering::Equal));

    tracing::debug!(
        candidates = places.len(),
        matched = nearby.len(),
        radius_km,
        ?method,
        "Proximity search complete"
    );

    nearby
}

fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Places whose city equals `city`, ignoring case. Input order is preserved.
pub fn filter_by_city(places: &[PlaceRecord], city: &str) -> Vec<PlaceRecord> {
    filter_by_field(places, city, |place| &place.city)
}

/// Places whose category equals `category`, ignoring case
pub fn filter_by_category(places: &[PlaceRecord], category: &str) -> Vec<PlaceRecord> {
    filter_by_field(places, category, |place| &place.category)
}

fn filter_by_field<F>(places: &[PlaceRecord], value: &str, field: F) -> Vec<PlaceRecord>
where
    F: Fn(&PlaceRecord) -> &str,
{
    let wanted = value.to_lowercase();
    places.iter().filter(|place| field(place).to_lowercase() == wanted).cloned().collect()
}

/// Approximate box around `center` that contains the search circle.
///
/// Assumes 111 km per degree of latitude and shrinks longitude degrees by
/// the cosine of the center latitude. Near the poles the longitude delta
/// becomes huge or infinite; see [`BoundingBox::has_longitude_constraint`].
/// Use it to pre-filter candidates only, never for final inclusion.
pub fn bounding_box(center: &GeoPoint, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / KM_PER_DEGREE;
    let lon_delta = radius_km / (KM_PER_DEGREE * center.latitude.to_radians().cos());

    BoundingBox {
        lat_min: center.latitude - lat_delta,
        lat_max: center.latitude + lat_delta,
        lon_min: center.longitude - lon_delta,
        lon_max: center.longitude + lon_delta,
    }
}
