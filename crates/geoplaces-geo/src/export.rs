//! GeoJSON export for map rendering.

use crate::models::{GeoPoint, NearbyPlace, PlaceRecord};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

/// Places with coordinates as a FeatureCollection of points
pub fn places_to_geojson(places: &[PlaceRecord]) -> FeatureCollection {
    collect_features(places.iter().map(|place| (place.coordinates, properties_of(place))))
}

/// Proximity results as a FeatureCollection; `distance_km` is kept as a property
pub fn nearby_to_geojson(nearby: &[NearbyPlace]) -> FeatureCollection {
    collect_features(nearby.iter().map(|n| (n.place.coordinates, properties_of(n))))
}

fn collect_features<I>(items: I) -> FeatureCollection
where
    I: Iterator<Item = (Option<GeoPoint>, JsonObject)>,
{
    let features = items
        .filter_map(|(coordinates, properties)| {
            let point = coordinates?;
            Some(Feature {
                geometry: Some(Geometry::new(Value::Point(vec![point.longitude, point.latitude]))),
                properties: Some(properties),
                id: None,
                bbox: None,
                foreign_members: None,
            })
        })
        .collect();

    FeatureCollection { features, bbox: None, foreign_members: None }
}

fn properties_of<T: serde::Serialize>(record: &T) -> JsonObject {
    match serde_json::to_value(record) {
        Ok(JsonValue::Object(mut map)) => {
            map.remove("coordinates");
            map
        }
        _ => JsonObject::new(),
    }
}
