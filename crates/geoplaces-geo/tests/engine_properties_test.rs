//! Property-based tests for the geoprocessing engine
//!
//! These tests check the distance functions, proximity search and
//! validation against invariants that must hold for any input.

use geoplaces_geo::models::{GeoPoint, PlaceRecord};
use geoplaces_geo::{
    bounding_box, centroid, distance, find_nearby, geo_statistics, haversine_distance,
    validate_coordinates,
};
use proptest::prelude::*;

/// Valid points, away from the poles to keep regional offsets meaningful
fn arb_point() -> impl Strategy<Value = GeoPoint> {
    (-80.0f64..80.0, -179.0f64..179.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

/// A point within roughly 150 km of the given one
fn arb_nearby_pair() -> impl Strategy<Value = (GeoPoint, GeoPoint)> {
    (arb_point(), -1.0f64..1.0, -1.0f64..1.0).prop_map(|(a, d_lat, d_lon)| {
        (a, GeoPoint::new(a.latitude + d_lat, a.longitude + d_lon))
    })
}

fn arb_places() -> impl Strategy<Value = Vec<PlaceRecord>> {
    prop::collection::vec(
        prop::option::weighted(0.8, (-10.0f64..-5.0, -40.0f64..-33.0)),
        0..40,
    )
    .prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let place = PlaceRecord::new(format!("place-{}", i), "Recife");
                match c {
                    Some((lat, lon)) => place.with_coordinates(lat, lon),
                    None => place,
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_distance_symmetry(a in arb_point(), b in arb_point()) {
        prop_assert!((distance(&a, &b) - distance(&b, &a)).abs() < 1e-6);
        prop_assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_identity(a in arb_point()) {
        prop_assert!(distance(&a, &a).abs() < 1e-9);
        prop_assert_eq!(haversine_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_non_negative(a in arb_point(), b in arb_point()) {
        prop_assert!(distance(&a, &b) >= 0.0);
        prop_assert!(haversine_distance(&a, &b) >= 0.0);
    }

    #[test]
    fn test_models_agree_at_regional_scale((a, b) in arb_nearby_pair()) {
        let geodesic = distance(&a, &b);
        let spherical = haversine_distance(&a, &b);
        prop_assert!(
            (geodesic - spherical).abs() < 1.0,
            "geodesic {} vs haversine {}", geodesic, spherical
        );
    }

    #[test]
    fn test_nearby_sorted_and_within_radius(
        places in arb_places(),
        center in (-10.0f64..-5.0, -40.0f64..-33.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon)),
        radius in 0.0f64..400.0
    ) {
        let nearby = find_nearby(&places, &center, radius);

        for pair in nearby.windows(2) {
            prop_assert!(pair[0].distance_km <= pair[1].distance_km);
        }

        let expected = places
            .iter()
            .filter_map(|p| p.coordinates.as_ref())
            .filter(|c| distance(&center, c) <= radius)
            .count();
        prop_assert_eq!(nearby.len(), expected);
    }

    #[test]
    fn test_boundary_inclusion((center, target) in arb_nearby_pair()) {
        let place = PlaceRecord::new("target", "").with_coordinates(target.latitude, target.longitude);
        let radius = distance(&center, &target);

        prop_assert_eq!(find_nearby(&[place.clone()], &center, radius).len(), 1);
        prop_assume!(radius > 1e-6);
        prop_assert!(find_nearby(&[place], &center, radius - 1e-7).is_empty());
    }

    #[test]
    fn test_bounding_box_contains_center(center in arb_point(), radius in 0.0f64..500.0) {
        prop_assert!(bounding_box(&center, radius).contains(&center));
    }

    #[test]
    fn test_centroid_within_extent(places in arb_places()) {
        let c = centroid(&places);
        match geo_statistics(&places) {
            Some(stats) => {
                prop_assert!(c.latitude >= stats.min_latitude - 1e-9);
                prop_assert!(c.latitude <= stats.max_latitude + 1e-9);
                prop_assert!(c.longitude >= stats.min_longitude - 1e-9);
                prop_assert!(c.longitude <= stats.max_longitude + 1e-9);
            }
            None => prop_assert_eq!(c, GeoPoint::new(0.0, 0.0)),
        }
    }

    #[test]
    fn test_validation_matches_ranges(lat in -200.0f64..200.0, lon in -400.0f64..400.0) {
        let expected = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon);
        prop_assert_eq!(validate_coordinates(lat, lon), expected);
    }
}

#[test]
fn test_joao_pessoa_recife_scenario() {
    let places = vec![
        PlaceRecord::new("Praça da Independência", "João Pessoa").with_coordinates(-7.11532, -34.861),
        PlaceRecord::new("Praça do Marco Zero", "Recife").with_coordinates(-8.04756, -34.8770),
    ];
    let center = GeoPoint::new(-7.11532, -34.861);

    let nearby = find_nearby(&places, &center, 10.0);

    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].place, places[0]);
    assert_eq!(nearby[0].distance_km, 0.0);

    let apart = distance(&center, places[1].coordinates.as_ref().unwrap());
    assert!(apart > 100.0 && apart < 107.0, "João Pessoa-Recife: {}", apart);
}

#[test]
fn test_statistics_emptiness_is_distinguishable() {
    assert!(geo_statistics(&[]).is_none());

    let unlocated = vec![PlaceRecord::new("Nowhere", "Recife")];
    assert!(geo_statistics(&unlocated).is_none());

    let origin = vec![PlaceRecord::new("Origin", "").with_coordinates(0.0, 0.0)];
    let stats = geo_statistics(&origin).expect("Located place should produce statistics");
    assert_eq!(stats.located_places, 1);
    assert_eq!(stats.centroid, GeoPoint::new(0.0, 0.0));
}

#[test]
fn test_permissive_contract_for_invalid_input() {
    // Out-of-range input is measured, not rejected
    let invalid = GeoPoint::new(95.0, 200.0);
    let valid = GeoPoint::new(0.0, 0.0);

    assert!(!validate_coordinates(invalid.latitude, invalid.longitude));
    assert!(distance(&invalid, &valid).is_finite());
    assert!(haversine_distance(&invalid, &valid).is_finite());

    let places = vec![PlaceRecord::new("Invalid", "").with_coordinates(95.0, 200.0)];
    assert_eq!(centroid(&places), invalid);
}
