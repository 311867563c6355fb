//! Integration tests for the sample data set
//!
//! These tests load the demo data into the in-memory stores and run the
//! geo engine over what the stores return.

use geoplaces_core::models::GeoPoint;
use geoplaces_geo::{filter_by_city, find_nearby, geo_statistics};
use geoplaces_store::memory::{MemoryMunicipalityStore, MemoryPlaceStore};
use geoplaces_store::ports::{MunicipalityStore, PlaceStore};
use geoplaces_store::sample::{seed_municipalities, seed_places, CITIES, STATES};

#[tokio::test]
async fn test_seed_municipalities() {
    let store = MemoryMunicipalityStore::new();
    let count = seed_municipalities(&store).await.unwrap();

    assert_eq!(count, CITIES.len());
    assert_eq!(store.list_states().await.unwrap().len(), STATES.len());

    let cities = store.list_cities().await.unwrap();
    assert_eq!(cities.len(), CITIES.len());
    assert_eq!(cities[0].name, "Aracaju");

    let recife = cities.iter().find(|c| c.name == "Recife").unwrap();
    assert_eq!(recife.uf, "PE");
    assert_eq!(recife.state_name, "Pernambuco");
    let density = recife.density().unwrap();
    assert!((density - 1_653_461.0 / 218.435).abs() < 1e-6);
}

#[tokio::test]
async fn test_seeding_twice_keeps_states_unique() {
    let store = MemoryMunicipalityStore::new();
    seed_municipalities(&store).await.unwrap();
    seed_municipalities(&store).await.unwrap();

    assert_eq!(store.list_states().await.unwrap().len(), STATES.len());
    assert_eq!(store.list_cities().await.unwrap().len(), CITIES.len() * 2);
}

#[tokio::test]
async fn test_nearby_over_stored_places() {
    let store = MemoryPlaceStore::new();
    seed_places(&store).await.unwrap();

    let places = store.list_places().await.unwrap();
    let center = GeoPoint::new(-7.11532, -34.861);

    let nearby = find_nearby(&places, &center, 10.0);
    let names: Vec<&str> = nearby.iter().map(|n| n.place.name.as_str()).collect();

    assert_eq!(names, vec!["Praça da Independência", "Mercado Central", "Estação Cabo Branco"]);
    assert_eq!(nearby[0].distance_km, 0.0);
}

#[tokio::test]
async fn test_places_per_city_cross_reference() {
    let places_store = MemoryPlaceStore::new();
    let cities_store = MemoryMunicipalityStore::new();
    seed_places(&places_store).await.unwrap();
    seed_municipalities(&cities_store).await.unwrap();

    let places = places_store.list_places().await.unwrap();
    let cities = cities_store.list_cities().await.unwrap();

    let counts: Vec<(String, usize)> = cities
        .iter()
        .map(|city| (city.name.clone(), filter_by_city(&places, &city.name).len()))
        .filter(|(_, count)| *count > 0)
        .collect();

    assert_eq!(
        counts,
        vec![
            ("Fortaleza".to_string(), 2),
            ("João Pessoa".to_string(), 3),
            ("Recife".to_string(), 3),
        ]
    );
}

#[tokio::test]
async fn test_statistics_over_stored_places() {
    let store = MemoryPlaceStore::new();
    seed_places(&store).await.unwrap();

    let recife = store.places_by_city("Recife").await.unwrap();
    let stats = geo_statistics(&recife).expect("Recife places have coordinates");

    assert_eq!(stats.total_places, 3);
    assert_eq!(stats.min_latitude, -8.11944);
    assert_eq!(stats.max_latitude, -8.04756);
}
