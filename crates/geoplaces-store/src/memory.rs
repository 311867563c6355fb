//! In-memory storage implementations for development and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state.

use async_trait::async_trait;
use chrono::Utc;
use geoplaces_core::error::Result;
use geoplaces_core::models::{
    City, CityId, CityView, NewCity, NewPlace, PlaceId, PlaceRecord, PlaceUpdate, State, StateId,
};
use std::sync::{Arc, RwLock};

use crate::ports::{MunicipalityStore, PlaceStore};

/// In-memory implementation of PlaceStore
#[derive(Debug, Clone, Default)]
pub struct MemoryPlaceStore {
    places: Arc<RwLock<Vec<PlaceRecord>>>,
}

impl MemoryPlaceStore {
    /// Create a new in-memory place store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored places, including deactivated ones
    pub fn len(&self) -> usize {
        self.places.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored record in insertion order, deactivated ones included
    pub fn records(&self) -> Vec<PlaceRecord> {
        self.places.read().unwrap().clone()
    }

    fn active_matching<F>(&self, predicate: F) -> Vec<PlaceRecord>
    where
        F: Fn(&PlaceRecord) -> bool,
    {
        let places = self.places.read().unwrap();
        places.iter().filter(|place| place.active && predicate(place)).cloned().collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl PlaceStore for MemoryPlaceStore {
    async fn insert_place(&self, place: NewPlace) -> Result<PlaceId> {
        let id = PlaceId::new();
        let record = place.into_record(id, Utc::now());

        tracing::debug!(%id, name = %record.name, city = %record.city, "Inserting place");

        self.places.write().unwrap().push(record);
        Ok(id)
    }

    async fn import_place(&self, mut place: PlaceRecord) -> Result<PlaceId> {
        let id = *place.id.get_or_insert_with(PlaceId::new);
        let mut places = self.places.write().unwrap();

        match places.iter_mut().find(|existing| existing.id == Some(id)) {
            Some(existing) => *existing = place,
            None => places.push(place),
        }
        Ok(id)
    }

    async fn get_place(&self, id: PlaceId) -> Result<Option<PlaceRecord>> {
        let places = self.places.read().unwrap();
        Ok(places.iter().find(|place| place.id == Some(id) && place.active).cloned())
    }

    async fn list_places(&self) -> Result<Vec<PlaceRecord>> {
        Ok(self.active_matching(|_| true))
    }

    async fn places_by_city(&self, city: &str) -> Result<Vec<PlaceRecord>> {
        Ok(self.active_matching(|place| contains_ignore_case(&place.city, city)))
    }

    async fn places_by_category(&self, category: &str) -> Result<Vec<PlaceRecord>> {
        Ok(self.active_matching(|place| contains_ignore_case(&place.category, category)))
    }

    async fn search_places(&self, term: &str) -> Result<Vec<PlaceRecord>> {
        Ok(self.active_matching(|place| {
            contains_ignore_case(&place.name, term)
                || contains_ignore_case(&place.description, term)
                || contains_ignore_case(&place.category, term)
        }))
    }

    async fn update_place(&self, id: PlaceId, update: PlaceUpdate) -> Result<bool> {
        let mut places = self.places.write().unwrap();

        let Some(place) = places.iter_mut().find(|place| place.id == Some(id)) else {
            tracing::debug!(%id, "Update skipped, place not found");
            return Ok(false);
        };

        Ok(update.apply(place))
    }

    async fn deactivate_place(&self, id: PlaceId) -> Result<bool> {
        let mut places = self.places.write().unwrap();

        match places.iter_mut().find(|place| place.id == Some(id) && place.active) {
            Some(place) => {
                place.active = false;
                tracing::debug!(%id, "Place deactivated");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory implementation of MunicipalityStore
#[derive(Debug, Clone, Default)]
pub struct MemoryMunicipalityStore {
    states: Arc<RwLock<Vec<State>>>,
    cities: Arc<RwLock<Vec<City>>>,
    next_id: Arc<RwLock<u64>>,
}

impl MemoryMunicipalityStore {
    /// Create a new in-memory municipality store
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> u64 {
        let mut next_id = self.next_id.write().unwrap();
        *next_id += 1;
        *next_id
    }

    fn find_or_insert_state(&self, name: &str, uf: &str) -> StateId {
        let uf = uf.trim().to_uppercase();
        let mut states = self.states.write().unwrap();

        if let Some(state) = states.iter_mut().find(|state| state.uf == uf) {
            // A state created implicitly by a city insert gets its name later
            if state.name.is_empty() && !name.is_empty() {
                state.name = name.to_string();
            }
            return state.id;
        }

        let id = StateId(self.allocate_id());
        states.push(State { id, name: name.to_string(), uf });
        id
    }
}

#[async_trait]
impl MunicipalityStore for MemoryMunicipalityStore {
    async fn insert_state(&self, name: &str, uf: &str) -> Result<StateId> {
        Ok(self.find_or_insert_state(name, uf))
    }

    async fn insert_city(&self, city: NewCity) -> Result<CityId> {
        let state_id = self.find_or_insert_state("", &city.state_uf);
        let id = CityId(self.allocate_id());

        tracing::debug!(name = %city.name, uf = %city.state_uf, "Inserting city");

        self.cities.write().unwrap().push(City {
            id,
            name: city.name,
            state_id,
            population: city.population,
            area_km2: city.area_km2,
        });
        Ok(id)
    }

    async fn list_states(&self) -> Result<Vec<State>> {
        let mut states = self.states.read().unwrap().clone();
        states.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(states)
    }

    async fn list_cities(&self) -> Result<Vec<CityView>> {
        let states = self.states.read().unwrap();
        let cities = self.cities.read().unwrap();

        let mut views: Vec<CityView> = cities
            .iter()
            .filter_map(|city| {
                let state = states.iter().find(|state| state.id == city.state_id)?;
                Some(CityView::join(city, state))
            })
            .collect();

        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }

    async fn get_city(&self, id: CityId) -> Result<Option<CityView>> {
        let states = self.states.read().unwrap();
        let cities = self.cities.read().unwrap();

        Ok(cities.iter().find(|city| city.id == id).and_then(|city| {
            let state = states.iter().find(|state| state.id == city.state_id)?;
            Some(CityView::join(city, state))
        }))
    }
}
