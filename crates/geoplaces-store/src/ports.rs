use async_trait::async_trait;
use geoplaces_core::error::Result;
use geoplaces_core::models::{
    CityId, CityView, NewCity, NewPlace, PlaceId, PlaceRecord, PlaceUpdate, State, StateId,
};

/// Port for the place document store
///
/// Query operations only ever return active places.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Insert a place; it is stamped with a new id and registration time
    async fn insert_place(&self, place: NewPlace) -> Result<PlaceId>;

    /// Store a complete record as-is, assigning an id when it has none
    async fn import_place(&self, place: PlaceRecord) -> Result<PlaceId>;

    /// Get an active place by ID
    async fn get_place(&self, id: PlaceId) -> Result<Option<PlaceRecord>>;

    /// List all active places in insertion order
    async fn list_places(&self) -> Result<Vec<PlaceRecord>>;

    /// Active places whose city contains `city`, ignoring case
    async fn places_by_city(&self, city: &str) -> Result<Vec<PlaceRecord>>;

    /// Active places whose category contains `category`, ignoring case
    async fn places_by_category(&self, category: &str) -> Result<Vec<PlaceRecord>>;

    /// Active places whose name, description or category contains `term`, ignoring case
    async fn search_places(&self, term: &str) -> Result<Vec<PlaceRecord>>;

    /// Apply a partial update. Returns true if the place exists and changed.
    async fn update_place(&self, id: PlaceId, update: PlaceUpdate) -> Result<bool>;

    /// Soft delete. Returns true if the place was active.
    async fn deactivate_place(&self, id: PlaceId) -> Result<bool>;
}

/// Port for the relational store of states and cities
#[async_trait]
pub trait MunicipalityStore: Send + Sync {
    /// Insert a state. An existing UF returns the existing ID.
    async fn insert_state(&self, name: &str, uf: &str) -> Result<StateId>;

    /// Insert a city, creating its state by UF when it does not exist yet
    async fn insert_city(&self, city: NewCity) -> Result<CityId>;

    /// All states ordered by name
    async fn list_states(&self) -> Result<Vec<State>>;

    /// All cities joined with their state, ordered by city name
    async fn list_cities(&self) -> Result<Vec<CityView>>;

    /// A single city joined with its state
    async fn get_city(&self, id: CityId) -> Result<Option<CityView>>;
}
