//! Relational entities: states and the cities that belong to them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u64);

/// A federative unit, identified by its two-letter UF code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub uf: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state_id: StateId,
    pub population: Option<u64>,
    pub area_km2: Option<f64>,
}

/// Payload for inserting a city. The state is referenced by UF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCity {
    pub name: String,
    pub state_uf: String,
    pub population: Option<u64>,
    pub area_km2: Option<f64>,
}

impl NewCity {
    pub fn new(name: impl Into<String>, state_uf: impl Into<String>) -> Self {
        Self { name: name.into(), state_uf: state_uf.into(), population: None, area_km2: None }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_area(mut self, area_km2: f64) -> Self {
        self.area_km2 = Some(area_km2);
        self
    }
}

/// A city joined with its state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityView {
    pub id: CityId,
    pub name: String,
    pub state_name: String,
    pub uf: String,
    pub population: Option<u64>,
    pub area_km2: Option<f64>,
}

impl CityView {
    pub fn join(city: &City, state: &State) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
            state_name: state.name.clone(),
            uf: state.uf.clone(),
            population: city.population,
            area_km2: city.area_km2,
        }
    }

    /// Inhabitants per square kilometer, when both figures are known
    pub fn density(&self) -> Option<f64> {
        match (self.population, self.area_km2) {
            (Some(population), Some(area)) if area > 0.0 => Some(population as f64 / area),
            _ => None,
        }
    }
}
