use geoplaces_core::models::{
    BoundingBox, CityView, DistanceMethod, GeoPoint, GeoStatistics, NearbyPlace, PlaceId,
    PlaceRecord,
};
use serde::Serialize;
use tabled::Tabled;

/// Output for distance command
#[derive(Debug, Serialize)]
pub struct DistanceOutput {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub geodesic_km: f64,
    pub haversine_km: f64,
    pub difference_km: f64,
}

/// Output for nearby command
#[derive(Debug, Serialize)]
pub struct NearbyOutput {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub method: DistanceMethod,
    pub bounding_box: BoundingBox,
    pub result_count: usize,
    pub results: Vec<NearbyPlace>,
}

/// Output for places command
#[derive(Debug, Serialize)]
pub struct PlacesOutput {
    pub count: usize,
    pub places: Vec<PlaceRecord>,
}

/// Output for add-place command
#[derive(Debug, Serialize)]
pub struct AddPlaceOutput {
    pub place: PlaceRecord,
    pub data_file: String,
}

/// Output for edit-place and remove-place commands
#[derive(Debug, Serialize)]
pub struct PlaceChangeOutput {
    pub id: PlaceId,
    pub changed: bool,
    pub data_file: String,
}

/// Output for stats command
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub city: Option<String>,
    pub has_data: bool,
    pub statistics: Option<GeoStatistics>,
}

/// Output for cities command
#[derive(Debug, Serialize)]
pub struct CitiesOutput {
    pub count: usize,
    pub cities: Vec<CityEntry>,
}

#[derive(Debug, Serialize)]
pub struct CityEntry {
    #[serde(flatten)]
    pub city: CityView,
    pub density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_count: Option<usize>,
}

/// Output for bbox command
#[derive(Debug, Serialize)]
pub struct BoundingBoxOutput {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub bounding_box: BoundingBox,
    pub constrains_longitude: bool,
}

/// Output for dms command
#[derive(Debug, Serialize)]
pub struct DmsOutput {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub direction: String,
    pub decimal: f64,
}

/// Output for validate command
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub latitude: f64,
    pub longitude: f64,
    pub valid: bool,
}

/// One configuration entry for the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

#[derive(Tabled)]
pub struct PlaceRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "City")]
    pub city: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Coordinates")]
    pub coordinates: String,
}

impl From<&PlaceRecord> for PlaceRow {
    fn from(place: &PlaceRecord) -> Self {
        Self {
            name: place.name.clone(),
            city: place.city.clone(),
            category: place.category.clone(),
            coordinates: place
                .coordinates
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Tabled)]
pub struct NearbyRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "City")]
    pub city: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Distance (km)")]
    pub distance_km: String,
}

impl From<&NearbyPlace> for NearbyRow {
    fn from(nearby: &NearbyPlace) -> Self {
        Self {
            name: nearby.place.name.clone(),
            city: nearby.place.city.clone(),
            category: nearby.place.category.clone(),
            distance_km: format!("{:.2}", nearby.distance_km),
        }
    }
}

#[derive(Tabled)]
pub struct CityRow {
    #[tabled(rename = "City")]
    pub name: String,
    #[tabled(rename = "State")]
    pub state: String,
    #[tabled(rename = "Population")]
    pub population: String,
    #[tabled(rename = "Area (km²)")]
    pub area: String,
    #[tabled(rename = "Density (/km²)")]
    pub density: String,
}

impl From<&CityEntry> for CityRow {
    fn from(entry: &CityEntry) -> Self {
        Self {
            name: entry.city.name.clone(),
            state: format!("{} ({})", entry.city.state_name, entry.city.uf),
            population: entry
                .city
                .population
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            area: entry
                .city
                .area_km2
                .map(|a| format!("{:.3}", a))
                .unwrap_or_else(|| "-".to_string()),
            density: entry
                .density
                .map(|d| format!("{:.1}", d))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Tabled)]
pub struct CityPlacesRow {
    #[tabled(rename = "City")]
    pub name: String,
    #[tabled(rename = "UF")]
    pub uf: String,
    #[tabled(rename = "Places")]
    pub place_count: usize,
}
