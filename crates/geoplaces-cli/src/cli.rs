use clap::{Parser, Subcommand};
use geoplaces_core::models::{DistanceMethod, GeoPoint, PlaceId};
use std::path::PathBuf;

/// GeoPlaces - points of interest and municipal data with geographic queries
#[derive(Parser, Debug)]
#[command(name = "geoplaces")]
#[command(about = "Points of interest and municipal data with geographic queries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// JSON file with an array of place records (defaults to the built-in sample set)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// TOML configuration file (defaults to ./geoplaces.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure the distance between two points with both models
    Distance(DistanceArgs),

    /// Find places within a radius of a point
    Nearby(NearbyArgs),

    /// List places, optionally filtered
    Places(PlacesArgs),

    /// Coordinate statistics over the stored places
    Stats(StatsArgs),

    /// List cities with their states
    Cities(CitiesArgs),

    /// Approximate bounding box around a point
    Bbox(BboxArgs),

    /// Convert degrees, minutes and seconds to decimal degrees
    Dms(DmsArgs),

    /// Check whether a coordinate pair is within range
    Validate(ValidateArgs),

    /// Register a new place in the data file
    AddPlace(AddPlaceArgs),

    /// Change fields of a place in the data file
    EditPlace(EditPlaceArgs),

    /// Deactivate a place in the data file
    RemovePlace(RemovePlaceArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
pub struct DistanceArgs {
    /// Start point as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub from: GeoPoint,

    /// End point as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub to: GeoPoint,
}

#[derive(Parser, Debug)]
pub struct NearbyArgs {
    /// Search center as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub at: GeoPoint,

    /// Search radius in kilometers (defaults to the configured radius)
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<f64>,

    /// Distance model: geodesic or haversine
    #[arg(long, value_parser = parse_method)]
    pub method: Option<DistanceMethod>,

    /// Print the results as a GeoJSON FeatureCollection
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct PlacesArgs {
    /// Only places whose city contains this text
    #[arg(long)]
    pub city: Option<String>,

    /// Only places whose category contains this text
    #[arg(long)]
    pub category: Option<String>,

    /// Free-text search over name, description and category
    #[arg(long)]
    pub search: Option<String>,

    /// Print the places as a GeoJSON FeatureCollection
    #[arg(long)]
    pub geojson: bool,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Restrict statistics to one city (exact name, case-insensitive)
    #[arg(long)]
    pub city: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CitiesArgs {
    /// Include the number of registered places in each city
    #[arg(long)]
    pub with_places: bool,
}

#[derive(Parser, Debug)]
pub struct BboxArgs {
    /// Box center as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub at: GeoPoint,

    /// Radius in kilometers
    #[arg(long, allow_hyphen_values = true)]
    pub radius: f64,
}

#[derive(Parser, Debug)]
pub struct DmsArgs {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,

    /// Hemisphere: N, S, E or W
    pub direction: String,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Coordinates as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub at: GeoPoint,
}

#[derive(Parser, Debug)]
pub struct AddPlaceArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub city: String,

    /// Location as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub at: GeoPoint,

    #[arg(long, default_value = "")]
    pub category: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub address: String,
}

#[derive(Parser, Debug)]
pub struct EditPlaceArgs {
    /// Place ID
    pub id: PlaceId,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// New location as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub at: Option<GeoPoint>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RemovePlaceArgs {
    /// Place ID
    pub id: PlaceId,
}

/// Parse `LAT,LON`. Range checks are left to the commands.
fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{}'", s))?;

    let latitude = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid latitude '{}': {}", lat.trim(), e))?;
    let longitude = lon
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid longitude '{}': {}", lon.trim(), e))?;

    Ok(GeoPoint::new(latitude, longitude))
}

fn parse_method(s: &str) -> Result<DistanceMethod, String> {
    s.parse().map_err(|e: geoplaces_core::GeoplacesError| e.to_string())
}
