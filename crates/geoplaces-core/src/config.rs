use crate::error::{GeoplacesError, Result};
use crate::models::DistanceMethod;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default search radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for GeoPlaces
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub default_radius_km: ConfigValue<f64>,
    pub distance_method: ConfigValue<DistanceMethod>,
    pub data_file: ConfigValue<Option<PathBuf>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            default_radius_km: ConfigValue::new(DEFAULT_RADIUS_KM, ConfigSource::Default),
            distance_method: ConfigValue::new(DistanceMethod::Geodesic, ConfigSource::Default),
            data_file: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GeoplacesError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeoplacesError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(radius) = file_config.default_radius_km {
            let radius = check_radius("default_radius_km", radius)?;
            self.default_radius_km.update(radius, ConfigSource::File);
        }

        if let Some(method) = file_config.distance_method {
            self.distance_method.update(method, ConfigSource::File);
        }

        if let Some(data_file) = file_config.data_file {
            self.data_file.update(Some(data_file), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GEOPLACES_RADIUS_KM
        if let Ok(radius_str) = env::var("GEOPLACES_RADIUS_KM") {
            match parse_radius(&radius_str) {
                Ok(radius) => self.default_radius_km.update(radius, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOPLACES_RADIUS_KM value '{}': expected a non-negative number of kilometers",
                    radius_str
                ),
            }
        }

        // GEOPLACES_DISTANCE_METHOD
        if let Ok(method_str) = env::var("GEOPLACES_DISTANCE_METHOD") {
            match parse_distance_method(&method_str) {
                Ok(method) => self.distance_method.update(method, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOPLACES_DISTANCE_METHOD value '{}': expected geodesic or haversine",
                    method_str
                ),
            }
        }

        // GEOPLACES_DATA_FILE
        if let Ok(path) = env::var("GEOPLACES_DATA_FILE") {
            if path.trim().is_empty() {
                tracing::warn!("Ignoring empty GEOPLACES_DATA_FILE");
            } else {
                self.data_file.update(Some(PathBuf::from(path)), ConfigSource::Environment);
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(radius) = overrides.default_radius_km {
            self.default_radius_km.update(radius, ConfigSource::Cli);
        }

        if let Some(method) = overrides.distance_method {
            self.distance_method.update(method, ConfigSource::Cli);
        }

        if let Some(data_file) = overrides.data_file {
            self.data_file.update(Some(data_file), ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "default_radius_km".to_string(),
            (format!("{} km", self.default_radius_km.value), self.default_radius_km.source),
        );

        map.insert(
            "distance_method".to_string(),
            (format!("{:?}", self.distance_method.value), self.distance_method.source),
        );

        let data_file = match &self.data_file.value {
            Some(path) => path.display().to_string(),
            None => "(built-in sample data)".to_string(),
        };
        map.insert("data_file".to_string(), (data_file, self.data_file.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    default_radius_km: Option<f64>,
    distance_method: Option<DistanceMethod>,
    data_file: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub default_radius_km: Option<f64>,
    pub distance_method: Option<DistanceMethod>,
    pub data_file: Option<PathBuf>,
}

/// Parse distance method from string
pub fn parse_distance_method(s: &str) -> Result<DistanceMethod> {
    s.parse()
}

/// Parse a search radius in kilometers
pub fn parse_radius(s: &str) -> Result<f64> {
    let radius = s.trim().parse::<f64>().map_err(|e| GeoplacesError::ConfigInvalid {
        key: "default_radius_km".to_string(),
        reason: format!("Invalid radius '{}': {}", s, e),
    })?;
    check_radius("default_radius_km", radius)
}

fn check_radius(key: &str, radius: f64) -> Result<f64> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(GeoplacesError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("Radius must be a finite, non-negative number, got {}", radius),
        })
    }
}
