use console::style;
use geoplaces_core::models::PlaceId;
use geoplaces_core::GeoplacesError;
use std::fmt;
use std::path::Path;

/// User-facing error with suggestions for how to recover
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Out-of-range coordinates given on the command line
pub fn invalid_coordinates(err: GeoplacesError) -> CliError {
    CliError::new(err.to_string())
        .with_suggestion("Pass coordinates as LAT,LON in decimal degrees, e.g. --at=-7.11532,-34.861")
        .with_suggestion("Latitude comes first; swapped values often fall outside [-90, 90]")
}

pub fn invalid_radius(radius_km: f64) -> CliError {
    CliError::new(GeoplacesError::InvalidRadius { radius_km }.to_string())
        .with_suggestion("Use a non-negative distance in kilometers, e.g. --radius 10")
}

pub fn invalid_direction(err: GeoplacesError) -> CliError {
    CliError::new(err.to_string())
        .with_suggestion("Use N or S for latitudes and E or W for longitudes")
}

pub fn data_file_unreadable(path: &Path, reason: impl fmt::Display) -> CliError {
    CliError::new(format!("Cannot load places from {}", path.display()))
        .with_context(reason.to_string())
        .with_suggestion("The data file must hold a JSON array of place records")
        .with_suggestion("Omit --data to use the built-in sample places")
}

pub fn data_file_required() -> CliError {
    CliError::new("Editing places needs a data file")
        .with_context("The built-in sample places are read-only")
        .with_suggestion("Pass --data places.json (the file is created if missing)")
        .with_suggestion("Or set data_file in geoplaces.toml or GEOPLACES_DATA_FILE")
}

pub fn place_not_found(id: PlaceId, path: &Path) -> CliError {
    CliError::new(format!("No active place with ID {}", id))
        .with_context(format!("Searched {}", path.display()))
        .with_suggestion("List places with 'geoplaces places --json' to see their IDs")
}
