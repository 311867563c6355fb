//! Loading configuration and place data for a command run

use crate::cli::Cli;
use crate::errors;
use anyhow::{Context, Result};
use geoplaces_core::config::{CliConfigOverrides, LayeredConfig};
use geoplaces_core::models::PlaceRecord;
use geoplaces_store::memory::{MemoryMunicipalityStore, MemoryPlaceStore};
use geoplaces_store::ports::PlaceStore;
use geoplaces_store::sample::{seed_municipalities, seed_places};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when --config is absent
pub const DEFAULT_CONFIG_FILE: &str = "geoplaces.toml";

/// Resolve the layered configuration for this invocation
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    let file = cli
        .config
        .clone()
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()));

    if let Some(path) = file {
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        data_file: cli.data.clone(),
        ..Default::default()
    });

    Ok(config)
}

/// A place store filled from the configured data file or the sample set
pub async fn load_places(config: &LayeredConfig) -> Result<MemoryPlaceStore> {
    let store = MemoryPlaceStore::new();

    match &config.data_file.value {
        Some(path) => {
            let records = read_places_file(path)?;
            let count = records.len();
            for record in records {
                store.import_place(record).await.context("Failed to store place")?;
            }
            tracing::debug!(count, path = %path.display(), "Loaded places from file");
        }
        None => {
            seed_places(&store).await.context("Failed to load sample places")?;
        }
    }

    Ok(store)
}

/// The configured data file and a store holding its records, for commands
/// that change places. A missing file starts an empty set.
pub async fn open_place_file(config: &LayeredConfig) -> Result<(PathBuf, MemoryPlaceStore)> {
    let path = config
        .data_file
        .value
        .clone()
        .ok_or_else(errors::data_file_required)?;

    let store = MemoryPlaceStore::new();
    if path.exists() {
        for record in read_places_file(&path)? {
            store.import_place(record).await.context("Failed to store place")?;
        }
    }

    Ok((path, store))
}

/// Write every record of the store back to the data file, deactivated ones included
pub fn save_places(path: &Path, store: &MemoryPlaceStore) -> Result<()> {
    let records = store.records();
    let content = serde_json::to_string_pretty(&records)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write places to {}", path.display()))?;

    tracing::debug!(count = records.len(), path = %path.display(), "Saved places");
    Ok(())
}

/// The municipal data set
pub async fn load_municipalities() -> Result<MemoryMunicipalityStore> {
    let store = MemoryMunicipalityStore::new();
    seed_municipalities(&store)
        .await
        .context("Failed to load sample municipalities")?;
    Ok(store)
}

fn read_places_file(path: &Path) -> Result<Vec<PlaceRecord>> {
    let content =
        fs::read_to_string(path).map_err(|e| errors::data_file_unreadable(path, e))?;
    let records: Vec<PlaceRecord> =
        serde_json::from_str(&content).map_err(|e| errors::data_file_unreadable(path, e))?;
    Ok(records)
}
