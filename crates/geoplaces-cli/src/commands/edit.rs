//! Commands that change the place data file

use crate::cli::{AddPlaceArgs, EditPlaceArgs, RemovePlaceArgs};
use crate::data;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::{AddPlaceOutput, PlaceChangeOutput};
use anyhow::{Context, Result};
use geoplaces_core::config::LayeredConfig;
use geoplaces_core::models::{NewPlace, PlaceId, PlaceUpdate};
use geoplaces_geo::validate_point;
use geoplaces_store::ports::PlaceStore;
use std::path::Path;

pub async fn add(args: AddPlaceArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let location = validate_point(args.at.latitude, args.at.longitude)
        .map_err(errors::invalid_coordinates)?;
    let (path, store) = data::open_place_file(config).await?;

    let id = store
        .insert_place(NewPlace {
            name: args.name,
            city: args.city,
            latitude: location.latitude,
            longitude: location.longitude,
            description: args.description,
            category: args.category,
            address: args.address,
        })
        .await
        .context("Failed to insert place")?;
    data::save_places(&path, &store)?;

    let place = store
        .get_place(id)
        .await
        .context("Failed to read back place")?
        .ok_or_else(|| errors::place_not_found(id, &path))?;

    let result = AddPlaceOutput {
        place,
        data_file: path.display().to_string(),
    };

    if output.is_json() {
        return output.result(result);
    }

    output.success(format!("Added '{}' to {}", result.place.name, result.data_file));
    output.kv("ID", id);
    if let Some(coordinates) = result.place.coordinates {
        output.kv("Coordinates", coordinates);
    }

    Ok(())
}

pub async fn edit(args: EditPlaceArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let coordinates = args
        .at
        .map(|at| validate_point(at.latitude, at.longitude))
        .transpose()
        .map_err(errors::invalid_coordinates)?;
    let (path, store) = data::open_place_file(config).await?;

    if store.get_place(args.id).await.context("Failed to look up place")?.is_none() {
        return Err(errors::place_not_found(args.id, &path).into());
    }

    let update = PlaceUpdate {
        name: args.name,
        city: args.city,
        coordinates,
        description: args.description,
        category: args.category,
        address: args.address,
        active: None,
    };
    let changed = store.update_place(args.id, update).await.context("Failed to update place")?;
    if changed {
        data::save_places(&path, &store)?;
    }

    report_change(args.id, changed, &path, "Updated", output)
}

pub async fn remove(args: RemovePlaceArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let (path, store) = data::open_place_file(config).await?;

    if !store.deactivate_place(args.id).await.context("Failed to deactivate place")? {
        return Err(errors::place_not_found(args.id, &path).into());
    }
    data::save_places(&path, &store)?;

    report_change(args.id, true, &path, "Deactivated", output)
}

fn report_change(id: PlaceId, changed: bool, path: &Path, verb: &str, output: &OutputWriter) -> Result<()> {
    let result = PlaceChangeOutput {
        id,
        changed,
        data_file: path.display().to_string(),
    };

    if output.is_json() {
        return output.result(result);
    }

    if changed {
        output.success(format!("{} place {}", verb, id));
    } else {
        output.info(format!("Place {} already matches; nothing written", id));
    }
    Ok(())
}
