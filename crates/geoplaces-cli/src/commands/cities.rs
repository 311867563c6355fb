use crate::cli::CitiesArgs;
use crate::data;
use crate::output::OutputWriter;
use crate::output_types::{CitiesOutput, CityEntry, CityPlacesRow, CityRow};
use anyhow::{Context, Result};
use geoplaces_core::config::LayeredConfig;
use geoplaces_geo::filter_by_city;
use geoplaces_store::ports::{MunicipalityStore, PlaceStore};

pub async fn execute(args: CitiesArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let municipalities = data::load_municipalities().await?;
    let cities = municipalities.list_cities().await.context("Failed to list cities")?;

    // Cross-reference by exact city name against the document store
    let places = if args.with_places {
        let store = data::load_places(config).await?;
        Some(store.list_places().await.context("Failed to list places")?)
    } else {
        None
    };

    let entries: Vec<CityEntry> = cities
        .into_iter()
        .map(|city| CityEntry {
            density: city.density(),
            place_count: places.as_ref().map(|p| filter_by_city(p, &city.name).len()),
            city,
        })
        .collect();

    let result = CitiesOutput {
        count: entries.len(),
        cities: entries,
    };

    if output.is_json() {
        return output.result(result);
    }

    output.section(format!("Cities ({})", result.count));
    output.table(result.cities.iter().map(CityRow::from).collect());

    if args.with_places {
        let rows: Vec<CityPlacesRow> = result
            .cities
            .iter()
            .filter_map(|entry| {
                entry.place_count.filter(|count| *count > 0).map(|place_count| CityPlacesRow {
                    name: entry.city.name.clone(),
                    uf: entry.city.uf.clone(),
                    place_count,
                })
            })
            .collect();

        output.section("Registered Places per City");
        output.table(rows);
    }

    Ok(())
}
