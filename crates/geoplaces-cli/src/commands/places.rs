use crate::cli::PlacesArgs;
use crate::data;
use crate::output::OutputWriter;
use crate::output_types::{PlaceRow, PlacesOutput};
use anyhow::{Context, Result};
use geoplaces_core::config::LayeredConfig;
use geoplaces_core::models::PlaceRecord;
use geoplaces_geo::export::places_to_geojson;
use geoplaces_store::ports::PlaceStore;

pub async fn execute(args: PlacesArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let store = data::load_places(config).await?;

    // The store answers one filter at a time; the rest are applied here
    let mut places = match (&args.search, &args.city, &args.category) {
        (Some(term), _, _) => store.search_places(term).await,
        (None, Some(city), _) => store.places_by_city(city).await,
        (None, None, Some(category)) => store.places_by_category(category).await,
        (None, None, None) => store.list_places().await,
    }
    .context("Failed to query places")?;

    if let Some(city) = &args.city {
        places.retain(|p| contains_ignore_case(&p.city, city));
    }
    if let Some(category) = &args.category {
        places.retain(|p| contains_ignore_case(&p.category, category));
    }

    if args.geojson {
        return output.data(&places_to_geojson(&places));
    }

    let result = PlacesOutput {
        count: places.len(),
        places,
    };

    if output.is_json() {
        output.result(result)?;
    } else {
        output.section(format!("Places ({})", result.count));
        output.table(result.places.iter().map(PlaceRow::from).collect());
        print_details(&result.places, output);
    }

    Ok(())
}

fn print_details(places: &[PlaceRecord], output: &OutputWriter) {
    let unlocated = places.iter().filter(|p| p.coordinates.is_none()).count();
    if unlocated > 0 {
        output.info(format!("{} place(s) have no coordinates", unlocated));
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
