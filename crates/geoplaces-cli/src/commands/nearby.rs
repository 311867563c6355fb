use crate::cli::NearbyArgs;
use crate::data;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::{NearbyOutput, NearbyRow};
use anyhow::{Context, Result};
use geoplaces_core::config::{CliConfigOverrides, LayeredConfig};
use geoplaces_geo::export::nearby_to_geojson;
use geoplaces_geo::{bounding_box, find_nearby_with, validate_point};
use geoplaces_store::ports::PlaceStore;

pub async fn execute(args: NearbyArgs, mut config: LayeredConfig, output: &OutputWriter) -> Result<()> {
    let center = validate_point(args.at.latitude, args.at.longitude)
        .map_err(errors::invalid_coordinates)?;

    if let Some(radius) = args.radius {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(errors::invalid_radius(radius).into());
        }
    }

    config.update_from_cli(CliConfigOverrides {
        default_radius_km: args.radius,
        distance_method: args.method,
        ..Default::default()
    });
    let radius_km = config.default_radius_km.value;
    let method = config.distance_method.value;

    let store = data::load_places(&config).await?;
    let places = store.list_places().await.context("Failed to list places")?;

    let results = find_nearby_with(&places, &center, radius_km, method);
    tracing::info!(%center, radius_km, found = results.len(), "Proximity search");

    if args.geojson {
        return output.data(&nearby_to_geojson(&results));
    }

    let result = NearbyOutput {
        center,
        radius_km,
        method,
        bounding_box: bounding_box(&center, radius_km),
        result_count: results.len(),
        results,
    };

    if output.is_json() {
        output.result(result)?;
    } else {
        output.section("Proximity Search");
        output.kv("Center", result.center);
        output.kv("Radius", format!("{} km", result.radius_km));
        output.kv("Method", format!("{:?}", result.method));
        let bbox = &result.bounding_box;
        output.kv(
            "Bounding Box",
            format!(
                "lat [{:.5}, {:.5}], lon [{:.5}, {:.5}]",
                bbox.lat_min, bbox.lat_max, bbox.lon_min, bbox.lon_max
            ),
        );

        output.section(format!("Results ({})", result.result_count));
        output.table(result.results.iter().map(NearbyRow::from).collect());
    }

    Ok(())
}
