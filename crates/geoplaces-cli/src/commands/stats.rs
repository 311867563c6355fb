use crate::cli::StatsArgs;
use crate::data;
use crate::output::OutputWriter;
use crate::output_types::StatsOutput;
use anyhow::{Context, Result};
use geoplaces_core::config::LayeredConfig;
use geoplaces_geo::{filter_by_city, geo_statistics};
use geoplaces_store::ports::PlaceStore;

pub async fn execute(args: StatsArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let store = data::load_places(config).await?;
    let mut places = store.list_places().await.context("Failed to list places")?;

    if let Some(city) = &args.city {
        places = filter_by_city(&places, city);
    }

    let statistics = geo_statistics(&places);
    let result = StatsOutput {
        city: args.city,
        has_data: statistics.is_some(),
        statistics,
    };

    if output.is_json() {
        return output.result(result);
    }

    let title = match &result.city {
        Some(city) => format!("Geographic Statistics: {}", city),
        None => "Geographic Statistics".to_string(),
    };
    output.section(title);

    match &result.statistics {
        Some(stats) => {
            output.kv("Places", stats.total_places);
            output.kv("With Coordinates", stats.located_places);
            output.kv("Centroid", stats.centroid);
            output.kv(
                "Latitude",
                format!(
                    "mean {:.6}, min {:.6}, max {:.6}",
                    stats.mean_latitude, stats.min_latitude, stats.max_latitude
                ),
            );
            output.kv(
                "Longitude",
                format!(
                    "mean {:.6}, min {:.6}, max {:.6}",
                    stats.mean_longitude, stats.min_longitude, stats.max_longitude
                ),
            );
        }
        None => output.info("No geographic data available"),
    }

    Ok(())
}
