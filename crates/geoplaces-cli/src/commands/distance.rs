use crate::cli::DistanceArgs;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::DistanceOutput;
use anyhow::Result;
use geoplaces_geo::{distance, haversine_distance, validate_point};

pub fn execute(args: DistanceArgs, output: &OutputWriter) -> Result<()> {
    let from = validate_point(args.from.latitude, args.from.longitude)
        .map_err(errors::invalid_coordinates)?;
    let to = validate_point(args.to.latitude, args.to.longitude)
        .map_err(errors::invalid_coordinates)?;

    let geodesic_km = distance(&from, &to);
    let haversine_km = haversine_distance(&from, &to);

    let result = DistanceOutput {
        from,
        to,
        geodesic_km,
        haversine_km,
        difference_km: (geodesic_km - haversine_km).abs(),
    };

    if output.is_json() {
        output.result(result)?;
    } else {
        output.section("Distance");
        output.kv("From", result.from);
        output.kv("To", result.to);
        output.kv("Geodesic (WGS 84)", format!("{:.3} km", result.geodesic_km));
        output.kv("Haversine (sphere)", format!("{:.3} km", result.haversine_km));
        output.kv("Difference", format!("{:.3} km", result.difference_km));
    }

    Ok(())
}
