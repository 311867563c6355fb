//! Standalone coordinate utilities that need no stored data

use crate::cli::{BboxArgs, DmsArgs, ValidateArgs};
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::{BoundingBoxOutput, DmsOutput, ValidateOutput};
use anyhow::Result;
use geoplaces_geo::{bounding_box, dms_to_decimal, validate_coordinates, validate_point};

pub fn bbox(args: BboxArgs, output: &OutputWriter) -> Result<()> {
    let center = validate_point(args.at.latitude, args.at.longitude)
        .map_err(errors::invalid_coordinates)?;
    if !(args.radius.is_finite() && args.radius >= 0.0) {
        return Err(errors::invalid_radius(args.radius).into());
    }

    let bbox = bounding_box(&center, args.radius);
    let result = BoundingBoxOutput {
        center,
        radius_km: args.radius,
        bounding_box: bbox,
        constrains_longitude: bbox.has_longitude_constraint(),
    };

    if output.is_json() {
        return output.result(result);
    }

    output.section("Bounding Box");
    output.kv("Center", result.center);
    output.kv("Radius", format!("{} km", result.radius_km));
    output.kv("Latitude", format!("[{:.6}, {:.6}]", bbox.lat_min, bbox.lat_max));
    if result.constrains_longitude {
        output.kv("Longitude", format!("[{:.6}, {:.6}]", bbox.lon_min, bbox.lon_max));
    } else {
        output.kv("Longitude", "unconstrained");
        output.warning("Box reaches a pole; only latitude is constrained");
    }

    Ok(())
}

pub fn dms(args: DmsArgs, output: &OutputWriter) -> Result<()> {
    let decimal = dms_to_decimal(args.degrees, args.minutes, args.seconds, &args.direction)
        .map_err(errors::invalid_direction)?;

    let result = DmsOutput {
        degrees: args.degrees,
        minutes: args.minutes,
        seconds: args.seconds,
        direction: args.direction.trim().to_uppercase(),
        decimal,
    };

    if output.is_json() {
        return output.result(result);
    }

    output.kv(
        format!(
            "{}° {}' {}\" {}",
            result.degrees, result.minutes, result.seconds, result.direction
        ),
        format!("{:.6}", result.decimal),
    );

    Ok(())
}

pub fn validate(args: ValidateArgs, output: &OutputWriter) -> Result<()> {
    let result = ValidateOutput {
        latitude: args.at.latitude,
        longitude: args.at.longitude,
        valid: validate_coordinates(args.at.latitude, args.at.longitude),
    };

    if output.is_json() {
        return output.result(result);
    }

    if result.valid {
        output.success(format!("{} is a valid coordinate pair", args.at));
    } else {
        output.warning(format!(
            "{} is out of range: latitude must be in [-90, 90] and longitude in [-180, 180]",
            args.at
        ));
    }

    Ok(())
}
