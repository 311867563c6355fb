//! Integration tests for the geoplaces binary
//!
//! These tests run the built binary and check its JSON output and exit codes.

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    let workdir = tempfile::tempdir().expect("Failed to create temp dir");

    Command::new(env!("CARGO_BIN_EXE_geoplaces"))
        .args(args)
        .current_dir(workdir.path())
        .env_remove("GEOPLACES_RADIUS_KM")
        .env_remove("GEOPLACES_DISTANCE_METHOD")
        .env_remove("GEOPLACES_DATA_FILE")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn run_json(args: &[&str]) -> Value {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: Value = serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert_eq!(parsed["status"], "success");
    parsed["data"].clone()
}

#[test]
fn test_distance_reports_both_models() {
    let data = run_json(&["--json", "distance", "--from", "-7.11532,-34.861", "--to", "-8.04756,-34.877"]);

    let geodesic = data["geodesic_km"].as_f64().unwrap();
    let haversine = data["haversine_km"].as_f64().unwrap();
    assert!(geodesic > 100.0 && geodesic < 107.0);
    assert!(data["difference_km"].as_f64().unwrap() < 1.0);
    assert!((geodesic - haversine).abs() < 1.0);
}

#[test]
fn test_nearby_over_sample_places() {
    let data = run_json(&["nearby", "--at", "-7.11532,-34.861", "--radius", "10", "--json"]);

    assert_eq!(data["result_count"], 3);
    let results = data["results"].as_array().unwrap();
    assert_eq!(results[0]["name"], "Praça da Independência");
    assert_eq!(results[0]["distance_km"].as_f64().unwrap(), 0.0);

    let distances: Vec<f64> = results.iter().map(|r| r["distance_km"].as_f64().unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_nearby_uses_configured_default_radius() {
    let data = run_json(&["--json", "nearby", "--at", "-8.04756,-34.877"]);

    assert_eq!(data["radius_km"].as_f64().unwrap(), 10.0);
    assert_eq!(data["method"], "geodesic");
    // Boa Viagem, the farthest Recife place, is about 8.4 km from Marco Zero
    assert_eq!(data["result_count"], 3);
}

#[test]
fn test_nearby_geojson_output() {
    let output = run(&["nearby", "--at", "-3.73111,-38.5264", "--radius", "1", "--geojson"]);
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["type"], "FeatureCollection");
    let features = parsed["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["geometry"]["coordinates"][0].as_f64().unwrap(), -38.5264);
}

#[test]
fn test_invalid_center_is_an_error() {
    let output = run(&["nearby", "--at", "95,0"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid coordinates"), "stderr: {}", stderr);
}

#[test]
fn test_negative_radius_is_an_error() {
    let output = run(&["bbox", "--at", "0,0", "--radius", "-1"]);
    assert!(!output.status.success());
}

#[test]
fn test_places_filters() {
    let data = run_json(&["--json", "places", "--city", "recife"]);
    assert_eq!(data["count"], 3);

    let data = run_json(&["--json", "places", "--city", "Recife", "--category", "comércio"]);
    assert_eq!(data["count"], 1);
    assert_eq!(data["places"][0]["name"], "Mercado de São José");

    let data = run_json(&["--json", "places", "--search", "artesanato"]);
    assert_eq!(data["count"], 2);
}

#[test]
fn test_stats_without_data() {
    let data = run_json(&["--json", "stats", "--city", "Natal"]);

    assert_eq!(data["has_data"], false);
    assert!(data["statistics"].is_null());
}

#[test]
fn test_stats_for_city() {
    let data = run_json(&["--json", "stats", "--city", "Fortaleza"]);

    assert_eq!(data["has_data"], true);
    assert_eq!(data["statistics"]["total_places"], 2);
    assert!((data["statistics"]["centroid"]["latitude"].as_f64().unwrap() + 3.73111).abs() < 1e-9);
}

#[test]
fn test_cities_with_places() {
    let data = run_json(&["--json", "cities", "--with-places"]);

    let cities = data["cities"].as_array().unwrap();
    assert_eq!(cities.len(), 10);

    let joao_pessoa = cities.iter().find(|c| c["name"] == "João Pessoa").unwrap();
    assert_eq!(joao_pessoa["uf"], "PB");
    assert_eq!(joao_pessoa["place_count"], 3);

    let natal = cities.iter().find(|c| c["name"] == "Natal").unwrap();
    assert_eq!(natal["place_count"], 0);
}

#[test]
fn test_cities_without_cross_reference_omit_counts() {
    let data = run_json(&["--json", "cities"]);
    let cities = data["cities"].as_array().unwrap();
    assert!(cities.iter().all(|c| c.get("place_count").is_none()));
}

#[test]
fn test_dms_conversion() {
    let data = run_json(&["--json", "dms", "7", "6", "55.2", "s"]);

    assert_eq!(data["direction"], "S");
    assert!((data["decimal"].as_f64().unwrap() + 7.1153333).abs() < 1e-6);
}

#[test]
fn test_dms_rejects_unknown_direction() {
    let output = run(&["dms", "7", "6", "55.2", "X"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid direction"), "stderr: {}", stderr);
}

#[test]
fn test_validate_reports_without_failing() {
    let data = run_json(&["--json", "validate", "--at", "90,-180"]);
    assert_eq!(data["valid"], true);

    let data = run_json(&["--json", "validate", "--at", "-34.861,-187.1"]);
    assert_eq!(data["valid"], false);
}

#[test]
fn test_data_file_replaces_sample_set() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Farol de Mãe Luíza", "city": "Natal", "category": "Ponto Turístico",
              "coordinates": {{"latitude": -5.7906, "longitude": -35.1872}}}},
            {{"name": "Antigo", "city": "Natal", "active": false,
              "coordinates": {{"latitude": -5.79, "longitude": -35.19}}}}
        ]"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let data = run_json(&["--json", "--data", path, "places"]);
    assert_eq!(data["count"], 1);
    assert_eq!(data["places"][0]["name"], "Farol de Mãe Luíza");

    let data = run_json(&["--json", "--data", path, "stats", "--city", "natal"]);
    assert_eq!(data["statistics"]["total_places"], 1);
}

#[test]
fn test_unreadable_data_file_is_an_error() {
    let output = run(&["--data", "/nonexistent/places.json", "places"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot load places"), "stderr: {}", stderr);
}

#[test]
fn test_config_file_sets_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "default_radius_km = 2.5\ndistance_method = \"haversine\"\n").unwrap();
    let path = file.path().to_str().unwrap();

    let data = run_json(&["--json", "--config", path, "config"]);
    let entries = data.as_array().unwrap();
    let radius = entries.iter().find(|e| e["key"] == "default_radius_km").unwrap();
    assert_eq!(radius["value"], "2.5 km");
    assert_eq!(radius["source"], "File");

    let data = run_json(&["--json", "--config", path, "nearby", "--at", "-7.11532,-34.861"]);
    assert_eq!(data["radius_km"].as_f64().unwrap(), 2.5);
    assert_eq!(data["method"], "haversine");
    assert_eq!(data["result_count"], 2);
}

#[test]
fn test_add_edit_remove_place_in_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("places.json");
    let path = path.to_str().unwrap();

    let data = run_json(&[
        "--json", "--data", path, "add-place",
        "--name", "Ponta do Seixas", "--city", "João Pessoa",
        "--at", "-7.1481,-34.7956", "--category", "Praia",
    ]);
    let id = data["place"]["id"].as_str().unwrap().to_string();
    assert_eq!(data["place"]["active"], true);
    assert!(data["place"]["registered_at"].is_string());

    let data = run_json(&["--json", "--data", path, "places"]);
    assert_eq!(data["count"], 1);
    assert_eq!(data["places"][0]["id"], id.as_str());

    let data = run_json(&["--json", "--data", path, "edit-place", &id, "--category", "Ponto Turístico"]);
    assert_eq!(data["changed"], true);
    let data = run_json(&["--json", "--data", path, "edit-place", &id, "--category", "Ponto Turístico"]);
    assert_eq!(data["changed"], false);

    let data = run_json(&["--json", "--data", path, "places", "--category", "turístico"]);
    assert_eq!(data["count"], 1);

    let data = run_json(&["--json", "--data", path, "remove-place", &id]);
    assert_eq!(data["changed"], true);

    let data = run_json(&["--json", "--data", path, "places"]);
    assert_eq!(data["count"], 0);

    // Soft delete keeps the record in the file
    let stored: Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["active"], false);

    let output = run(&["--data", path, "remove-place", &id]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No active place"));
}

#[test]
fn test_add_place_requires_data_file() {
    let output = run(&["add-place", "--name", "Farol", "--city", "Natal", "--at", "-5.79,-35.19"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("needs a data file"), "stderr: {}", stderr);
}

#[test]
fn test_add_place_rejects_invalid_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("places.json");

    let output = run(&[
        "--data", path.to_str().unwrap(), "add-place",
        "--name", "Farol", "--city", "Natal", "--at", "-35.19,-195.0",
    ]);

    assert!(!output.status.success());
    assert!(!path.exists());
}
