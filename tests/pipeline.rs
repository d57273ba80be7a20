// End-to-end checks: dataset files on disk -> merge / rank / hazard summary / scenario export.

use std::{fs, path::PathBuf};

use approx::assert_relative_eq;

use greenindex::io::{
    load_ranked, merged_to_geojson, read_boundaries, read_hazard_layer, read_indicators, read_json,
    write_export, write_json,
};
use greenindex::{
    merge, simulate, summarize_areas, GiLevel, HazardLayerSpec, HazardSummary, IndicatorTable,
    JoinKey, ScenarioExport, ScenarioInput,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn square(x: f64, y: f64, size: f64) -> Value {
    json!([[[x, y], [x + size, y], [x + size, y + size], [x, y + size], [x, y]]])
}

fn feature(properties: Value, coordinates: Value) -> Value {
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": { "type": "Polygon", "coordinates": coordinates },
    })
}

fn write_geojson(dir: &TempDir, name: &str, features: Vec<Value>) -> PathBuf {
    let collection = json!({ "type": "FeatureCollection", "features": features });
    write(dir, name, &collection.to_string())
}

const INDICATORS_CSV: &str = "\
name,greenery_index,ndvi,lst,tree_canopy,flood_exposure,current_intervention
Sambag I (Pob.),0.62,0.44,32.1,0.31,Moderate,Tree planting
Tisa,0.81,0.52,30.2,0.45,Low,
Day-as,n/a,0.21,35.6,0.08,,
Kalubihan,0.62,0.30,36.4,0.12,High,Pocket parks
Tisa,0.10,0.10,30.0,0.10,Low,
";

fn boundaries(dir: &TempDir) -> PathBuf {
    write_geojson(dir, "boundaries.geojson", vec![
        feature(json!({ "name": "Sambag I" }), square(0.0, 0.0, 2.0)),
        feature(json!({ "name": "Tisa" }), square(2.0, 0.0, 2.0)),
        feature(json!({ "name": "Dayas" }), square(4.0, 0.0, 2.0)),
        feature(json!({ "name": "Ermita" }), square(6.0, 0.0, 2.0)),
    ])
}

#[test]
fn csv_dataset_ranks_with_defaults_applied() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "indicators.csv", INDICATORS_CSV);
    let rows = load_ranked(&path).unwrap();

    let names: Vec<&str> = rows.iter().map(|r| r.brgy_name.as_str()).collect();
    assert_eq!(names, vec!["Tisa", "Sambag I (Pob.)", "Kalubihan", "Tisa", "Day-as"]);
    assert_eq!(rows.iter().map(|r| r.gi_rank).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    assert_eq!(rows[0].gi_level, GiLevel::Excellent);
    assert_eq!(rows[1].gi_level, GiLevel::High);
    assert_eq!(rows[1].canopy_cover_pct, 0.31 * 100.0);

    let day_as = &rows[4];
    assert_eq!(day_as.gi_score, 0.0);
    assert_eq!(day_as.gi_level, GiLevel::Low);
    assert_eq!(day_as.flood_exposure, "Unknown");
    assert_eq!(day_as.current_intervention, "");
}

#[test]
fn json_dataset_matches_csv() {
    let dir = TempDir::new().unwrap();
    let csv = write(&dir, "indicators.csv", INDICATORS_CSV);
    let json = write(&dir, "indicators.json", &json!([
        { "name": "Sambag I (Pob.)", "greenery_index": 0.62, "ndvi": 0.44, "lst": 32.1, "tree_canopy": 0.31,
          "flood_exposure": "Moderate", "current_intervention": "Tree planting" },
        { "name": "Tisa", "greenery_index": 0.81, "ndvi": 0.52, "lst": 30.2, "tree_canopy": 0.45, "flood_exposure": "Low" },
        { "name": "Day-as", "greenery_index": "n/a", "ndvi": 0.21, "lst": 35.6, "tree_canopy": 0.08 },
        { "name": "Kalubihan", "greenery_index": 0.62, "ndvi": 0.30, "lst": 36.4, "tree_canopy": 0.12,
          "flood_exposure": "High", "current_intervention": "Pocket parks" },
        { "name": "Tisa", "greenery_index": 0.10, "ndvi": 0.10, "lst": 30.0, "tree_canopy": 0.10, "flood_exposure": "Low" },
    ]).to_string());

    let from_csv = read_indicators(&csv).unwrap();
    let from_json = read_indicators(&json).unwrap();
    assert_eq!(from_csv.len(), from_json.len());
    for (a, b) in from_csv.iter().zip(&from_json) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.flood_exposure, b.flood_exposure);
        assert_eq!(a.current_intervention, b.current_intervention);
        assert_relative_eq!(a.greenness_score, b.greenness_score, epsilon = 1e-12);
        assert_relative_eq!(a.ndvi_mean, b.ndvi_mean, epsilon = 1e-12);
        assert_relative_eq!(a.mean_lst, b.mean_lst, epsilon = 1e-12);
        assert_relative_eq!(a.canopy_cover_pct, b.canopy_cover_pct, epsilon = 1e-9);
    }
}

#[test]
fn unreadable_dataset_is_a_hard_failure() {
    let dir = TempDir::new().unwrap();
    let broken = write(&dir, "indicators.json", "[{\"name\": \"Tisa\",");
    assert!(load_ranked(&broken).is_err());
    assert!(load_ranked(&dir.path().join("missing.csv")).is_err());

    let no_name = write(&dir, "no_name.csv", "greenery_index,ndvi\n0.5,0.3\n");
    assert!(load_ranked(&no_name).is_err());
}

#[test]
fn merge_keeps_every_boundary() {
    let dir = TempDir::new().unwrap();
    let records = read_indicators(&write(&dir, "indicators.csv", INDICATORS_CSV)).unwrap();
    let areas = read_boundaries(&boundaries(&dir)).unwrap();

    let table = IndicatorTable::build(records.clone(), JoinKey::Normalized);
    let merged = merge(&areas, &table);
    assert_eq!(merged.len(), 4);
    assert_eq!(merged[0].metrics.as_ref().map(|m| m.greenness_score), Some(0.62));
    // first "Tisa" row wins
    assert_eq!(merged[1].metrics.as_ref().map(|m| m.greenness_score), Some(0.81));
    // "Dayas" only joins under the compact key
    assert!(merged[2].metrics.is_none());
    assert!(merged[3].metrics.is_none());

    let compact = merge(&areas, &IndicatorTable::build(records, JoinKey::Compact));
    assert_eq!(compact[2].metrics.as_ref().map(|m| m.name.as_str()), Some("Day-as"));

    let out = dir.path().join("merged.geojson");
    write_json(&out, &merged_to_geojson(&merged)).unwrap();
    let written: Value = read_json(&out).unwrap();
    let features = written["features"].as_array().unwrap();
    assert_eq!(features.len(), 4);
    assert!(features[3]["properties"]["gi_score"].is_null());
    assert_eq!(features[3]["properties"]["name"], "Ermita");
}

#[test]
fn hazard_layers_summarize_per_area() {
    let dir = TempDir::new().unwrap();
    let areas = read_boundaries(&boundaries(&dir)).unwrap();

    let flood_path = write_geojson(&dir, "flood5.geojson", vec![
        feature(json!({ "Var": 1 }), square(0.5, 0.5, 0.5)),
        feature(json!({ "Var": 2 }), square(1.0, 1.0, 2.0)),
        feature(json!({ "Var": 2 }), square(0.0, 1.5, 0.3)),
        // self-intersecting ring inside "Ermita"
        feature(json!({ "Var": 3 }), json!([[[6.5, 0.5], [7.5, 1.5], [7.5, 0.5], [6.5, 1.5], [6.5, 0.5]]])),
        feature(json!({ "Var": 3 }), square(20.0, 20.0, 1.0)),
    ]);
    let storm_path = write_geojson(&dir, "storm2.geojson", vec![
        feature(json!({ "HAZ": 3 }), square(3.5, 0.0, 1.0)),
        feature(json!({ "HAZ": 1.0 }), square(4.2, 0.2, 1.0)),
        feature(json!({ "HAZ": 1 }), square(5.0, 1.0, 0.5)),
    ]);

    let specs = vec![
        HazardLayerSpec::flood("floodLayer5Yr", &flood_path),
        HazardLayerSpec::storm_surge("stormLayerAdv2", &storm_path),
    ];
    let hazards: Vec<_> = specs.iter()
        .flat_map(|spec| read_hazard_layer(spec).unwrap())
        .collect();
    assert_eq!(hazards.len(), 8);

    let reports = summarize_areas(&areas, &hazards);
    assert_eq!(reports.len(), 4);

    assert_eq!(reports[0].area, "Sambag I");
    assert_eq!(reports[0].summaries, vec![
        HazardSummary { layer: "floodLayer5Yr".into(), most_common_value: 2, count: 2 },
    ]);
    assert_eq!(reports[1].summaries, vec![
        HazardSummary { layer: "floodLayer5Yr".into(), most_common_value: 2, count: 1 },
        HazardSummary { layer: "stormLayerAdv2".into(), most_common_value: 3, count: 1 },
    ]);
    assert_eq!(reports[2].summaries, vec![
        HazardSummary { layer: "stormLayerAdv2".into(), most_common_value: 1, count: 2 },
    ]);
    // the invalid polygon is the only hazard over "Ermita"
    assert!(reports[3].summaries.is_empty());
}

#[test]
fn scenario_export_is_written() {
    let dir = TempDir::new().unwrap();
    let records = read_indicators(&write(&dir, "indicators.csv", INDICATORS_CSV)).unwrap();
    let table = IndicatorTable::build(records, JoinKey::Compact);
    let baseline = table.get("Sambag I").cloned().unwrap();

    let params: ScenarioInput = read_json(&write(&dir, "params.json", r#"{ "time_horizon": 4, "ndvi_target": 0.2 }"#)).unwrap();
    let projection = simulate(&baseline, &params).unwrap();
    assert_eq!(projection.trajectory.len(), 5);
    assert_eq!(projection.trajectory[0].quantity_score, 0.44);

    let out = dir.path().join("export.json");
    write_export(&out, &ScenarioExport::now(params, baseline, projection)).unwrap();

    let written: Value = read_json(&out).unwrap();
    for key in ["timestamp", "inputs", "baseline", "results"] {
        assert!(!written[key].is_null(), "{key} missing from export");
    }
    assert_eq!(written["inputs"]["time_horizon"], 4);
    assert_eq!(written["baseline"]["name"], "Sambag I (Pob.)");
}

#[test]
fn zero_horizon_params_are_rejected() {
    let baseline = greenindex::RawIndicatorRow { name: Some("Tisa".into()), ..Default::default() }.sanitize();
    let params = ScenarioInput { time_horizon: 0, ..Default::default() };
    let err = simulate(&baseline, &params).unwrap_err();
    assert!(err.to_string().contains("time horizon"));
}
