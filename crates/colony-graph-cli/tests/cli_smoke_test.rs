use std::{fs, path::PathBuf};

use tempfile::tempdir;

use colony_graph_cli::{Args, CliError, run_with_output};

fn demos_path() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(inputs: Vec<PathBuf>, catalog: PathBuf, config: Option<PathBuf>) -> Args {
    Args {
        inputs: inputs
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect(),
        catalog: catalog.to_string_lossy().to_string(),
        config: config.map(|path| path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_colonies() {
    let demos = demos_path();
    let args = args(
        vec![demos.join("tanoo.json")],
        demos.join("catalog.json"),
        Some(demos.join("config.toml")),
    );

    let mut out = Vec::new();
    if let Err(e) = run_with_output(&args, &mut out) {
        panic!("Demo colonies failed: {e}");
    }

    let summary = String::from_utf8(out).expect("summary is UTF-8");
    assert!(summary.contains("Colony Tanoo I (barren"));
    assert!(summary.contains("Colony Tanoo II (barren"));
    assert!(summary.contains("link graph: 7 nodes, 6 edges"));
    assert!(summary.contains("route graph: 7 nodes, 9 edges, 2 rank groups"));
    assert!(summary.contains("align 1002 -> 1003 weight 9999"));
    assert!(summary.contains("align 1002 -> 1004 weight 9999"));
    assert!(summary.contains("legend: 4 commodities"));
    assert!(summary.contains("[trapezium] Barren Extractor Control Unit"));
}

#[test]
fn e2e_failed_colony_is_skipped() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = demos_path();

    let broken = temp_dir.path().join("broken.json");
    fs::write(
        &broken,
        r#"{
            "last_update": "2026-03-01T08:30:00Z",
            "planet_type": "gas",
            "name": "Broken Colony",
            "solar_system_id": 30000002,
            "upgrade_level": 0,
            "colony_layout": {
                "pins": [{"pin_id": 1, "type_id": 2544, "latitude": 0.0, "longitude": 0.0}],
                "links": [{"source_pin_id": 1, "destination_pin_id": 2, "link_level": 0}],
                "routes": []
            }
        }"#,
    )
    .unwrap();

    let not_json = temp_dir.path().join("not_json.json");
    fs::write(&not_json, "this is not a colony").unwrap();

    let args = args(
        vec![broken, demos.join("tanoo.json"), not_json],
        demos.join("catalog.json"),
        None,
    );

    let mut out = Vec::new();
    let err = run_with_output(&args, &mut out).unwrap_err();
    assert!(
        matches!(err, CliError::Failed { failed: 2, total: 4 }),
        "unexpected error: {err}"
    );

    let summary = String::from_utf8(out).unwrap();
    assert!(!summary.contains("Broken Colony"));
    assert!(summary.contains("Colony Tanoo I "));
    assert!(summary.contains("Colony Tanoo II "));
}

#[test]
fn e2e_bad_catalog_aborts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let catalog = temp_dir.path().join("catalog.json");
    fs::write(&catalog, r#"{"commodities": {"2268": {"name": "Aqueous Liquids"}}}"#).unwrap();

    let args = args(vec![demos_path().join("tanoo.json")], catalog, None);

    let err = run_with_output(&args, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Catalog { .. }), "unexpected error: {err}");
}
