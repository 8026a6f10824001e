use amphibian_map::{MapError, MarkerCategory, SiteConfig};
use std::path::PathBuf;

fn temp_config_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "amphibian_map_{}_{}.toml",
        name,
        std::process::id()
    ))
}

#[test]
fn test_saved_config_loads_back() {
    let path = temp_config_path("roundtrip");
    let mut config = SiteConfig::embedded_default().expect("Standard-Konfiguration laden");
    config.markers.truncate(2);
    config.map.zoom = 3;

    config.save_to_file(&path).expect("Speichern sollte funktionieren");
    let loaded = SiteConfig::load_from_file(&path).expect("Laden sollte funktionieren");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, config);
    assert_eq!(loaded.map.zoom, 3);
}

#[test]
fn test_malformed_file_falls_back_to_default() {
    let path = temp_config_path("malformed");
    std::fs::write(&path, "[[markers]\nlat = ").expect("Testdatei schreiben");

    let loaded = SiteConfig::load_from_file(&path).expect("Fallback auf Standardwerte");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.markers.len(), 10);
}

#[test]
fn test_unknown_category_in_file_is_fatal_at_registration() {
    let path = temp_config_path("unknown_category");
    std::fs::write(
        &path,
        r#"
[[markers]]
category = "projects"
lat = -0.617748
lng = 120.433428
url = "http://www.amphibians.org/our-work/projects/sulawesi/"
title = "Sulawesi"

[[markers]]
category = "salamanders"
lat = 0.0
lng = 0.0
url = "http://www.amphibians.org/"
"#,
    )
    .expect("Testdatei schreiben");

    let loaded = SiteConfig::load_from_file(&path).expect("TOML ist gueltig");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.markers.len(), 2);
    assert_eq!(
        loaded.build_registry().unwrap_err(),
        MapError::UnknownCategory("salamanders".to_string())
    );
}

#[test]
fn test_out_of_range_coordinate_is_rejected() {
    let config = SiteConfig::from_toml_str(
        r#"
[[markers]]
category = "groups"
lat = 125.0
lng = 43.1
url = "http://www.amphibians.org/"
"#,
    )
    .unwrap();

    assert!(matches!(
        config.build_registry(),
        Err(MapError::InvalidCoordinate { .. })
    ));
}

#[test]
fn test_default_registry_partitions_by_category() {
    let registry = SiteConfig::embedded_default()
        .unwrap()
        .build_registry()
        .unwrap();

    let mut ids: Vec<usize> = MarkerCategory::ALL
        .into_iter()
        .flat_map(|c| registry.records_in(c).map(|(id, _)| id).collect::<Vec<_>>())
        .collect();
    assert_eq!(ids, (0..10).collect::<Vec<_>>());
    ids.dedup();
    assert_eq!(ids.len(), registry.len());
}

#[test]
fn test_default_registry_dumps_as_json_array() {
    let config = SiteConfig::embedded_default().expect("Standard-Konfiguration laden");
    let registry = config.build_registry().expect("Standard-Marker registrieren");

    let json = registry.to_json().expect("Registry serialisierbar");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gueltiges JSON");
    let records = value.as_array().expect("JSON-Array");

    assert_eq!(records.len(), 10);
    assert_eq!(records[0]["category"], "grants");
    assert_eq!(records[6]["title"], "Colombia");
    assert_eq!(records[9]["visible"], true);
}
