//! Integration tests for logging functionality
//!
//! A global subscriber can only be installed once per process, so everything
//! that initializes logging lives in a single test.

use campus_coffee::config::LoggingConfig;
use campus_coffee::core::import::convert_osm_node_to_pos;
use campus_coffee::domain::{CampusCoffeeError, NodeId, OsmNode};
use campus_coffee::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_file_logging_writes_json_and_init_is_once_only() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("nested").join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "hourly".to_string(),
    };

    let guard = init_logging("debug", &config).expect("first init succeeds");
    assert!(log_path.is_dir());

    // Only crate targets pass the default filter, so log through library code
    let node = OsmNode {
        name: Some("Test Café".to_string()),
        amenity: Some("pub".to_string()),
        street: Some("Teststrasse".to_string()),
        house_number: Some("1".to_string()),
        postal_code: Some("69117".to_string()),
        city: Some("Heidelberg".to_string()),
        ..OsmNode::new(NodeId::new(5589879349))
    };
    convert_osm_node_to_pos(&node).unwrap();

    // Flushes the non-blocking writer
    drop(guard);

    let files: Vec<_> = std::fs::read_dir(&log_path)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("campus-coffee.log")
        })
        .collect();
    assert_eq!(files.len(), 1);

    let contents = std::fs::read_to_string(files[0].path()).unwrap();
    let first_line = contents.lines().next().expect("at least one log line");
    let parsed: serde_json::Value = serde_json::from_str(first_line).unwrap();
    assert!(parsed.get("level").is_some());
    assert!(contents.contains("5589879349"));

    let second = init_logging("info", &LoggingConfig::default());
    assert!(matches!(second, Err(CampusCoffeeError::Configuration(_))));
}
