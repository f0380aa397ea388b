//! Integration tests for parsing GTM monitor data.
//!
//! These tests validate that the bigip-gtm models can correctly deserialize
//! actual iControl REST response data.

use std::fs;
use std::path::PathBuf;

use bigip_core::TmList;
use bigip_gtm::HttpMonitor;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load the HTTP monitor list fixture from disk.
fn load_monitor_list_fixture() -> String {
    let fixture_path = fixtures_dir().join("monitor_http_list.json");
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read monitor list fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_monitor_list() {
    let json_data = load_monitor_list_fixture();

    let monitors: TmList<HttpMonitor> = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!(
            "Failed to deserialize monitor list data: {}\nJSON: {}",
            e, json_data
        )
    });

    assert_eq!(monitors.items.len(), 2, "Expected 2 monitors in test data");
    assert_eq!(
        monitors.kind.as_deref(),
        Some("tm:gtm:monitor:http:httpcollectionstate")
    );
}

#[test]
fn test_builtin_monitor_fields() {
    let json_data = load_monitor_list_fixture();
    let monitors: TmList<HttpMonitor> = serde_json::from_str(&json_data).unwrap();

    let builtin = &monitors.items[0];
    assert_eq!(builtin.name, "http");
    assert_eq!(builtin.destination.as_deref(), Some("*:*"));
    assert_eq!(builtin.interval, Some(30));
    assert_eq!(builtin.timeout, Some(120));
    assert!(builtin.defaults_from.is_none());
}

#[test]
fn test_custom_monitor_inherits_parent() {
    let json_data = load_monitor_list_fixture();
    let monitors: TmList<HttpMonitor> = serde_json::from_str(&json_data).unwrap();

    let custom = &monitors.items[1];
    assert_eq!(custom.defaults_from.as_deref(), Some("/Common/http"));
    assert_eq!(custom.recv.as_deref(), Some("OK"));
    assert_eq!(custom.probe_timeout, Some(5));
}

#[test]
fn test_monitor_serialization_omits_empty_fields() {
    let monitor = HttpMonitor {
        name: "probe".to_string(),
        interval: Some(10),
        ..HttpMonitor::default()
    };
    let json = serde_json::to_string(&monitor).unwrap();
    assert_eq!(json, r#"{"name":"probe","interval":10}"#);
}
