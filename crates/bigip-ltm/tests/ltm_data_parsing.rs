//! Integration tests for parsing LTM data.
//!
//! These tests validate that the bigip-ltm models can correctly deserialize
//! actual iControl REST response data.

use std::fs;
use std::path::PathBuf;

use bigip_core::stats::StatsResponse;
use bigip_ltm::pool::PoolList;
use bigip_ltm::virtual_server::VirtualServer;
use bigip_ltm::NodeList;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture from disk.
fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_pool_list() {
    let json_data = load_fixture("pool_list.json");

    let pools: PoolList = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!("Failed to deserialize pool list data: {}\nJSON: {}", e, json_data)
    });

    assert_eq!(pools.items.len(), 2, "Expected 2 pools in test data");
    assert_eq!(
        pools.kind.as_deref(),
        Some("tm:ltm:pool:poolcollectionstate")
    );

    let web = &pools.items[0];
    assert_eq!(web.full_path.as_deref(), Some("/Common/web-pool"));
    assert_eq!(web.load_balancing_mode.as_deref(), Some("round-robin"));
    assert_eq!(web.slow_ramp_time, Some(10));
    assert_eq!(
        web.members_reference
            .as_ref()
            .and_then(|r| r.is_subcollection),
        Some(true)
    );

    let api = &pools.items[1];
    assert_eq!(
        api.load_balancing_mode.as_deref(),
        Some("least-connections-member")
    );
    assert_eq!(api.min_active_members, Some(1));
    assert_eq!(api.service_down_action.as_deref(), Some("reset"));
}

#[test]
fn test_deserialize_node_list() {
    let json_data = load_fixture("node_list.json");
    let nodes: NodeList = serde_json::from_str(&json_data).unwrap();

    assert_eq!(nodes.items.len(), 3, "Expected 3 nodes in test data");

    for node in &nodes.items {
        assert!(
            node.full_path.is_some(),
            "Node {} should have a full path",
            node.name
        );
        assert!(
            node.session.is_some(),
            "Node {} should have a session state",
            node.name
        );
        assert!(
            node.state.is_some(),
            "Node {} should have a state",
            node.name
        );
    }

    let fqdn_node = &nodes.items[2];
    assert_eq!(fqdn_node.address.as_deref(), Some("any6"));
    let fqdn = fqdn_node.fqdn.as_ref().expect("FQDN block expected");
    assert_eq!(fqdn.autopopulate.as_deref(), Some("enabled"));
    assert_eq!(fqdn.tm_name.as_deref(), Some("app.internal.example.com"));
}

#[test]
fn test_deserialize_virtual_detail() {
    let json_data = load_fixture("virtual_detail.json");
    let vs: VirtualServer = serde_json::from_str(&json_data).unwrap();

    assert_eq!(vs.name, "https-vs");
    assert_eq!(vs.destination.as_deref(), Some("/Common/192.0.2.10:443"));
    assert_eq!(vs.enabled, Some(true));
    assert_eq!(vs.vlans_disabled, Some(true));

    let sat = vs
        .source_address_translation
        .as_ref()
        .expect("SNAT block expected");
    assert_eq!(sat.translation_type.as_deref(), Some("snat"));
    assert_eq!(sat.pool.as_deref(), Some("/Common/outbound-snat"));

    let persist = vs.persist.as_ref().expect("persistence list expected");
    assert_eq!(persist[0].name, "app-cookie");
    assert_eq!(persist[0].tm_default.as_deref(), Some("yes"));
}

#[test]
fn test_deserialize_member_stats() {
    let json_data = load_fixture("member_stats.json");
    let stats: StatsResponse = serde_json::from_str(&json_data).unwrap();

    assert_eq!(stats.entries.len(), 2, "Expected stats for 2 members");

    let up_member = stats
        .nested()
        .find(|nested| nested.description("addr") == Some("10.10.1.11"))
        .expect("node-1 stats expected");
    assert_eq!(up_member.counter("serverside.curConns"), Some(7));
    assert_eq!(up_member.counter("totRequests"), Some(598));
    assert_eq!(
        up_member.description("status.availabilityState"),
        Some("available")
    );

    let down_member = stats
        .nested()
        .find(|nested| nested.description("addr") == Some("10.10.1.12"))
        .expect("node-2 stats expected");
    assert_eq!(down_member.description("monitorStatus"), Some("down"));
    assert_eq!(down_member.counter("serverside.curConns"), Some(0));
}

#[test]
fn test_pool_serialization_omits_empty_fields() {
    let pool = bigip_ltm::Pool {
        name: "minimal".to_string(),
        ..bigip_ltm::Pool::default()
    };
    let json = serde_json::to_string(&pool).unwrap();
    assert_eq!(json, r#"{"name":"minimal"}"#);
}
