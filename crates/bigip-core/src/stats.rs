//! Nested statistics models.
//!
//! Statistics endpoints (`.../stats`) answer with a map of entry URLs to
//! `nestedStats` blocks, whose leaves are either counters (`{"value": N}`)
//! or descriptive strings (`{"description": "..."}`). These structures
//! decode that shape and expose typed accessors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level statistics response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Response kind (e.g. `tm:ltm:pool:members:membersstats`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the stats collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Entries keyed by per-object stats URL
    #[serde(default)]
    pub entries: HashMap<String, StatsEntry>,
}

impl StatsResponse {
    /// Iterate over the nested stats blocks, dropping the URL keys.
    pub fn nested(&self) -> impl Iterator<Item = &NestedStats> {
        self.entries.values().map(|entry| &entry.nested_stats)
    }
}

/// One entry in a statistics response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsEntry {
    /// The wrapped statistics block
    #[serde(rename = "nestedStats", default)]
    pub nested_stats: NestedStats,
}

/// The `nestedStats` block holding the actual fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NestedStats {
    /// Block kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of this block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Statistic fields keyed by name (e.g. `serverside.curConns`)
    #[serde(default)]
    pub entries: HashMap<String, StatValue>,
}

impl NestedStats {
    /// Look up a counter value by field name.
    #[must_use]
    pub fn counter(&self, name: &str) -> Option<i64> {
        self.entries.get(name).and_then(|value| value.value)
    }

    /// Look up a descriptive string by field name.
    #[must_use]
    pub fn description(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|value| value.description.as_deref())
    }
}

/// A single statistic leaf: a counter, a description, or both absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatValue {
    /// Numeric counter value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    /// Descriptive string value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> StatsResponse {
        serde_json::from_value(json!({
            "kind": "tm:ltm:pool:members:membersstats",
            "selfLink": "https://localhost/mgmt/tm/ltm/pool/~Common~web-pool/members/stats?ver=15.1.0",
            "entries": {
                "https://localhost/mgmt/tm/ltm/pool/~Common~web-pool/members/~Common~node-1:80/stats": {
                    "nestedStats": {
                        "kind": "tm:ltm:pool:members:membersstats",
                        "entries": {
                            "addr": {"description": "10.0.0.1"},
                            "serverside.curConns": {"value": 12},
                            "serverside.bitsIn": {"value": 194392},
                            "status.availabilityState": {"description": "available"}
                        }
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_nested_entries() {
        let stats = sample();
        assert_eq!(stats.entries.len(), 1);
        let nested = stats.nested().next().unwrap();
        assert_eq!(nested.counter("serverside.curConns"), Some(12));
        assert_eq!(nested.description("addr"), Some("10.0.0.1"));
    }

    #[test]
    fn missing_fields_return_none() {
        let stats = sample();
        let nested = stats.nested().next().unwrap();
        assert_eq!(nested.counter("no.such.field"), None);
        assert_eq!(nested.description("serverside.curConns"), None);
    }

    #[test]
    fn empty_response_decodes() {
        let stats: StatsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(stats.entries.is_empty());
        assert!(stats.kind.is_none());
    }
}
