//! GTM BIG-IP monitor (`gtm/monitor/bigip`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// A monitor that gathers status from another BIG-IP via iQuery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BigipMonitor {
    /// Object name
    pub name: String,
    /// Administrative partition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    /// Full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    /// Configuration generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    /// Self link of the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Parent monitor full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults_from: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Combine dynamic ratios from all monitored objects (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_dynamic_ratios: Option<String>,
    /// Target address:port (`*:*` to inherit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Keep marking the object up when probes fail (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_down_response: Option<String>,
    /// Probe interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Overall timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

impl TmEntity for BigipMonitor {
    const MODULE: Module = Module::Gtm;
    const RESOURCE: &'static [&'static str] = &["monitor", "bigip"];
}
