//! UDP profile (`ltm/profile/udp`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// A UDP traffic profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UdpProfile {
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
    /// Parent profile full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults_from: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allow datagrams with no payload (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_no_payload: Option<String>,
    /// Application service the profile belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
    /// Maximum buffered bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_max_bytes: Option<u32>,
    /// Maximum buffered packets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_max_packets: Option<u32>,
    /// Per-datagram load balancing (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datagram_load_balancing: Option<String>,
    /// Idle timeout in seconds (or `indefinite`/`immediate`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<String>,
    /// IP don't-fragment handling (`pmtu`, `preserve`, `set`, `clear`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_df_mode: Option<String>,
    /// IP ToS applied to client traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_tos_to_client: Option<String>,
    /// Link QoS applied to client traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_qos_to_client: Option<String>,
    /// Omit UDP checksums (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_checksum: Option<String>,
    /// Proxy maximum segment size (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_mss: Option<String>,
}

impl TmEntity for UdpProfile {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["profile", "udp"];
}
