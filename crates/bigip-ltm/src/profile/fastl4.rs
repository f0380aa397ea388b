//! FastL4 profile (`ltm/profile/fastl4`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// A FastL4 (accelerated layer 4 forwarding) profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fastl4Profile {
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
    /// Application service the profile belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
    /// Client-side idle timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_timeout: Option<u32>,
    /// Offload flows to hardware on migration (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_flow_migration: Option<String>,
    /// Hardware SYN cookie protection (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_syn_cookie: Option<String>,
    /// Idle timeout in seconds (or `indefinite`/`immediate`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<String>,
    /// IP don't-fragment handling (`pmtu`, `preserve`, `set`, `clear`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_df_mode: Option<String>,
    /// IP ToS applied to client traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_tos_to_client: Option<String>,
    /// IP ToS applied to server traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_tos_to_server: Option<String>,
    /// TTL handling mode (`proxy`, `preserve`, `decrement`, `set`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_ttl_mode: Option<String>,
    /// TTL set for IPv4 when the mode is `set`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_ttl_v4: Option<u32>,
    /// TTL set for IPv6 when the mode is `set`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_ttl_v6: Option<u32>,
    /// Keep-alive probe interval (`disabled` or seconds as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive_interval: Option<String>,
    /// Late binding (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_binding: Option<String>,
    /// Link QoS applied to client traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_qos_to_client: Option<String>,
    /// Link QoS applied to server traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_qos_to_server: Option<String>,
    /// Loose close handling (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loose_close: Option<String>,
    /// Loose initiation handling (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loose_initialization: Option<String>,
    /// MSS override (0 = none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mss_override: Option<u32>,
    /// PVA acceleration level (`full`, `partial`, `none`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pva_acceleration: Option<String>,
    /// Reset connections on timeout (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_on_timeout: Option<String>,
    /// Derive RTT from client traffic (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtt_from_client: Option<String>,
    /// Derive RTT from server traffic (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtt_from_server: Option<String>,
    /// Software SYN cookie protection (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_syn_cookie: Option<String>,
    /// SYN cookie whitelist (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syn_cookie_whitelist: Option<String>,
    /// Strip SACK options (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_strip_sack: Option<String>,
    /// Timestamp handling mode (`preserve`, `rewrite`, `strip`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_timestamp_mode: Option<String>,
    /// Window scale handling mode (`preserve`, `rewrite`, `strip`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_wscale_mode: Option<String>,
}

impl TmEntity for Fastl4Profile {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["profile", "fastl4"];
}
