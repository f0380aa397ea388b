//! TCP profile (`ltm/profile/tcp`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// A TCP traffic profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TcpProfile {
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
    /// Appropriate byte counting (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abc: Option<String>,
    /// ACK on PUSH (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack_on_push: Option<String>,
    /// Close-wait timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_wait_timeout: Option<i32>,
    /// Congestion control algorithm (`highspeed`, `cubic`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congestion_control: Option<String>,
    /// Defer accept until payload arrives (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deferred_accept: Option<String>,
    /// Delayed ACKs (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delayed_acks: Option<String>,
    /// Duplicate SACK processing (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsack: Option<String>,
    /// Early retransmit (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_retransmit: Option<String>,
    /// Explicit congestion notification (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecn: Option<String>,
    /// TCP Fast Open (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast_open: Option<String>,
    /// FIN-wait-2 timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fin_wait_2_timeout: Option<i32>,
    /// FIN-wait timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fin_wait_timeout: Option<i32>,
    /// Idle timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<i32>,
    /// Initial congestion window (MSS units)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_cwnd: Option<u32>,
    /// Initial receive window (MSS units)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_rwnd: Option<u32>,
    /// IP don't-fragment handling (`pmtu`, `preserve`, `set`, `clear`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_df_mode: Option<String>,
    /// IP ToS applied to client traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_tos_to_client: Option<String>,
    /// Keep-alive probe interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive_interval: Option<i32>,
    /// Link QoS applied to client traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_qos_to_client: Option<String>,
    /// Maximum retransmissions of data segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retrans: Option<u32>,
    /// Minimum receive window (MSS units)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_rto: Option<u32>,
    /// Nagle's algorithm (`enabled`/`disabled`/`auto`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nagle: Option<String>,
    /// High-water mark for proxy buffering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_buffer_high: Option<u32>,
    /// Low-water mark for proxy buffering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_buffer_low: Option<u32>,
    /// Proxy maximum segment size (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_mss: Option<String>,
    /// Proxy TCP options (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_options: Option<String>,
    /// Receive window size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_window_size: Option<u32>,
    /// Selective ACKs (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective_acks: Option<String>,
    /// Send buffer size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_buffer_size: Option<u32>,
    /// Slow start (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_start: Option<String>,
    /// Maximum SYN retransmissions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syn_max_retrans: Option<u32>,
    /// Recycle TIME-WAIT connections (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_wait_recycle: Option<String>,
    /// TIME-WAIT timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_wait_timeout: Option<String>,
    /// RFC 1323 timestamps (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<String>,
    /// Zero-window timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_window_timeout: Option<i32>,
}

impl TmEntity for TcpProfile {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["profile", "tcp"];
}
