//! HTTP/2 profile (`ltm/profile/http2`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// An HTTP/2 traffic profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Http2Profile {
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
    /// Negotiation modes (`alpn`, `always`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_modes: Option<Vec<String>>,
    /// Application service the profile belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
    /// Maximum concurrent streams per connection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrent_streams_per_connection: Option<u32>,
    /// Idle timeout for HTTP/2 connections in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_idle_timeout: Option<u32>,
    /// Enforce RFC 7540 TLS requirements (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_tls_requirements: Option<String>,
    /// Maximum frame size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_size: Option<u32>,
    /// HPACK header table size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_table_size: Option<u32>,
    /// Include Content-Length in converted requests (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_content_length: Option<String>,
    /// Insert a header into converted requests (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_header: Option<String>,
    /// Name of the inserted header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_header_name: Option<String>,
    /// Flow-control receive window in KB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_window: Option<u32>,
    /// Write chunk size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_size: Option<u32>,
}

impl TmEntity for Http2Profile {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["profile", "http2"];
}
