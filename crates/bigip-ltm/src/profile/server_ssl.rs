//! Server SSL profile (`ltm/profile/server-ssl`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// A server SSL (re-encryption toward pool members) profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerSslProfile {
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
    /// Alert timeout (`indefinite` or seconds as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_timeout: Option<String>,
    /// Application service the profile belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
    /// Server certificate verification (`ignore`, `require`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticate: Option<String>,
    /// Maximum certificate chain traversal depth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticate_depth: Option<u32>,
    /// Trusted CA bundle full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<String>,
    /// SSL session cache size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_size: Option<u32>,
    /// SSL session cache timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_timeout: Option<u32>,
    /// Client certificate full path presented to servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    /// Intermediate chain full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// OpenSSL cipher string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphers: Option<String>,
    /// Response handling for expired server certificates (`drop`/`ignore`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_cert_response_control: Option<String>,
    /// Handshake timeout (`indefinite` or seconds as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handshake_timeout: Option<String>,
    /// Key full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Profile mode (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Peer certificate handling (`ignore`, `require`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_cert_mode: Option<String>,
    /// Renegotiation period (`indefinite` or seconds as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renegotiate_period: Option<String>,
    /// Renegotiation size (`indefinite` or MB as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renegotiate_size: Option<String>,
    /// Allow renegotiation (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renegotiation: Option<String>,
    /// Retain certificate on resumption (`true`/`false` as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retain_certificate: Option<String>,
    /// Secure renegotiation mode (`require`, `require-strict`, `request`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_renegotiation: Option<String>,
    /// SNI server name sent to servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// Use as default SNI profile (`true`/`false` as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni_default: Option<String>,
    /// Require SNI (`true`/`false` as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sni_require: Option<String>,
    /// SSL session mirroring (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_mirroring: Option<String>,
    /// Session tickets (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_ticket: Option<String>,
    /// Strict resume (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_resume: Option<String>,
    /// Unclean shutdown handling (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unclean_shutdown: Option<String>,
    /// Response handling for untrusted server certificates (`drop`/`ignore`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub untrusted_cert_response_control: Option<String>,
}

impl TmEntity for ServerSslProfile {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["profile", "server-ssl"];
}
