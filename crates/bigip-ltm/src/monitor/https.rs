//! HTTPS monitor (`ltm/monitor/https`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// An HTTPS health monitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HttpsMonitor {
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
    /// Adaptive response time monitoring (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive: Option<String>,
    /// Client certificate full path presented to the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    /// OpenSSL cipher list used for the probe handshake
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipherlist: Option<String>,
    /// SSL compatibility mode (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<String>,
    /// Target address:port (`*:*` to inherit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Probe interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// IP DSCP value set on probes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_dscp: Option<u32>,
    /// Client key full path used for the probe handshake
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Require manual resume after recovery (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_resume: Option<String>,
    /// Expected receive string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv: Option<String>,
    /// Receive string that marks the member disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv_disable: Option<String>,
    /// Invert the match (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<String>,
    /// Probe request string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send: Option<String>,
    /// Delay before marking up (seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_until_up: Option<u32>,
    /// Probe timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Route the probe through the member (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<String>,
    /// Interval used while the member is up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_interval: Option<u32>,
    /// Basic auth user name sent with probes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl TmEntity for HttpsMonitor {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["monitor", "https"];
}
