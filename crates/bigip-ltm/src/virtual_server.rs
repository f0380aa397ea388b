//! Virtual server bindings (`ltm/virtual`).

use bigip_core::stats::StatsResponse;
use bigip_core::{Endpoint, Module, ObjectPath, Result, Session};
use serde::{Deserialize, Serialize};

/// Collection of virtual servers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServerList {
    /// Collection kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The virtual servers
    #[serde(default)]
    pub items: Vec<VirtualServer>,
}

/// A virtual server (listener).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServer {
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
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Listener address and port (`/Common/10.0.0.10:443`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Address status reporting (`yes`/`no`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_status: Option<String>,
    /// Auto last-hop behavior (`default`/`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_lasthop: Option<String>,
    /// CMP enablement (`yes`/`no`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmp_enabled: Option<String>,
    /// Connection limit (0 = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u32>,
    /// Listener is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Listener is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// GTM score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtm_score: Option<u32>,
    /// Transport protocol (`tcp`, `udp`, `sctp`, `any`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,
    /// Destination netmask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    /// Connection mirroring (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror: Option<String>,
    /// Mobile app tunnel support (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_app_tunnel: Option<String>,
    /// NAT64 translation (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nat64: Option<String>,
    /// Default pool full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    /// Rate limit (`disabled` or a number as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<String>,
    /// Rate limit destination mask width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_dst_mask: Option<u32>,
    /// Rate limit mode (`object`, `source`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_mode: Option<String>,
    /// Rate limit source mask width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_src_mask: Option<u32>,
    /// Immediate action when the service is down
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_down_immediate_action: Option<String>,
    /// Allowed source network (`0.0.0.0/0`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Source address translation settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_address_translation: Option<SourceAddressTranslation>,
    /// Source port behavior (`preserve`, `preserve-strict`, `change`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    /// SYN cookie status (read-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syn_cookie_status: Option<String>,
    /// Translate the destination address (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_address: Option<String>,
    /// Translate the destination port (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_port: Option<String>,
    /// VLANs the listener is restricted to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlans: Option<Vec<String>>,
    /// VLAN list is a disable list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlans_disabled: Option<bool>,
    /// VLAN list is an enable list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlans_enabled: Option<bool>,
    /// iRules attached to the listener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    /// Persistence profiles attached to the listener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist: Option<Vec<PersistReference>>,
    /// Reference to the profiles sub-collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles_reference: Option<ProfilesReference>,
    /// Reference to the policies sub-collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies_reference: Option<PoliciesReference>,
}

/// Source address translation block of a virtual server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceAddressTranslation {
    /// Translation type (`automap`, `snat`, `none`)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub translation_type: Option<String>,
    /// SNAT pool full path when the type is `snat`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
}

/// Persistence profile attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistReference {
    /// Profile name
    pub name: String,
    /// Profile partition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    /// Whether this is the default persistence profile (`yes`/`no`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm_default: Option<String>,
}

/// Link to the profiles sub-collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesReference {
    /// Sub-collection URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Marker that the link is a sub-collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subcollection: Option<bool>,
}

/// Link to the policies sub-collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoliciesReference {
    /// Sub-collection URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Marker that the link is a sub-collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subcollection: Option<bool>,
}

/// Partial body used for the enabled/disabled flips.
#[derive(Debug, Serialize)]
struct EnabledPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disabled: Option<bool>,
}

/// Handler for the virtual server collection.
#[derive(Debug, Clone)]
pub struct VirtualServers {
    session: Session,
}

impl VirtualServers {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn endpoint() -> Endpoint {
        Endpoint::tm(Module::Ltm).resource("virtual")
    }

    /// List all virtual servers.
    pub async fn list(&self) -> Result<VirtualServerList> {
        self.session.get_json(&Self::endpoint()).await
    }

    /// Fetch a single virtual server by full path.
    pub async fn get(&self, id: &ObjectPath) -> Result<VirtualServer> {
        self.session.get_json(&Self::endpoint().instance(id)).await
    }

    /// Create a virtual server, returning the stored object.
    pub async fn create(&self, virtual_server: &VirtualServer) -> Result<VirtualServer> {
        self.session
            .post_json(&Self::endpoint(), virtual_server)
            .await
    }

    /// Replace a virtual server, returning the stored object.
    pub async fn update(
        &self,
        id: &ObjectPath,
        virtual_server: &VirtualServer,
    ) -> Result<VirtualServer> {
        self.session
            .put_json(&Self::endpoint().instance(id), virtual_server)
            .await
    }

    /// Delete a virtual server by full path.
    pub async fn delete(&self, id: &ObjectPath) -> Result<()> {
        self.session.delete(&Self::endpoint().instance(id)).await
    }

    /// Enable the listener.
    pub async fn enable(&self, id: &ObjectPath) -> Result<VirtualServer> {
        let patch = EnabledPatch {
            enabled: Some(true),
            disabled: None,
        };
        self.session
            .patch_json(&Self::endpoint().instance(id), &patch)
            .await
    }

    /// Disable the listener.
    pub async fn disable(&self, id: &ObjectPath) -> Result<VirtualServer> {
        let patch = EnabledPatch {
            enabled: None,
            disabled: Some(true),
        };
        self.session
            .patch_json(&Self::endpoint().instance(id), &patch)
            .await
    }

    /// Fetch statistics for one virtual server.
    pub async fn stats(&self, id: &ObjectPath) -> Result<StatsResponse> {
        self.session
            .get_json(&Self::endpoint().instance(id).stats())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn virtuals(server: &MockServer) -> VirtualServers {
        VirtualServers::new(Session::new(server.uri(), "admin", "secret").unwrap())
    }

    #[tokio::test]
    async fn get_virtual_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/virtual/~Common~https-vs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "https-vs",
                "partition": "Common",
                "fullPath": "/Common/https-vs",
                "destination": "/Common/10.0.0.10:443",
                "ipProtocol": "tcp",
                "mask": "255.255.255.255",
                "pool": "/Common/web-pool",
                "sourceAddressTranslation": {"type": "automap"},
                "enabled": true,
                "rules": ["/Common/redirect-rule"],
                "persist": [{"name": "cookie", "partition": "Common", "tmDefault": "yes"}]
            })))
            .mount(&server)
            .await;

        let vs = virtuals(&server)
            .get(&ObjectPath::common("https-vs"))
            .await
            .unwrap();
        assert_eq!(vs.destination.as_deref(), Some("/Common/10.0.0.10:443"));
        assert_eq!(
            vs.source_address_translation
                .as_ref()
                .and_then(|sat| sat.translation_type.as_deref()),
            Some("automap")
        );
        assert_eq!(vs.persist.as_ref().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn disable_patches_flag() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/mgmt/tm/ltm/virtual/~Common~https-vs"))
            .and(body_json(json!({"disabled": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "https-vs",
                "disabled": true
            })))
            .mount(&server)
            .await;

        let vs = virtuals(&server)
            .disable(&ObjectPath::common("https-vs"))
            .await
            .unwrap();
        assert_eq!(vs.disabled, Some(true));
    }

    #[tokio::test]
    async fn virtual_stats_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/virtual/~Common~https-vs/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "tm:ltm:virtual:virtualstats",
                "entries": {
                    "https://localhost/mgmt/tm/ltm/virtual/~Common~https-vs/stats": {
                        "nestedStats": {
                            "entries": {
                                "clientside.curConns": {"value": 42}
                            }
                        }
                    }
                }
            })))
            .mount(&server)
            .await;

        let stats = virtuals(&server)
            .stats(&ObjectPath::common("https-vs"))
            .await
            .unwrap();
        let nested = stats.nested().next().unwrap();
        assert_eq!(nested.counter("clientside.curConns"), Some(42));
    }
}
