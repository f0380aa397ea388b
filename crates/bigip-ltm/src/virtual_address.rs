//! Virtual address bindings (`ltm/virtual-address`).

use bigip_core::{Endpoint, Module, ObjectPath, Result, Session};
use serde::{Deserialize, Serialize};

/// Collection of virtual addresses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAddressList {
    /// Collection kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The virtual addresses
    #[serde(default)]
    pub items: Vec<VirtualAddress>,
}

/// A virtual address, created implicitly alongside virtual servers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAddress {
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
    /// The IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Respond to ARP (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arp: Option<String>,
    /// Delete automatically with the last referencing virtual server
    /// (`true`/`false` as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<String>,
    /// Connection limit (0 = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u32>,
    /// Address is enabled (`yes`/`no`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<String>,
    /// Address floats between HA units (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating: Option<String>,
    /// Respond to ICMP echo (`enabled`/`disabled`/`selective`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icmp_echo: Option<String>,
    /// Traffic group inheritance (`true`/`false` as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_traffic_group: Option<String>,
    /// Netmask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    /// Route advertisement mode (`enabled`/`disabled`/`selective`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_advertisement: Option<String>,
    /// Server scope (`any`/`all`/`none`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_scope: Option<String>,
    /// Spanning across clusters (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spanning: Option<String>,
    /// Owning traffic group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_group: Option<String>,
    /// HA unit number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<u32>,
}

/// Handler for the virtual address collection.
#[derive(Debug, Clone)]
pub struct VirtualAddresses {
    session: Session,
}

impl VirtualAddresses {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn endpoint() -> Endpoint {
        Endpoint::tm(Module::Ltm).resource("virtual-address")
    }

    /// List all virtual addresses.
    pub async fn list(&self) -> Result<VirtualAddressList> {
        self.session.get_json(&Self::endpoint()).await
    }

    /// Fetch a single virtual address by full path.
    pub async fn get(&self, id: &ObjectPath) -> Result<VirtualAddress> {
        self.session.get_json(&Self::endpoint().instance(id)).await
    }

    /// Create a virtual address, returning the stored object.
    pub async fn create(&self, address: &VirtualAddress) -> Result<VirtualAddress> {
        self.session.post_json(&Self::endpoint(), address).await
    }

    /// Replace a virtual address, returning the stored object.
    pub async fn update(&self, id: &ObjectPath, address: &VirtualAddress) -> Result<VirtualAddress> {
        self.session
            .put_json(&Self::endpoint().instance(id), address)
            .await
    }

    /// Delete a virtual address by full path.
    pub async fn delete(&self, id: &ObjectPath) -> Result<()> {
        self.session.delete(&Self::endpoint().instance(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_virtual_addresses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/virtual-address"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "tm:ltm:virtual-address:virtual-addresscollectionstate",
                "items": [
                    {
                        "name": "10.0.0.10",
                        "partition": "Common",
                        "address": "10.0.0.10",
                        "arp": "enabled",
                        "trafficGroup": "/Common/traffic-group-1"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let handler =
            VirtualAddresses::new(Session::new(server.uri(), "admin", "secret").unwrap());
        let list = handler.list().await.unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].arp.as_deref(), Some("enabled"));
    }
}
