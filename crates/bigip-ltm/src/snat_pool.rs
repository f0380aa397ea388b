//! SNAT pool bindings (`ltm/snatpool`).

use bigip_core::{Endpoint, Module, ObjectPath, Result, Session};
use serde::{Deserialize, Serialize};

/// Collection of SNAT pools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnatPoolList {
    /// Collection kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The SNAT pools
    #[serde(default)]
    pub items: Vec<SnatPool>,
}

/// A SNAT pool (set of translation addresses).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnatPool {
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
    /// Translation addresses, as full paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
}

/// Handler for the SNAT pool collection.
#[derive(Debug, Clone)]
pub struct SnatPools {
    session: Session,
}

impl SnatPools {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn endpoint() -> Endpoint {
        Endpoint::tm(Module::Ltm).resource("snatpool")
    }

    /// List all SNAT pools.
    pub async fn list(&self) -> Result<SnatPoolList> {
        self.session.get_json(&Self::endpoint()).await
    }

    /// Fetch a single SNAT pool by full path.
    pub async fn get(&self, id: &ObjectPath) -> Result<SnatPool> {
        self.session.get_json(&Self::endpoint().instance(id)).await
    }

    /// Create a SNAT pool, returning the stored object.
    pub async fn create(&self, snat_pool: &SnatPool) -> Result<SnatPool> {
        self.session.post_json(&Self::endpoint(), snat_pool).await
    }

    /// Replace a SNAT pool, returning the stored object.
    pub async fn update(&self, id: &ObjectPath, snat_pool: &SnatPool) -> Result<SnatPool> {
        self.session
            .put_json(&Self::endpoint().instance(id), snat_pool)
            .await
    }

    /// Delete a SNAT pool by full path.
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
    async fn get_snat_pool() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/snatpool/~Common~outbound-snat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "outbound-snat",
                "partition": "Common",
                "fullPath": "/Common/outbound-snat",
                "members": ["/Common/192.0.2.10", "/Common/192.0.2.11"]
            })))
            .mount(&server)
            .await;

        let handler = SnatPools::new(Session::new(server.uri(), "admin", "secret").unwrap());
        let pool = handler
            .get(&ObjectPath::common("outbound-snat"))
            .await
            .unwrap();
        assert_eq!(pool.members.as_ref().map(Vec::len), Some(2));
    }
}
