//! Local traffic policy bindings (`ltm/policy`).

use bigip_core::{Endpoint, Module, ObjectPath, Result, Session};
use serde::{Deserialize, Serialize};

/// Collection of policies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyList {
    /// Collection kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The policies
    #[serde(default)]
    pub items: Vec<Policy>,
}

/// A local traffic policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// Object name
    pub name: String,
    /// Administrative partition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    /// Sub-folder within the partition (`Drafts` for unpublished policies)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
    /// Full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    /// Configuration generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    /// Self link of the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Features the policy controls (`forwarding`, `caching`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Vec<String>>,
    /// Profile types the policy requires (`http`, `tcp`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<String>>,
    /// Matching strategy full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// Publication status (`published`, `draft`, `legacy`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Last modification timestamp as reported by the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Reference to the rules sub-collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_reference: Option<RulesReference>,
}

/// Link to the rules sub-collection of a policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RulesReference {
    /// Sub-collection URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Marker that the link is a sub-collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subcollection: Option<bool>,
}

/// Handler for the policy collection.
#[derive(Debug, Clone)]
pub struct Policies {
    session: Session,
}

impl Policies {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn endpoint() -> Endpoint {
        Endpoint::tm(Module::Ltm).resource("policy")
    }

    /// List all policies.
    pub async fn list(&self) -> Result<PolicyList> {
        self.session.get_json(&Self::endpoint()).await
    }

    /// Fetch a single policy by full path.
    pub async fn get(&self, id: &ObjectPath) -> Result<Policy> {
        self.session.get_json(&Self::endpoint().instance(id)).await
    }

    /// Create a policy, returning the stored object.
    pub async fn create(&self, policy: &Policy) -> Result<Policy> {
        self.session.post_json(&Self::endpoint(), policy).await
    }

    /// Replace a policy, returning the stored object.
    pub async fn update(&self, id: &ObjectPath, policy: &Policy) -> Result<Policy> {
        self.session
            .put_json(&Self::endpoint().instance(id), policy)
            .await
    }

    /// Delete a policy by full path.
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
    async fn draft_policy_path_uses_subfolder() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/policy/~Common~Drafts~redirects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "redirects",
                "partition": "Common",
                "subPath": "Drafts",
                "fullPath": "/Common/Drafts/redirects",
                "status": "draft",
                "strategy": "/Common/first-match",
                "controls": ["forwarding"],
                "requires": ["http"]
            })))
            .mount(&server)
            .await;

        let handler = Policies::new(Session::new(server.uri(), "admin", "secret").unwrap());
        let policy = handler
            .get(&ObjectPath::parse("/Common/Drafts/redirects").unwrap())
            .await
            .unwrap();
        assert_eq!(policy.status.as_deref(), Some("draft"));
        assert_eq!(policy.sub_path.as_deref(), Some("Drafts"));
    }
}
