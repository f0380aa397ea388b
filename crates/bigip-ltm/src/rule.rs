//! iRule bindings (`ltm/rule`).

use bigip_core::{Endpoint, Module, ObjectPath, Result, Session};
use serde::{Deserialize, Serialize};

/// Collection of iRules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleList {
    /// Collection kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The rules
    #[serde(default)]
    pub items: Vec<Rule>,
}

/// An iRule. The Tcl body travels in `apiAnonymous`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
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
    /// The Tcl rule body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_anonymous: Option<String>,
}

/// Handler for the iRule collection.
#[derive(Debug, Clone)]
pub struct Rules {
    session: Session,
}

impl Rules {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn endpoint() -> Endpoint {
        Endpoint::tm(Module::Ltm).resource("rule")
    }

    /// List all iRules.
    pub async fn list(&self) -> Result<RuleList> {
        self.session.get_json(&Self::endpoint()).await
    }

    /// Fetch a single iRule by full path.
    pub async fn get(&self, id: &ObjectPath) -> Result<Rule> {
        self.session.get_json(&Self::endpoint().instance(id)).await
    }

    /// Create an iRule, returning the stored object.
    pub async fn create(&self, rule: &Rule) -> Result<Rule> {
        self.session.post_json(&Self::endpoint(), rule).await
    }

    /// Replace an iRule, returning the stored object.
    pub async fn update(&self, id: &ObjectPath, rule: &Rule) -> Result<Rule> {
        self.session
            .put_json(&Self::endpoint().instance(id), rule)
            .await
    }

    /// Delete an iRule by full path.
    pub async fn delete(&self, id: &ObjectPath) -> Result<()> {
        self.session.delete(&Self::endpoint().instance(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_rule_sends_body() {
        let server = MockServer::start().await;
        let tcl = "when HTTP_REQUEST {\n  HTTP::redirect \"https://[HTTP::host][HTTP::uri]\"\n}";
        Mock::given(method("POST"))
            .and(path("/mgmt/tm/ltm/rule"))
            .and(body_json(json!({
                "name": "redirect-rule",
                "apiAnonymous": tcl
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "redirect-rule",
                "fullPath": "/Common/redirect-rule",
                "apiAnonymous": tcl
            })))
            .mount(&server)
            .await;

        let rules = Rules::new(Session::new(server.uri(), "admin", "secret").unwrap());
        let rule = Rule {
            name: "redirect-rule".to_string(),
            api_anonymous: Some(tcl.to_string()),
            ..Rule::default()
        };
        let created = rules.create(&rule).await.unwrap();
        assert_eq!(created.full_path.as_deref(), Some("/Common/redirect-rule"));
    }
}
