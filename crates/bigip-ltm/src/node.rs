//! Node bindings (`ltm/node`).

use bigip_core::stats::StatsResponse;
use bigip_core::{Endpoint, Module, ObjectPath, Result, Session};
use serde::{Deserialize, Serialize};

/// Collection of nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeList {
    /// Collection kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The nodes
    #[serde(default)]
    pub items: Vec<Node>,
}

/// A node (server address usable as a pool member backend).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
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
    /// Node IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Connection limit (0 = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u32>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dynamic ratio weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_ratio: Option<u32>,
    /// Whether the node is ephemeral (`true`/`false` as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<String>,
    /// FQDN resolution settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<NodeFqdn>,
    /// Monitor logging (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<String>,
    /// Health monitor expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor: Option<String>,
    /// Rate limit (`disabled` or a number as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<String>,
    /// Static ratio weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<u32>,
    /// Session state (`user-enabled`, `user-disabled`, `monitor-enabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    /// Node state (`up`, `down`, `user-down`, `unchecked`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// FQDN settings of a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeFqdn {
    /// Address family used for resolution (`ipv4`/`ipv6`/`all`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_family: Option<String>,
    /// Auto-populate ephemeral nodes (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autopopulate: Option<String>,
    /// Refresh interval when the node is down
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_interval: Option<u32>,
    /// Refresh interval (`ttl` or seconds as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// FQDN to resolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm_name: Option<String>,
}

/// Partial body used for the session/state flips.
#[derive(Debug, Serialize)]
struct SessionStatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'static str>,
}

/// Handler for the node collection.
#[derive(Debug, Clone)]
pub struct Nodes {
    session: Session,
}

impl Nodes {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn endpoint() -> Endpoint {
        Endpoint::tm(Module::Ltm).resource("node")
    }

    /// List all nodes.
    pub async fn list(&self) -> Result<NodeList> {
        self.session.get_json(&Self::endpoint()).await
    }

    /// Fetch a single node by full path.
    pub async fn get(&self, id: &ObjectPath) -> Result<Node> {
        self.session.get_json(&Self::endpoint().instance(id)).await
    }

    /// Create a node, returning the stored object.
    pub async fn create(&self, node: &Node) -> Result<Node> {
        self.session.post_json(&Self::endpoint(), node).await
    }

    /// Replace a node, returning the stored object.
    pub async fn update(&self, id: &ObjectPath, node: &Node) -> Result<Node> {
        self.session
            .put_json(&Self::endpoint().instance(id), node)
            .await
    }

    /// Delete a node by full path.
    pub async fn delete(&self, id: &ObjectPath) -> Result<()> {
        self.session.delete(&Self::endpoint().instance(id)).await
    }

    /// Allow the node to accept new and persistent traffic.
    pub async fn enable(&self, id: &ObjectPath) -> Result<Node> {
        self.patch_state(
            id,
            SessionStatePatch {
                session: Some("user-enabled"),
                state: None,
            },
        )
        .await
    }

    /// Stop sending new connections, keep persistent ones.
    pub async fn disable(&self, id: &ObjectPath) -> Result<Node> {
        self.patch_state(
            id,
            SessionStatePatch {
                session: Some("user-disabled"),
                state: None,
            },
        )
        .await
    }

    /// Mark the node down, dropping all traffic including persistent
    /// connections.
    pub async fn force_offline(&self, id: &ObjectPath) -> Result<Node> {
        self.patch_state(
            id,
            SessionStatePatch {
                session: Some("user-disabled"),
                state: Some("user-down"),
            },
        )
        .await
    }

    /// Fetch statistics for one node.
    pub async fn stats(&self, id: &ObjectPath) -> Result<StatsResponse> {
        self.session
            .get_json(&Self::endpoint().instance(id).stats())
            .await
    }

    async fn patch_state(&self, id: &ObjectPath, patch: SessionStatePatch) -> Result<Node> {
        self.session
            .patch_json(&Self::endpoint().instance(id), &patch)
            .await
    }
}
