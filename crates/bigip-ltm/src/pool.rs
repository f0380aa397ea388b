//! Pool and pool member bindings (`ltm/pool`).

use bigip_core::stats::StatsResponse;
use bigip_core::{Endpoint, Module, ObjectPath, Result, Session};
use serde::{Deserialize, Serialize};

/// Collection of pools.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolList {
    /// Collection kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The pools
    #[serde(default)]
    pub items: Vec<Pool>,
}

/// A load balancing pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// Object name
    pub name: String,
    /// Administrative partition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    /// Full path (`/Partition/Name`)
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
    /// Allow NAT for this pool (`yes`/`no`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_nat: Option<String>,
    /// Allow SNAT for this pool (`yes`/`no`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_snat: Option<String>,
    /// Ignore persisted ratio weights (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_persisted_weight: Option<String>,
    /// IP ToS applied to client traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_tos_to_client: Option<String>,
    /// IP ToS applied to server traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_tos_to_server: Option<String>,
    /// Link QoS applied to client traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_qos_to_client: Option<String>,
    /// Link QoS applied to server traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_qos_to_server: Option<String>,
    /// Load balancing method (e.g. `round-robin`, `least-connections-member`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancing_mode: Option<String>,
    /// Minimum number of members that must be up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_active_members: Option<u32>,
    /// Minimum up members threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_up_members: Option<u32>,
    /// Action taken when the threshold is crossed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_up_members_action: Option<String>,
    /// Whether the threshold is enforced (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_up_members_checking: Option<String>,
    /// Health monitor expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor: Option<String>,
    /// Connection queue depth limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_depth_limit: Option<u32>,
    /// Queue connections when the member limit is reached (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_on_connection_limit: Option<String>,
    /// Maximum time a connection may stay queued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_time_limit: Option<u32>,
    /// Number of times to reselect on member failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reselect_tries: Option<u32>,
    /// Action on service down (e.g. `none`, `reset`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_down_action: Option<String>,
    /// Slow ramp time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_ramp_time: Option<u32>,
    /// Reference to the members sub-collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_reference: Option<MembersReference>,
}

/// Link to the members sub-collection of a pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MembersReference {
    /// Sub-collection URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Marker that the link is a sub-collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subcollection: Option<bool>,
}

/// Collection of pool members.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolMemberList {
    /// Collection kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The members
    #[serde(default)]
    pub items: Vec<PoolMember>,
}

/// A pool member (`node:port`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolMember {
    /// Member name (`node-name:port`)
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
    /// Member IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Connection limit (0 = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u32>,
    /// Dynamic ratio weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_ratio: Option<u32>,
    /// Whether the member is ephemeral (`true`/`false` as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<String>,
    /// FQDN auto-population settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<MemberFqdn>,
    /// Inherit profile from the node (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit_profile: Option<String>,
    /// Monitor logging (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<String>,
    /// Health monitor expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor: Option<String>,
    /// Priority group number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_group: Option<u32>,
    /// Rate limit (`disabled` or a number as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<String>,
    /// Static ratio weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<u32>,
    /// Session state (`user-enabled`, `user-disabled`, `monitor-enabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    /// Member state (`up`, `down`, `user-down`, `unchecked`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// FQDN settings of a pool member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberFqdn {
    /// Auto-populate ephemeral members (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autopopulate: Option<String>,
    /// FQDN to resolve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm_name: Option<String>,
}

/// Handler for the pool collection.
#[derive(Debug, Clone)]
pub struct Pools {
    session: Session,
}

impl Pools {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn endpoint() -> Endpoint {
        Endpoint::tm(Module::Ltm).resource("pool")
    }

    /// List all pools.
    pub async fn list(&self) -> Result<PoolList> {
        self.session.get_json(&Self::endpoint()).await
    }

    /// Fetch a single pool by full path.
    pub async fn get(&self, id: &ObjectPath) -> Result<Pool> {
        self.session.get_json(&Self::endpoint().instance(id)).await
    }

    /// Create a pool, returning the stored object.
    pub async fn create(&self, pool: &Pool) -> Result<Pool> {
        self.session.post_json(&Self::endpoint(), pool).await
    }

    /// Replace a pool, returning the stored object.
    pub async fn update(&self, id: &ObjectPath, pool: &Pool) -> Result<Pool> {
        self.session
            .put_json(&Self::endpoint().instance(id), pool)
            .await
    }

    /// Delete a pool by full path.
    pub async fn delete(&self, id: &ObjectPath) -> Result<()> {
        self.session.delete(&Self::endpoint().instance(id)).await
    }

    /// Handler for the members of one pool.
    #[must_use]
    pub fn members(&self, pool: &ObjectPath) -> PoolMembers {
        PoolMembers {
            session: self.session.clone(),
            pool: pool.clone(),
        }
    }

    /// Fetch statistics for every member of a pool.
    pub async fn member_stats(&self, pool: &ObjectPath) -> Result<StatsResponse> {
        let endpoint = Self::endpoint()
            .instance(pool)
            .sub_resource("members")
            .stats();
        self.session.get_json(&endpoint).await
    }
}

/// Handler for the member sub-collection of one pool.
#[derive(Debug, Clone)]
pub struct PoolMembers {
    session: Session,
    pool: ObjectPath,
}

impl PoolMembers {
    fn endpoint(&self) -> Endpoint {
        Pools::endpoint().instance(&self.pool).sub_resource("members")
    }

    /// List the members of the pool.
    pub async fn list(&self) -> Result<PoolMemberList> {
        self.session.get_json(&self.endpoint()).await
    }

    /// Fetch a single member by full path (`/Partition/node:port`).
    pub async fn get(&self, id: &ObjectPath) -> Result<PoolMember> {
        self.session.get_json(&self.endpoint().instance(id)).await
    }

    /// Add a member, returning the stored object.
    pub async fn create(&self, member: &PoolMember) -> Result<PoolMember> {
        self.session.post_json(&self.endpoint(), member).await
    }

    /// Replace a member, returning the stored object.
    pub async fn update(&self, id: &ObjectPath, member: &PoolMember) -> Result<PoolMember> {
        self.session
            .put_json(&self.endpoint().instance(id), member)
            .await
    }

    /// Remove a member by full path.
    pub async fn delete(&self, id: &ObjectPath) -> Result<()> {
        self.session.delete(&self.endpoint().instance(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pools(server: &MockServer) -> Pools {
        Pools::new(Session::new(server.uri(), "admin", "secret").unwrap())
    }

    #[tokio::test]
    async fn list_pools() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/pool"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "tm:ltm:pool:poolcollectionstate",
                "selfLink": "https://localhost/mgmt/tm/ltm/pool?ver=15.1.0",
                "items": [
                    {
                        "name": "web-pool",
                        "partition": "Common",
                        "fullPath": "/Common/web-pool",
                        "loadBalancingMode": "round-robin",
                        "monitor": "/Common/http"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let list = pools(&server).list().await.unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].full_path.as_deref(), Some("/Common/web-pool"));
        assert_eq!(
            list.items[0].load_balancing_mode.as_deref(),
            Some("round-robin")
        );
    }

    #[tokio::test]
    async fn create_pool_posts_camel_case() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mgmt/tm/ltm/pool"))
            .and(body_json(json!({
                "name": "web-pool",
                "partition": "Common",
                "loadBalancingMode": "least-connections-member"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "web-pool",
                "partition": "Common",
                "fullPath": "/Common/web-pool",
                "generation": 101,
                "loadBalancingMode": "least-connections-member"
            })))
            .mount(&server)
            .await;

        let pool = Pool {
            name: "web-pool".to_string(),
            partition: Some("Common".to_string()),
            load_balancing_mode: Some("least-connections-member".to_string()),
            ..Pool::default()
        };
        let created = pools(&server).create(&pool).await.unwrap();
        assert_eq!(created.generation, Some(101));
    }

    #[tokio::test]
    async fn member_crud_uses_nested_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                "/mgmt/tm/ltm/pool/~Common~web-pool/members/~Common~node-1:80",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "node-1:80",
                "address": "10.0.0.1",
                "session": "monitor-enabled",
                "state": "up"
            })))
            .mount(&server)
            .await;

        let members = pools(&server).members(&ObjectPath::common("web-pool"));
        let member = members.get(&ObjectPath::common("node-1:80")).await.unwrap();
        assert_eq!(member.address.as_deref(), Some("10.0.0.1"));
        assert_eq!(member.state.as_deref(), Some("up"));
    }

    #[tokio::test]
    async fn member_stats_parses_nested_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/pool/~Common~web-pool/members/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "tm:ltm:pool:members:membersstats",
                "entries": {
                    "https://localhost/mgmt/tm/ltm/pool/~Common~web-pool/members/~Common~node-1:80/stats": {
                        "nestedStats": {
                            "entries": {
                                "addr": {"description": "10.0.0.1"},
                                "serverside.curConns": {"value": 3}
                            }
                        }
                    }
                }
            })))
            .mount(&server)
            .await;

        let stats = pools(&server)
            .member_stats(&ObjectPath::common("web-pool"))
            .await
            .unwrap();
        let nested = stats.nested().next().unwrap();
        assert_eq!(nested.counter("serverside.curConns"), Some(3));
    }

    #[tokio::test]
    async fn delete_pool() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/mgmt/tm/ltm/pool/~Common~web-pool"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        pools(&server)
            .delete(&ObjectPath::common("web-pool"))
            .await
            .unwrap();
    }
}
