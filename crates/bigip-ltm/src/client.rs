//! LTM module facade.

use bigip_core::{Session, TmCollection};

use crate::monitor::{GatewayIcmpMonitor, HttpMonitor, HttpsMonitor, TcpMonitor, UdpMonitor};
use crate::persistence::{CookiePersistence, SourceAddrPersistence};
use crate::policy::Policies;
use crate::pool::Pools;
use crate::profile::{
    ClientSslProfile, Fastl4Profile, Http2Profile, HttpProfile, OneConnectProfile,
    ServerSslProfile, TcpProfile, UdpProfile,
};
use crate::rule::Rules;
use crate::snat_pool::SnatPools;
use crate::virtual_address::VirtualAddresses;
use crate::virtual_server::VirtualServers;

/// Entry point for the Local Traffic Manager module.
///
/// Holds the shared device session and hands out one handler per resource
/// family.
#[derive(Debug, Clone)]
pub struct Ltm {
    session: Session,
}

impl Ltm {
    /// Create the facade over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Access the underlying session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Pool bindings (`ltm/pool`).
    #[must_use]
    pub fn pools(&self) -> Pools {
        Pools::new(self.session.clone())
    }

    /// Node bindings (`ltm/node`).
    #[must_use]
    pub fn nodes(&self) -> crate::node::Nodes {
        crate::node::Nodes::new(self.session.clone())
    }

    /// Virtual server bindings (`ltm/virtual`).
    #[must_use]
    pub fn virtual_servers(&self) -> VirtualServers {
        VirtualServers::new(self.session.clone())
    }

    /// Virtual address bindings (`ltm/virtual-address`).
    #[must_use]
    pub fn virtual_addresses(&self) -> VirtualAddresses {
        VirtualAddresses::new(self.session.clone())
    }

    /// iRule bindings (`ltm/rule`).
    #[must_use]
    pub fn rules(&self) -> Rules {
        Rules::new(self.session.clone())
    }

    /// SNAT pool bindings (`ltm/snatpool`).
    #[must_use]
    pub fn snat_pools(&self) -> SnatPools {
        SnatPools::new(self.session.clone())
    }

    /// Policy bindings (`ltm/policy`).
    #[must_use]
    pub fn policies(&self) -> Policies {
        Policies::new(self.session.clone())
    }

    /// Cookie persistence profile bindings (`ltm/persistence/cookie`).
    #[must_use]
    pub fn cookie_persistence(&self) -> TmCollection<CookiePersistence> {
        TmCollection::new(self.session.clone())
    }

    /// Source address persistence profile bindings
    /// (`ltm/persistence/source-addr`).
    #[must_use]
    pub fn source_addr_persistence(&self) -> TmCollection<SourceAddrPersistence> {
        TmCollection::new(self.session.clone())
    }

    /// HTTP monitor bindings (`ltm/monitor/http`).
    #[must_use]
    pub fn http_monitors(&self) -> TmCollection<HttpMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// HTTPS monitor bindings (`ltm/monitor/https`).
    #[must_use]
    pub fn https_monitors(&self) -> TmCollection<HttpsMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// TCP monitor bindings (`ltm/monitor/tcp`).
    #[must_use]
    pub fn tcp_monitors(&self) -> TmCollection<TcpMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// UDP monitor bindings (`ltm/monitor/udp`).
    #[must_use]
    pub fn udp_monitors(&self) -> TmCollection<UdpMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// Gateway ICMP monitor bindings (`ltm/monitor/gateway-icmp`).
    #[must_use]
    pub fn gateway_icmp_monitors(&self) -> TmCollection<GatewayIcmpMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// HTTP profile bindings (`ltm/profile/http`).
    #[must_use]
    pub fn http_profiles(&self) -> TmCollection<HttpProfile> {
        TmCollection::new(self.session.clone())
    }

    /// TCP profile bindings (`ltm/profile/tcp`).
    #[must_use]
    pub fn tcp_profiles(&self) -> TmCollection<TcpProfile> {
        TmCollection::new(self.session.clone())
    }

    /// UDP profile bindings (`ltm/profile/udp`).
    #[must_use]
    pub fn udp_profiles(&self) -> TmCollection<UdpProfile> {
        TmCollection::new(self.session.clone())
    }

    /// FastL4 profile bindings (`ltm/profile/fastl4`).
    #[must_use]
    pub fn fastl4_profiles(&self) -> TmCollection<Fastl4Profile> {
        TmCollection::new(self.session.clone())
    }

    /// HTTP/2 profile bindings (`ltm/profile/http2`).
    #[must_use]
    pub fn http2_profiles(&self) -> TmCollection<Http2Profile> {
        TmCollection::new(self.session.clone())
    }

    /// OneConnect profile bindings (`ltm/profile/one-connect`).
    #[must_use]
    pub fn one_connect_profiles(&self) -> TmCollection<OneConnectProfile> {
        TmCollection::new(self.session.clone())
    }

    /// Client SSL profile bindings (`ltm/profile/client-ssl`).
    #[must_use]
    pub fn client_ssl_profiles(&self) -> TmCollection<ClientSslProfile> {
        TmCollection::new(self.session.clone())
    }

    /// Server SSL profile bindings (`ltm/profile/server-ssl`).
    #[must_use]
    pub fn server_ssl_profiles(&self) -> TmCollection<ServerSslProfile> {
        TmCollection::new(self.session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigip_core::ObjectPath;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn facade_handlers_share_one_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/pool/~Common~web-pool"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "web-pool"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/node/~Common~node-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "node-1"})))
            .mount(&server)
            .await;

        let session = Session::new(server.uri(), "admin", "secret").unwrap();
        let ltm = Ltm::new(session);
        let pool = ltm.pools().get(&ObjectPath::common("web-pool")).await.unwrap();
        let node = ltm.nodes().get(&ObjectPath::common("node-1")).await.unwrap();
        assert_eq!(pool.name, "web-pool");
        assert_eq!(node.name, "node-1");
    }
}
