//! Traffic profile bindings (`ltm/profile/<type>`).
//!
//! Profile types are sibling collections under `ltm/profile`; the entity
//! types here declare their segment and share the
//! [`TmCollection`](bigip_core::TmCollection) handler.

pub mod client_ssl;
pub mod fastl4;
pub mod http;
pub mod http2;
pub mod one_connect;
pub mod server_ssl;
pub mod tcp;
pub mod udp;

pub use client_ssl::ClientSslProfile;
pub use fastl4::Fastl4Profile;
pub use http::HttpProfile;
pub use http2::Http2Profile;
pub use one_connect::OneConnectProfile;
pub use server_ssl::ServerSslProfile;
pub use tcp::TcpProfile;
pub use udp::UdpProfile;

#[cfg(test)]
mod tests {
    use super::*;
    use bigip_core::{ObjectPath, Session, TmCollection, TmEntity};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn profile_segments() {
        assert_eq!(HttpProfile::RESOURCE, &["profile", "http"]);
        assert_eq!(ClientSslProfile::RESOURCE, &["profile", "client-ssl"]);
        assert_eq!(OneConnectProfile::RESOURCE, &["profile", "one-connect"]);
        assert_eq!(Fastl4Profile::RESOURCE, &["profile", "fastl4"]);
    }

    #[tokio::test]
    async fn get_http_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/profile/http/~Common~http-xff"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "http-xff",
                "partition": "Common",
                "fullPath": "/Common/http-xff",
                "defaultsFrom": "/Common/http",
                "insertXforwardedFor": "enabled",
                "serverAgentName": "BigIP"
            })))
            .mount(&server)
            .await;

        let session = Session::new(server.uri(), "admin", "secret").unwrap();
        let profiles = TmCollection::<HttpProfile>::new(session);
        let profile = profiles.get(&ObjectPath::common("http-xff")).await.unwrap();
        assert_eq!(profile.insert_xforwarded_for.as_deref(), Some("enabled"));
    }

    #[tokio::test]
    async fn update_tcp_profile_uses_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/mgmt/tm/ltm/profile/tcp/~Common~tcp-lan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "tcp-lan",
                "idleTimeout": 600,
                "nagle": "disabled"
            })))
            .mount(&server)
            .await;

        let session = Session::new(server.uri(), "admin", "secret").unwrap();
        let profiles = TmCollection::<TcpProfile>::new(session);
        let profile = TcpProfile {
            name: "tcp-lan".to_string(),
            idle_timeout: Some(600),
            nagle: Some("disabled".to_string()),
            ..TcpProfile::default()
        };
        let updated = profiles
            .update(&ObjectPath::common("tcp-lan"), &profile)
            .await
            .unwrap();
        assert_eq!(updated.idle_timeout, Some(600));
    }
}
