//! GTM health monitor bindings (`gtm/monitor/<type>`).
//!
//! Monitor types are sibling collections under `gtm/monitor`; the entity
//! types here declare their segment and share the
//! [`TmCollection`](bigip_core::TmCollection) handler.

pub mod bigip;
pub mod external;
pub mod gateway_icmp;
pub mod http;
pub mod https;
pub mod tcp;
pub mod tcp_half_open;
pub mod udp;

pub use bigip::BigipMonitor;
pub use external::ExternalMonitor;
pub use gateway_icmp::GatewayIcmpMonitor;
pub use http::HttpMonitor;
pub use https::HttpsMonitor;
pub use tcp::TcpMonitor;
pub use tcp_half_open::TcpHalfOpenMonitor;
pub use udp::UdpMonitor;

#[cfg(test)]
mod tests {
    use super::*;
    use bigip_core::{ObjectPath, Session, TmCollection, TmEntity};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn monitor_segments() {
        assert_eq!(HttpMonitor::RESOURCE, &["monitor", "http"]);
        assert_eq!(TcpHalfOpenMonitor::RESOURCE, &["monitor", "tcp-half-open"]);
        assert_eq!(GatewayIcmpMonitor::RESOURCE, &["monitor", "gateway-icmp"]);
        assert_eq!(BigipMonitor::RESOURCE, &["monitor", "bigip"]);
    }

    #[tokio::test]
    async fn create_tcp_half_open_monitor() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mgmt/tm/gtm/monitor/tcp-half-open"))
            .and(body_json(json!({
                "name": "dc-probe",
                "interval": 30,
                "probeAttempts": 3
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "dc-probe",
                "fullPath": "/Common/dc-probe",
                "defaultsFrom": "/Common/tcp_half_open",
                "interval": 30,
                "probeAttempts": 3
            })))
            .mount(&server)
            .await;

        let session = Session::new(server.uri(), "admin", "secret").unwrap();
        let monitors = TmCollection::<TcpHalfOpenMonitor>::new(session);
        let monitor = TcpHalfOpenMonitor {
            name: "dc-probe".to_string(),
            interval: Some(30),
            probe_attempts: Some(3),
            ..TcpHalfOpenMonitor::default()
        };
        let created = monitors.create(&monitor).await.unwrap();
        assert_eq!(
            created.defaults_from.as_deref(),
            Some("/Common/tcp_half_open")
        );
    }

    #[tokio::test]
    async fn external_monitor_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/gtm/monitor/external/~Common~custom-probe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "custom-probe",
                "run": "/Common/probe-script",
                "args": "--target dns",
                "interval": 30,
                "timeout": 120
            })))
            .mount(&server)
            .await;

        let session = Session::new(server.uri(), "admin", "secret").unwrap();
        let monitors = TmCollection::<ExternalMonitor>::new(session);
        let monitor = monitors
            .get(&ObjectPath::common("custom-probe"))
            .await
            .unwrap();
        assert_eq!(monitor.run.as_deref(), Some("/Common/probe-script"));
        assert_eq!(monitor.args.as_deref(), Some("--target dns"));
    }
}
