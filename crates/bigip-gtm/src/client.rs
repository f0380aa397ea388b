//! GTM module facade.

use bigip_core::{Session, TmCollection};

use crate::monitor::{
    BigipMonitor, ExternalMonitor, GatewayIcmpMonitor, HttpMonitor, HttpsMonitor,
    TcpHalfOpenMonitor, TcpMonitor, UdpMonitor,
};

/// Entry point for the Global Traffic Manager module.
#[derive(Debug, Clone)]
pub struct Gtm {
    session: Session,
}

impl Gtm {
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

    /// HTTP monitor bindings (`gtm/monitor/http`).
    #[must_use]
    pub fn http_monitors(&self) -> TmCollection<HttpMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// HTTPS monitor bindings (`gtm/monitor/https`).
    #[must_use]
    pub fn https_monitors(&self) -> TmCollection<HttpsMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// TCP monitor bindings (`gtm/monitor/tcp`).
    #[must_use]
    pub fn tcp_monitors(&self) -> TmCollection<TcpMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// TCP half-open monitor bindings (`gtm/monitor/tcp-half-open`).
    #[must_use]
    pub fn tcp_half_open_monitors(&self) -> TmCollection<TcpHalfOpenMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// UDP monitor bindings (`gtm/monitor/udp`).
    #[must_use]
    pub fn udp_monitors(&self) -> TmCollection<UdpMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// Gateway ICMP monitor bindings (`gtm/monitor/gateway-icmp`).
    #[must_use]
    pub fn gateway_icmp_monitors(&self) -> TmCollection<GatewayIcmpMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// External monitor bindings (`gtm/monitor/external`).
    #[must_use]
    pub fn external_monitors(&self) -> TmCollection<ExternalMonitor> {
        TmCollection::new(self.session.clone())
    }

    /// BIG-IP monitor bindings (`gtm/monitor/bigip`).
    #[must_use]
    pub fn bigip_monitors(&self) -> TmCollection<BigipMonitor> {
        TmCollection::new(self.session.clone())
    }
}
