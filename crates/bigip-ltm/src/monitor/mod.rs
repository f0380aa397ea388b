//! Health monitor bindings (`ltm/monitor/<type>`).
//!
//! Every monitor type is a sibling collection under `ltm/monitor`; the
//! entity types here declare their segment and share the
//! [`TmCollection`](bigip_core::TmCollection) handler.

pub mod gateway_icmp;
pub mod http;
pub mod https;
pub mod tcp;
pub mod udp;

pub use gateway_icmp::GatewayIcmpMonitor;
pub use http::HttpMonitor;
pub use https::HttpsMonitor;
pub use tcp::TcpMonitor;
pub use udp::UdpMonitor;
