//! Global Traffic Manager monitor bindings for the BIG-IP iControl REST API.
//!
//! GTM health monitors probe wide-IP pool members from the DNS load
//! balancing side. Each protocol variant is a typed collection under
//! `gtm/monitor/<type>`.

#![deny(missing_docs)]

pub mod client;
pub mod monitor;

pub use client::Gtm;
pub use monitor::{
    BigipMonitor, ExternalMonitor, GatewayIcmpMonitor, HttpMonitor, HttpsMonitor,
    TcpHalfOpenMonitor, TcpMonitor, UdpMonitor,
};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = bigip_core::Result<T>;
