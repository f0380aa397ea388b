//! Local Traffic Manager bindings for the BIG-IP iControl REST API.
//!
//! Provides typed structures and asynchronous handlers for LTM
//! configuration objects: pools and members, nodes, virtual servers and
//! addresses, iRules, SNAT pools, policies, persistence profiles, health
//! monitors, and traffic profiles.

#![deny(missing_docs)]

pub mod client;
pub mod monitor;
pub mod node;
pub mod persistence;
pub mod policy;
pub mod pool;
pub mod profile;
pub mod rule;
pub mod snat_pool;
pub mod virtual_address;
pub mod virtual_server;

pub use client::Ltm;
pub use node::{Node, NodeList, Nodes};
pub use pool::{Pool, PoolList, PoolMember, PoolMemberList, PoolMembers, Pools};
pub use policy::{Policies, Policy, PolicyList};
pub use rule::{Rule, RuleList, Rules};
pub use snat_pool::{SnatPool, SnatPoolList, SnatPools};
pub use virtual_address::{VirtualAddress, VirtualAddressList, VirtualAddresses};
pub use virtual_server::{VirtualServer, VirtualServerList, VirtualServers};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = bigip_core::Result<T>;
