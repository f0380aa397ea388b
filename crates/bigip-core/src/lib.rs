//! # bigip-core
//!
//! Core types and utilities for talking to the F5 BIG-IP iControl REST API.
//!
//! This crate provides the shared session, endpoint construction, error
//! handling, and statistics models used by the per-module binding crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status mapping
//! - [`session`] - Shared device session and generic JSON helpers
//! - [`endpoint`] - Request path construction (`/mgmt/tm/...`)
//! - [`path`] - The `/Partition/Name` object path convention
//! - [`collection`] - Generic handler for typed sub-collections
//! - [`config`] - Device configuration structures
//! - [`client`] - HTTP client configuration
//! - [`stats`] - Nested statistics models

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod collection;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod path;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use collection::{TmCollection, TmEntity, TmList};
pub use endpoint::{Endpoint, Module};
pub use error::{Error, Result};
pub use path::ObjectPath;
pub use session::{Session, SessionBuilder};
