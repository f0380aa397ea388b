//! Utility endpoint bindings for the BIG-IP iControl REST API.
//!
//! The `util` module exposes administrative helpers; the one bound here is
//! the bash command runner.

#![deny(missing_docs)]

pub mod bash;

pub use bash::{shell_quote, Bash, BashCommand};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = bigip_core::Result<T>;
