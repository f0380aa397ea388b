//! OneConnect profile (`ltm/profile/one-connect`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// A OneConnect (server-side connection reuse) profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OneConnectProfile {
    /// Object name
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
    /// Parent profile full path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults_from: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Application service the profile belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
    /// Idle timeout override (`disabled` or seconds as string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout_override: Option<String>,
    /// Connection limit enforcement (`none`, `idle`, `strict`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_type: Option<String>,
    /// Maximum age of reusable connections in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    /// Maximum times a connection may be reused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_reuse: Option<u32>,
    /// Maximum pooled connections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
    /// Share pooled connections between virtual servers (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_pools: Option<String>,
    /// Source mask used to group reusable connections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_mask: Option<String>,
}

impl TmEntity for OneConnectProfile {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["profile", "one-connect"];
}
