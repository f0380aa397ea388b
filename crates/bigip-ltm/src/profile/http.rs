//! HTTP profile (`ltm/profile/http`).

use bigip_core::{Module, TmEntity};
use serde::{Deserialize, Serialize};

/// An HTTP traffic profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HttpProfile {
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
    /// Trust `X-Forwarded-For` from upstream devices (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_xff: Option<String>,
    /// Application service the profile belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
    /// Realm sent with 401 challenges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_auth_realm: Option<String>,
    /// Cookies to encrypt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt_cookies: Option<Vec<String>>,
    /// Host sent when no pool member is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_host: Option<String>,
    /// Status codes that trigger the fallback host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_status_codes: Option<Vec<String>>,
    /// Header to erase from requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_erase: Option<String>,
    /// Header to insert into requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_insert: Option<String>,
    /// Insert `X-Forwarded-For` (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_xforwarded_for: Option<String>,
    /// Linear white space separator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lws_separator: Option<String>,
    /// Linear white space maximum column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lws_width: Option<u32>,
    /// OneConnect header transformations (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oneconnect_transformations: Option<String>,
    /// Proxy mode (`reverse`, `explicit`, `transparent`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<String>,
    /// Rewrite redirects (`none`, `all`, `matching`, `nodes`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_rewrite: Option<String>,
    /// Request chunking behavior (`preserve`, `rechunk`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_chunking: Option<String>,
    /// Response chunking behavior (`preserve`, `rechunk`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_chunking: Option<String>,
    /// Headers allowed in responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_headers_permitted: Option<Vec<String>>,
    /// Value for the `Server` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_agent_name: Option<String>,
    /// Host name inserted into `Via` headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_host_name: Option<String>,
    /// `Via` header handling for requests (`preserve`, `append`, `remove`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_request: Option<String>,
    /// `Via` header handling for responses (`preserve`, `append`, `remove`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_response: Option<String>,
    /// Alternative `X-Forwarded-For` header names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xff_alternative_names: Option<Vec<String>>,
}

impl TmEntity for HttpProfile {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["profile", "http"];
}
