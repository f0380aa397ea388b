//! Persistence profile bindings (`ltm/persistence/<type>`).
//!
//! Persistence profiles live one path segment below `persistence`, so the
//! entity types here plug into the shared [`TmCollection`] handler.

use bigip_core::{Module, TmCollection, TmEntity};
use serde::{Deserialize, Serialize};

/// Cookie persistence profile (`ltm/persistence/cookie`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CookiePersistence {
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
    /// Send the cookie on every response (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_send: Option<String>,
    /// Cookie encryption mode (`disabled`, `preferred`, `required`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_encryption: Option<String>,
    /// Cookie name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    /// Cookie expiration specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    /// Hash length for hash method cookies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<u32>,
    /// Hash offset for hash method cookies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_offset: Option<u32>,
    /// Persist across pools (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_across_pools: Option<String>,
    /// Persist across services (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_across_services: Option<String>,
    /// Persist across virtual servers (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_across_virtuals: Option<String>,
    /// Cookie method (`insert`, `rewrite`, `passive`, `hash`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Mirror persistence records (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror: Option<String>,
    /// Override connection limits (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_connection_limit: Option<String>,
    /// Record timeout in seconds (or `indefinite`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

impl TmEntity for CookiePersistence {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["persistence", "cookie"];
}

/// Source address persistence profile (`ltm/persistence/source-addr`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceAddrPersistence {
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
    /// Hash algorithm (`default`, `carp`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<String>,
    /// Map proxied addresses together (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_proxies: Option<String>,
    /// Source mask applied before matching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    /// Persist across pools (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_across_pools: Option<String>,
    /// Persist across services (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_across_services: Option<String>,
    /// Persist across virtual servers (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_across_virtuals: Option<String>,
    /// Mirror persistence records (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror: Option<String>,
    /// Override connection limits (`enabled`/`disabled`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_connection_limit: Option<String>,
    /// Record timeout in seconds (or `indefinite`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

impl TmEntity for SourceAddrPersistence {
    const MODULE: Module = Module::Ltm;
    const RESOURCE: &'static [&'static str] = &["persistence", "source-addr"];
}

/// Handler alias for cookie persistence profiles.
pub type CookiePersistences = TmCollection<CookiePersistence>;
/// Handler alias for source address persistence profiles.
pub type SourceAddrPersistences = TmCollection<SourceAddrPersistence>;

#[cfg(test)]
mod tests {
    use super::*;
    use bigip_core::{ObjectPath, Session, TmEntity};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn cookie_persistence_uses_typed_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/persistence/cookie/~Common~app-cookie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "app-cookie",
                "partition": "Common",
                "method": "insert",
                "cookieName": "BIGipServer",
                "timeout": "180"
            })))
            .mount(&server)
            .await;

        let session = Session::new(server.uri(), "admin", "secret").unwrap();
        let handler = CookiePersistences::new(session);
        let profile = handler.get(&ObjectPath::common("app-cookie")).await.unwrap();
        assert_eq!(profile.method.as_deref(), Some("insert"));
        assert_eq!(profile.cookie_name.as_deref(), Some("BIGipServer"));
    }

    #[test]
    fn source_addr_segments() {
        assert_eq!(
            SourceAddrPersistence::RESOURCE,
            &["persistence", "source-addr"]
        );
    }
}
