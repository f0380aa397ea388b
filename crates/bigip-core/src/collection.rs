//! Generic handler for typed sub-collections.
//!
//! Monitor and profile families expose dozens of near-identical bindings
//! that differ only in the entity field set and one path segment
//! (`ltm/monitor/http`, `ltm/profile/tcp`, `gtm/monitor/udp`, ...). Instead
//! of repeating the five CRUD methods per type, each entity type declares
//! its location via [`TmEntity`] and shares the [`TmCollection`] handler.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::endpoint::{Endpoint, Module};
use crate::error::Result;
use crate::path::ObjectPath;
use crate::session::Session;

/// A configuration entity living at a fixed location in the `tm` tree.
pub trait TmEntity: Serialize + DeserializeOwned {
    /// Module the entity belongs to.
    const MODULE: Module;
    /// Path segments under the module, e.g. `["monitor", "http"]`.
    const RESOURCE: &'static [&'static str];
}

/// Collection wrapper shared by the typed sub-collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TmList<T> {
    /// Collection kind reported by the device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Self link of the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// The entities
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// CRUD handler for a [`TmEntity`] collection.
#[derive(Debug, Clone)]
pub struct TmCollection<T> {
    session: Session,
    _entity: PhantomData<fn() -> T>,
}

impl<T: TmEntity> TmCollection<T> {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            _entity: PhantomData,
        }
    }

    fn endpoint() -> Endpoint {
        let mut endpoint = Endpoint::tm(T::MODULE);
        for segment in T::RESOURCE {
            endpoint = endpoint.resource(*segment);
        }
        endpoint
    }

    /// List all entities in the collection.
    pub async fn list(&self) -> Result<TmList<T>> {
        self.session.get_json(&Self::endpoint()).await
    }

    /// Fetch a single entity by full path.
    pub async fn get(&self, id: &ObjectPath) -> Result<T> {
        self.session.get_json(&Self::endpoint().instance(id)).await
    }

    /// Create an entity, returning the stored object.
    pub async fn create(&self, item: &T) -> Result<T> {
        self.session.post_json(&Self::endpoint(), item).await
    }

    /// Replace an entity, returning the stored object.
    pub async fn update(&self, id: &ObjectPath, item: &T) -> Result<T> {
        self.session
            .put_json(&Self::endpoint().instance(id), item)
            .await
    }

    /// Delete an entity by full path.
    pub async fn delete(&self, id: &ObjectPath) -> Result<()> {
        self.session.delete(&Self::endpoint().instance(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct FakeMonitor {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interval: Option<u32>,
    }

    impl TmEntity for FakeMonitor {
        const MODULE: Module = Module::Ltm;
        const RESOURCE: &'static [&'static str] = &["monitor", "fake"];
    }

    #[tokio::test]
    async fn list_hits_typed_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mgmt/tm/ltm/monitor/fake"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "tm:ltm:monitor:fake:fakecollectionstate",
                "items": [{"name": "probe", "interval": 5}]
            })))
            .mount(&server)
            .await;

        let session = Session::new(server.uri(), "admin", "secret").unwrap();
        let collection = TmCollection::<FakeMonitor>::new(session);
        let list = collection.list().await.unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].interval, Some(5));
    }

    #[tokio::test]
    async fn delete_hits_instance_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/mgmt/tm/ltm/monitor/fake/~Common~probe"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let session = Session::new(server.uri(), "admin", "secret").unwrap();
        let collection = TmCollection::<FakeMonitor>::new(session);
        collection
            .delete(&ObjectPath::common("probe"))
            .await
            .unwrap();
    }

    #[test]
    fn list_tolerates_missing_items() {
        let list: TmList<FakeMonitor> = serde_json::from_value(json!({
            "kind": "tm:ltm:monitor:fake:fakecollectionstate"
        }))
        .unwrap();
        assert!(list.items.is_empty());
    }
}
