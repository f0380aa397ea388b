//! Request endpoint construction.
//!
//! Every operation in the API is addressed by a URL assembled from fixed
//! segments: the `/mgmt` prefix, a category (`tm` for traffic management
//! configuration, `shared` for platform services such as token login), a
//! module name (`ltm`, `gtm`, `util`), a resource, optional sub-resources,
//! and an optional object instance. The [`Endpoint`] builder mirrors that
//! chain and renders the final request path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::ObjectPath;

/// Traffic management modules exposed under `/mgmt/tm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    /// Local Traffic Manager (pools, virtual servers, nodes, profiles)
    Ltm,
    /// Global Traffic Manager (DNS load balancing monitors)
    Gtm,
    /// Utility endpoints (bash and friends)
    Util,
}

impl Module {
    /// Returns the module name as it appears in request paths.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ltm => "ltm",
            Self::Gtm => "gtm",
            Self::Util => "util",
        }
    }

    /// Returns all known modules.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ltm, Self::Gtm, Self::Util]
    }
}

impl FromStr for Module {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ltm" => Ok(Self::Ltm),
            "gtm" => Ok(Self::Gtm),
            "util" => Ok(Self::Util),
            _ => Err(Error::InvalidEndpoint(format!("Unknown module: {s}"))),
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builder for iControl REST request paths.
///
/// Segments accumulate in call order, so sub-resources can appear either
/// before an instance (`ltm/monitor/http/~Common~mon`) or after one
/// (`ltm/pool/~Common~p/members/~Common~n:80`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    /// Start a path under `/mgmt/tm/<module>`.
    #[must_use]
    pub fn tm(module: Module) -> Self {
        Self {
            segments: vec![
                "mgmt".to_string(),
                "tm".to_string(),
                module.name().to_string(),
            ],
        }
    }

    /// Start a path under `/mgmt/shared` (platform services).
    #[must_use]
    pub fn shared() -> Self {
        Self {
            segments: vec!["mgmt".to_string(), "shared".to_string()],
        }
    }

    /// Append the resource segment (`pool`, `virtual`, `monitor`, ...).
    #[must_use]
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.segments.push(resource.into());
        self
    }

    /// Append a sub-resource segment (`members`, a monitor type, ...).
    #[must_use]
    pub fn sub_resource(mut self, sub_resource: impl Into<String>) -> Self {
        self.segments.push(sub_resource.into());
        self
    }

    /// Append an object instance segment in its URL (tilde) form.
    #[must_use]
    pub fn instance(mut self, path: &ObjectPath) -> Self {
        self.segments.push(path.url_segment());
        self
    }

    /// Append the `stats` segment.
    #[must_use]
    pub fn stats(mut self) -> Self {
        self.segments.push("stats".to_string());
        self
    }

    /// Render the request path, relative to the device base URL.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_names() {
        assert_eq!(Module::Ltm.name(), "ltm");
        assert_eq!(Module::Gtm.name(), "gtm");
        assert_eq!(Module::Util.name(), "util");
        assert_eq!(Module::all().len(), 3);
    }

    #[test]
    fn module_from_str() {
        assert_eq!("LTM".parse::<Module>().unwrap(), Module::Ltm);
        assert_eq!("gtm".parse::<Module>().unwrap(), Module::Gtm);
        assert!("apm".parse::<Module>().is_err());
    }

    #[test]
    fn collection_path() {
        let endpoint = Endpoint::tm(Module::Ltm).resource("pool");
        assert_eq!(endpoint.path(), "mgmt/tm/ltm/pool");
        assert_eq!(endpoint.to_string(), "/mgmt/tm/ltm/pool");
    }

    #[test]
    fn instance_path() {
        let endpoint = Endpoint::tm(Module::Ltm)
            .resource("pool")
            .instance(&ObjectPath::common("web-pool"));
        assert_eq!(endpoint.path(), "mgmt/tm/ltm/pool/~Common~web-pool");
    }

    #[test]
    fn sub_resource_before_instance() {
        let endpoint = Endpoint::tm(Module::Gtm)
            .resource("monitor")
            .sub_resource("http")
            .instance(&ObjectPath::common("dns-http"));
        assert_eq!(endpoint.path(), "mgmt/tm/gtm/monitor/http/~Common~dns-http");
    }

    #[test]
    fn sub_resource_after_instance() {
        let endpoint = Endpoint::tm(Module::Ltm)
            .resource("pool")
            .instance(&ObjectPath::common("web-pool"))
            .sub_resource("members")
            .instance(&ObjectPath::common("node-1:80"));
        assert_eq!(
            endpoint.path(),
            "mgmt/tm/ltm/pool/~Common~web-pool/members/~Common~node-1:80"
        );
    }

    #[test]
    fn stats_path() {
        let endpoint = Endpoint::tm(Module::Ltm)
            .resource("pool")
            .instance(&ObjectPath::common("web-pool"))
            .sub_resource("members")
            .stats();
        assert_eq!(
            endpoint.path(),
            "mgmt/tm/ltm/pool/~Common~web-pool/members/stats"
        );
    }

    #[test]
    fn shared_path() {
        let endpoint = Endpoint::shared().resource("authn").sub_resource("login");
        assert_eq!(endpoint.path(), "mgmt/shared/authn/login");
    }
}
