//! Object path handling for BIG-IP configuration objects.
//!
//! Configuration objects are addressed by their `fullPath`, the
//! `/Partition/Name` convention (for example `/Common/web-pool`). Inside
//! request URLs the slashes become tildes (`~Common~web-pool`). This module
//! provides a value type that parses and renders both forms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The default administrative partition.
pub const COMMON_PARTITION: &str = "Common";

/// Identifier for a configuration object, following F5's
/// `/Partition/Name` fullPath convention.
///
/// Names may contain folder components (`/Common/app1/web-pool`) and, for
/// pool members, a service port suffix (`node-1:80`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ObjectPath {
    partition: Option<String>,
    name: String,
}

impl ObjectPath {
    /// Create a path with an explicit partition.
    pub fn new(partition: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            partition: Some(partition.into()),
            name: name.into(),
        }
    }

    /// Create a path in the `Common` partition.
    pub fn common(name: impl Into<String>) -> Self {
        Self::new(COMMON_PARTITION, name)
    }

    /// Create a bare, partition-less path.
    pub fn unpartitioned(name: impl Into<String>) -> Self {
        Self {
            partition: None,
            name: name.into(),
        }
    }

    /// Parse a path from slash form (`/Common/web-pool`), URL form
    /// (`~Common~web-pool`), or a bare name (`web-pool`).
    ///
    /// # Errors
    ///
    /// Returns an error when the input is empty or has an empty component.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.replace('~', "/");
        let trimmed = normalized.strip_prefix('/').unwrap_or(&normalized);
        if trimmed.is_empty() {
            return Err(Error::InvalidObjectPath(input.to_string()));
        }

        match trimmed.split_once('/') {
            Some((partition, name)) => {
                if partition.is_empty() || name.is_empty() || name.ends_with('/') {
                    return Err(Error::InvalidObjectPath(input.to_string()));
                }
                Ok(Self::new(partition, name))
            }
            None => Ok(Self::unpartitioned(trimmed)),
        }
    }

    /// The partition component, when present.
    #[must_use]
    pub fn partition(&self) -> Option<&str> {
        self.partition.as_deref()
    }

    /// The object name (including folder components, if any).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the tilde-separated form used inside request URLs.
    #[must_use]
    pub fn url_segment(&self) -> String {
        match &self.partition {
            Some(partition) => format!("~{partition}~{}", self.name.replace('/', "~")),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.partition {
            Some(partition) => write!(f, "/{partition}/{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for ObjectPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<ObjectPath> for String {
    fn from(path: ObjectPath) -> Self {
        path.to_string()
    }
}

impl TryFrom<String> for ObjectPath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}
