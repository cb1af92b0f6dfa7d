//! Endpoint addresses.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use url::Url;

/// An address submitted to a race.
///
/// The address is kept verbatim. It is not parsed up front, so a malformed
/// address behaves like any other endpoint that never answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(Arc<str>);

impl Endpoint {
    /// Create an endpoint from any address string.
    pub fn new(addr: impl AsRef<str>) -> Self {
        Self(Arc::from(addr.as_ref()))
    }

    /// The address as submitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Endpoint {
    fn from(addr: &str) -> Self {
        Self::new(addr)
    }
}

impl From<String> for Endpoint {
    fn from(addr: String) -> Self {
        Self(Arc::from(addr))
    }
}

impl From<&String> for Endpoint {
    fn from(addr: &String) -> Self {
        Self::new(addr)
    }
}

impl From<Url> for Endpoint {
    fn from(url: Url) -> Self {
        Self::from(String::from(url))
    }
}

impl From<&Url> for Endpoint {
    fn from(url: &Url) -> Self {
        Self::new(url.as_str())
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
