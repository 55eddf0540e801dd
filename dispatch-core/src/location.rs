//! Location identifiers naming nodes of the route graph.

use std::borrow::Borrow;
use std::fmt;

/// Opaque identifier for a place that deliveries start from or arrive at.
///
/// Locations are never declared up front; a location exists as soon as it
/// appears as an endpoint of an edge or in an order.
///
/// # Examples
///
/// ```
/// use dispatch_core::Location;
///
/// let depot = Location::from("Warehouse");
/// assert_eq!(depot.as_str(), "Warehouse");
/// assert_eq!(depot.to_string(), "Warehouse");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Location(String);

impl Location {
    /// Create a location from any string-like name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the location name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    fn locations_compare_by_name() {
        assert_eq!(Location::from("A"), Location::new(String::from("A")));
        assert!(Location::from("A") < Location::from("B"));
    }

    #[rstest]
    fn map_lookups_accept_plain_strings() {
        let mut map = HashMap::new();
        map.insert(Location::from("North"), 1);
        assert_eq!(map.get("North"), Some(&1));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_bare_string() {
        let json = serde_json::to_string(&Location::from("South")).expect("serialise location");
        assert_eq!(json, "\"South\"");
    }
}
