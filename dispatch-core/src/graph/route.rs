//! Cheapest paths found by the route graph.

use crate::Location;

/// An ordered path between two locations with its total cost.
///
/// A route from a location to itself holds that single stop and zero
/// distance.
///
/// # Examples
/// ```
/// use dispatch_core::{Location, Route};
///
/// let route = Route::new(vec![Location::from("A"), Location::from("B")], 2.0);
/// assert_eq!(route.origin(), Some(&Location::from("A")));
/// assert_eq!(route.destination(), Some(&Location::from("B")));
/// assert_eq!(route.hops(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Locations visited in order, including both endpoints.
    pub stops: Vec<Location>,
    /// Sum of the weights of the traversed edges.
    pub distance: f64,
}

impl Route {
    /// Construct a route from its stops and total distance.
    #[must_use]
    pub const fn new(stops: Vec<Location>, distance: f64) -> Self {
        Self { stops, distance }
    }

    /// First stop of the route.
    #[must_use]
    pub fn origin(&self) -> Option<&Location> {
        self.stops.first()
    }

    /// Last stop of the route.
    #[must_use]
    pub fn destination(&self) -> Option<&Location> {
        self.stops.last()
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}
