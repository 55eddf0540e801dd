//! Directed, weighted delivery network.
//!
//! [`RouteGraph`] stores an adjacency list per origin location and answers
//! cheapest-path queries between two locations. The graph only grows: edges
//! are appended and never removed or rewritten, and parallel edges between the
//! same pair of locations are kept side by side.

mod route;
mod search;

use std::collections::{BTreeMap, HashMap};

use crate::{Location, Weight};

pub use route::Route;

/// A directed connection between two locations.
///
/// # Examples
/// ```
/// use dispatch_core::{Edge, RouteGraph, Weight};
///
/// # fn main() -> Result<(), dispatch_core::WeightError> {
/// let mut graph = RouteGraph::new();
/// graph.insert(Edge::new("A", "B", Weight::new(1.5)?));
/// assert_eq!(graph.edge_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Origin of the edge.
    pub from: Location,
    /// Destination of the edge.
    pub to: Location,
    /// Cost of travelling the edge.
    pub weight: Weight,
}

impl Edge {
    /// Construct an edge from its endpoints and weight.
    pub fn new(from: impl Into<Location>, to: impl Into<Location>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// An outgoing edge as stored under its origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// Destination of the edge.
    pub to: Location,
    /// Cost of travelling the edge.
    pub weight: Weight,
}

/// Monotonically growing directed graph over [`Location`]s.
///
/// Only locations with at least one outgoing edge own an adjacency entry; a
/// location seen solely as a destination has an out-degree of zero.
///
/// # Examples
/// ```
/// use dispatch_core::{Location, RouteGraph, Weight};
///
/// # fn main() -> Result<(), dispatch_core::WeightError> {
/// let mut graph = RouteGraph::new();
/// graph.add_edge("A", "B", Weight::new(1.0)?);
/// graph.add_edge("B", "C", Weight::new(2.0)?);
/// graph.add_edge("A", "C", Weight::new(5.0)?);
///
/// let route = graph
///     .shortest_route(&Location::from("A"), &Location::from("C"))
///     .expect("C is reachable from A");
/// assert_eq!(route.distance, 3.0);
/// assert_eq!(route.stops.len(), 3);
/// assert_eq!(graph.shortest_distance(&"C".into(), &"A".into()), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteGraph {
    adjacency: HashMap<Location, Vec<Link>>,
    edge_count: usize,
}

impl RouteGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directed edge from `from` to `to`.
    ///
    /// Repeating a call adds a parallel edge rather than replacing the
    /// existing one; routing naturally prefers the cheaper of the two.
    pub fn add_edge(&mut self, from: impl Into<Location>, to: impl Into<Location>, weight: Weight) {
        let origin = from.into();
        let target = to.into();
        log::debug!("adding edge {origin} -> {target} with weight {weight}");
        self.adjacency.entry(origin).or_default().push(Link {
            to: target,
            weight,
        });
        self.edge_count += 1;
    }

    /// Append an [`Edge`]; equivalent to [`RouteGraph::add_edge`].
    pub fn insert(&mut self, edge: Edge) {
        let Edge { from, to, weight } = edge;
        self.add_edge(from, to, weight);
    }

    /// Cheapest total weight of any directed path from `start` to `end`.
    ///
    /// Returns `Some(0.0)` when `start == end`, even for a location the graph
    /// has never seen. Returns `None` when no path exists, including when
    /// `start` has no outgoing edges.
    #[must_use]
    pub fn shortest_distance(&self, start: &Location, end: &Location) -> Option<f64> {
        let distance = search::search(&self.adjacency, start, end).map(|reached| reached.distance);
        match distance {
            Some(d) => log::debug!("shortest distance {start} -> {end} is {d}"),
            None => log::debug!("no route from {start} to {end}"),
        }
        distance
    }

    /// Cheapest path from `start` to `end`, with its stops.
    ///
    /// Reports the same distance as [`RouteGraph::shortest_distance`]. When
    /// several paths tie, which one is returned is unspecified.
    #[must_use]
    pub fn shortest_route(&self, start: &Location, end: &Location) -> Option<Route> {
        search::search(&self.adjacency, start, end).map(search::Reached::into_route)
    }

    /// Outgoing edges of `location` in insertion order.
    #[must_use]
    pub fn edges_from(&self, location: &Location) -> &[Link] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of outgoing edges of `location`.
    #[must_use]
    pub fn out_degree(&self, location: &Location) -> usize {
        self.edges_from(location).len()
    }

    /// Total number of edges, parallel edges included.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `location` appears as an origin or destination of any edge.
    #[must_use]
    pub fn contains(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
            || self
                .adjacency
                .values()
                .flatten()
                .any(|link| &link.to == location)
    }

    /// Every location appearing in the graph, sorted and deduplicated.
    #[must_use]
    pub fn locations(&self) -> Vec<&Location> {
        let mut locations: Vec<&Location> = self
            .adjacency
            .iter()
            .flat_map(|(from, links)| std::iter::once(from).chain(links.iter().map(|l| &l.to)))
            .collect();
        locations.sort_unstable();
        locations.dedup();
        locations
    }

    /// Number of distinct locations appearing in the graph.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations().len()
    }

    /// Ordered snapshot of the adjacency lists, keyed by origin.
    #[must_use]
    pub fn adjacency(&self) -> BTreeMap<Location, Vec<Link>> {
        self.adjacency
            .iter()
            .map(|(from, links)| (from.clone(), links.clone()))
            .collect()
    }
}

impl FromIterator<Edge> for RouteGraph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Edge> for RouteGraph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.insert(edge);
        }
    }
}
