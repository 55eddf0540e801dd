//! Fixtures shared by unit tests and by dependent crates' tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use crate::{Edge, RouteGraph, Weight};

/// Build an [`Edge`], panicking on an invalid weight.
///
/// # Panics
///
/// Panics when `weight` is negative or not finite.
#[must_use]
pub fn edge(from: &str, to: &str, weight: f64) -> Edge {
    match Weight::new(weight) {
        Ok(weight) => Edge::new(from, to, weight),
        Err(err) => panic!("invalid test weight {weight}: {err}"),
    }
}

/// The three-location depot network: `Warehouse -> North = 4`,
/// `Warehouse -> South = 10`, `North -> South = 3`.
#[must_use]
pub fn depot_graph() -> RouteGraph {
    [
        edge("Warehouse", "North", 4.0),
        edge("Warehouse", "South", 10.0),
        edge("North", "South", 3.0),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depot_graph_routes_through_north() {
        let graph = depot_graph();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.shortest_distance(&"Warehouse".into(), &"South".into()),
            Some(7.0)
        );
    }

    #[test]
    #[should_panic(expected = "invalid test weight")]
    fn edge_rejects_negative_weight() {
        let _edge = edge("A", "B", -1.0);
    }
}
