//! Single-pair cheapest-path search over the adjacency lists.
//!
//! The frontier is a binary heap of `(distance, location)` entries. Improved
//! distances are pushed as fresh entries instead of being decreased in place;
//! stale entries are discarded when popped because their location has already
//! been finalised.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::{Link, Route};
use crate::Location;

/// Entry in the search frontier.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<'a> {
    distance: f64,
    location: &'a Location,
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default).
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.location.cmp(self.location))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

/// Outcome of a search that reached its destination.
#[derive(Debug)]
pub(super) struct Reached<'a> {
    pub(super) distance: f64,
    start: &'a Location,
    end: &'a Location,
    predecessors: HashMap<&'a Location, &'a Location>,
}

impl Reached<'_> {
    /// Walk predecessor links back from the destination.
    pub(super) fn into_route(self) -> Route {
        let mut stops = vec![self.end.clone()];
        let mut cursor = self.end;
        while cursor != self.start {
            let Some(previous) = self.predecessors.get(cursor).copied() else {
                break;
            };
            stops.push(previous.clone());
            cursor = previous;
        }
        stops.reverse();
        Route::new(stops, self.distance)
    }
}

/// Run the search from `start`, stopping as soon as `end` is finalised.
///
/// Returns `None` when the frontier drains without reaching `end`. Locations
/// absent from `adjacency` have no outgoing edges; locations never reached
/// keep an implicit infinite distance, so a total that overflows to infinity
/// never counts as an improvement.
#[expect(
    clippy::float_arithmetic,
    reason = "edge weights are real-valued travel costs"
)]
pub(super) fn search<'a>(
    adjacency: &'a HashMap<Location, Vec<Link>>,
    start: &'a Location,
    end: &'a Location,
) -> Option<Reached<'a>> {
    let mut tentative: HashMap<&Location, f64> = HashMap::from([(start, 0.0)]);
    let mut predecessors = HashMap::new();
    let mut finalised = HashSet::new();
    let mut frontier = BinaryHeap::from([FrontierEntry {
        distance: 0.0,
        location: start,
    }]);

    while let Some(FrontierEntry { distance, location }) = frontier.pop() {
        if !finalised.insert(location) {
            continue;
        }
        if location == end {
            return Some(Reached {
                distance,
                start,
                end,
                predecessors,
            });
        }
        let Some(links) = adjacency.get(location) else {
            continue;
        };
        for link in links {
            let candidate = distance + link.weight.get();
            let current = tentative.get(&link.to).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                tentative.insert(&link.to, candidate);
                predecessors.insert(&link.to, location);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    location: &link.to,
                });
            }
        }
    }
    None
}
