//! Behavioural tests for [`RouteGraph`] edge insertion and routing queries.

use dispatch_core::{Location, Route, RouteGraph, Weight};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

/// World state shared by the route graph scenarios.
#[derive(Debug, Default)]
struct GraphWorld {
    graph: RefCell<RouteGraph>,
    distance: RefCell<Option<f64>>,
    route: RefCell<Option<Route>>,
}

#[fixture]
fn world() -> GraphWorld {
    GraphWorld::default()
}

// --- Given steps ---

#[given("an edge from {from:word} to {to:word} with weight {weight}")]
fn given_edge(world: &GraphWorld, from: String, to: String, weight: f64) {
    let valid = Weight::new(weight).expect("scenario weights are valid");
    world.graph.borrow_mut().add_edge(from, to, valid);
}

// --- When steps ---

#[when("I query the shortest distance from {start:word} to {end:word}")]
fn query_distance(world: &GraphWorld, start: String, end: String) {
    let graph = world.graph.borrow();
    let (origin, target) = (Location::from(start), Location::from(end));
    world.distance.replace(graph.shortest_distance(&origin, &target));
    world.route.replace(graph.shortest_route(&origin, &target));
}

// --- Then steps ---

#[then("the distance is {expected}")]
fn then_distance(world: &GraphWorld, expected: f64) {
    let distance = world.distance.borrow().expect("expected a reachable destination");
    assert!(
        (distance - expected).abs() <= 1e-9,
        "expected distance {expected}, got {distance}"
    );
    let route = world.route.borrow();
    let route = route.as_ref().expect("route accompanies distance");
    assert!((route.distance - distance).abs() <= 1e-9);
}

#[then("the route passes through {via:word}")]
fn then_route_via(world: &GraphWorld, via: String) {
    let route = world.route.borrow();
    let route = route.as_ref().expect("expected a route");
    assert!(
        route.stops.contains(&Location::from(via.as_str())),
        "route {:?} does not pass through {via}",
        route.stops
    );
}

#[then("no route is available")]
fn then_unreachable(world: &GraphWorld) {
    assert_eq!(*world.distance.borrow(), None);
    assert_eq!(*world.route.borrow(), None);
}

#[then("{location:word} has {count} outgoing edges")]
fn then_out_degree(world: &GraphWorld, location: String, count: usize) {
    let graph = world.graph.borrow();
    assert_eq!(graph.out_degree(&Location::from(location)), count);
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/route_graph.feature", name = $title)]
        fn $fn_name(world: GraphWorld) {
            let _ = world;
        }
    };
}

register_scenario!(routing_via_intermediate, "routing through an intermediate location");
register_scenario!(preferring_cheaper_path, "preferring the cheaper indirect path");
register_scenario!(reporting_unreachable, "reporting an unreachable destination");
register_scenario!(reporting_unknown, "reporting an unknown destination");
register_scenario!(keeping_parallel_edges, "keeping parallel edges");
register_scenario!(querying_self, "querying a location against itself");
