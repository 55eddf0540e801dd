//! Facade crate for the dispatch engine.
//!
//! This crate re-exports the core domain types: the route graph, the order
//! queue, their validated value types and the lock-guarded shared handles.
//! The HTTP service lives in the `dispatch-server` crate.
//!
//! ```
//! use dispatch_engine::{Order, OrderQueue, RouteGraph, Weight};
//!
//! # fn main() -> Result<(), dispatch_engine::WeightError> {
//! let mut graph = RouteGraph::new();
//! graph.add_edge("Depot", "Quay", Weight::new(2.5)?);
//! assert_eq!(graph.shortest_distance(&"Depot".into(), &"Quay".into()), Some(2.5));
//!
//! let mut queue = OrderQueue::new();
//! queue.enqueue(Order::new("o-1", "Quay"));
//! assert_eq!(queue.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use dispatch_core::{
    Edge, Link, Location, Order, OrderId, OrderQueue, Route, RouteGraph, SharedOrderQueue,
    SharedRouteGraph, Weight, WeightError,
};

#[cfg(feature = "test-support")]
pub use dispatch_core::test_support;
