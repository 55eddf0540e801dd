//! Core domain types for the dispatch engine.
//!
//! The crate owns the two in-memory components of the dispatch service: the
//! [`RouteGraph`], a monotonically growing directed graph answering
//! cheapest-path queries, and the [`OrderQueue`], a FIFO of pending orders.
//! The two components are independent; neither refers to the other.
//!
//! Values crossing the boundary are validated on construction. A [`Weight`]
//! can only hold a finite, non-negative travel cost, so edge insertion itself
//! never fails.
//!
//! # Examples
//!
//! ```
//! use dispatch_core::{RouteGraph, Weight};
//!
//! # fn main() -> Result<(), dispatch_core::WeightError> {
//! let mut graph = RouteGraph::new();
//! graph.add_edge("Warehouse", "North", Weight::new(4.0)?);
//! graph.add_edge("Warehouse", "South", Weight::new(10.0)?);
//! graph.add_edge("North", "South", Weight::new(3.0)?);
//!
//! assert_eq!(graph.shortest_distance(&"Warehouse".into(), &"South".into()), Some(7.0));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod graph;
mod location;
mod order;
pub mod queue;
pub mod shared;
mod weight;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use graph::{Edge, Link, Route, RouteGraph};
pub use location::Location;
pub use order::{Order, OrderId};
pub use queue::OrderQueue;
pub use shared::{SharedOrderQueue, SharedRouteGraph};
pub use weight::{Weight, WeightError};
