//! Lock-guarded handles for sharing the graph and queue between handlers.
//!
//! Each handle is cheap to clone and points at one owned instance. The graph
//! sits behind a reader-writer lock so that cheapest-path queries run in
//! parallel while edge insertion is exclusive. The queue sits behind a mutex
//! so that enqueue and dequeue observe a single total order. The two handles
//! never share a lock.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::{Link, Location, Order, OrderQueue, Route, RouteGraph, Weight};

/// Shared handle to a [`RouteGraph`].
///
/// # Examples
/// ```
/// use dispatch_core::{SharedRouteGraph, Weight};
///
/// # fn main() -> Result<(), dispatch_core::WeightError> {
/// let graph = SharedRouteGraph::default();
/// let writer = graph.clone();
/// writer.add_edge("A", "B", Weight::new(2.0)?);
/// assert_eq!(graph.shortest_distance(&"A".into(), &"B".into()), Some(2.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedRouteGraph {
    inner: Arc<RwLock<RouteGraph>>,
}

impl SharedRouteGraph {
    /// Wrap an existing graph.
    #[must_use]
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Run `f` with shared access to the graph.
    pub fn read<R>(&self, f: impl FnOnce(&RouteGraph) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access to the graph.
    ///
    /// Readers never observe the graph while `f` is running.
    pub fn update<R>(&self, f: impl FnOnce(&mut RouteGraph) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Append a directed edge under the write lock.
    pub fn add_edge(&self, from: impl Into<Location>, to: impl Into<Location>, weight: Weight) {
        self.update(|graph| graph.add_edge(from, to, weight));
    }

    /// Cheapest distance from `start` to `end` under the read lock.
    #[must_use]
    pub fn shortest_distance(&self, start: &Location, end: &Location) -> Option<f64> {
        self.read(|graph| graph.shortest_distance(start, end))
    }

    /// Cheapest path from `start` to `end` under the read lock.
    #[must_use]
    pub fn shortest_route(&self, start: &Location, end: &Location) -> Option<Route> {
        self.read(|graph| graph.shortest_route(start, end))
    }

    /// Ordered snapshot of the adjacency lists.
    #[must_use]
    pub fn adjacency(&self) -> BTreeMap<Location, Vec<Link>> {
        self.read(RouteGraph::adjacency)
    }

    /// Copy of the current graph.
    #[must_use]
    pub fn snapshot(&self) -> RouteGraph {
        self.read(Clone::clone)
    }
}

/// Shared handle to an [`OrderQueue`].
///
/// # Examples
/// ```
/// use dispatch_core::{Order, SharedOrderQueue};
///
/// let queue = SharedOrderQueue::default();
/// let pending = queue.enqueue(Order::new("o-1", "Depot"));
/// assert_eq!(pending.len(), 1);
/// assert_eq!(queue.dequeue_next(), Some(Order::new("o-1", "Depot")));
/// assert_eq!(queue.dequeue_next(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedOrderQueue {
    inner: Arc<Mutex<OrderQueue>>,
}

impl SharedOrderQueue {
    /// Wrap an existing queue.
    #[must_use]
    pub fn new(queue: OrderQueue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    /// Append `order` and return the queue contents as left by this call.
    pub fn enqueue(&self, order: Order) -> Vec<Order> {
        let mut queue = self.inner.lock();
        queue.enqueue(order);
        queue.snapshot()
    }

    /// Remove and return the oldest pending order, if any.
    ///
    /// Never waits for an order to arrive.
    #[must_use]
    pub fn dequeue_next(&self) -> Option<Order> {
        self.inner.lock().dequeue_next()
    }

    /// Copy of the pending orders from oldest to newest.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Order> {
        self.inner.lock().snapshot()
    }

    /// Number of pending orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no orders are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
