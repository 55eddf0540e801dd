//! Request and response bodies.
//!
//! Multi-word fields use camelCase on the wire.

use std::collections::BTreeMap;

use dispatch_core::{Link, Location, Order};
use serde::{Deserialize, Serialize};

pub(super) const ORDER_ADDED: &str = "Order added successfully";
pub(super) const PROCESSING_ORDER: &str = "Processing order";
pub(super) const NO_ORDERS: &str = "No orders to process";
pub(super) const ROUTE_ADDED: &str = "Route added successfully";
pub(super) const ROUTE_CALCULATED: &str = "Shortest route calculated";
pub(super) const NO_ROUTE: &str = "No route available between these locations";

/// Reply to `POST /add-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderResponse {
    /// Confirmation text.
    pub message: String,
    /// Pending orders, oldest first, as left by this request.
    pub orders_queue: Vec<Order>,
}

/// Reply to `POST /process-order`.
///
/// `order` is absent when the queue was empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessOrderResponse {
    /// Outcome text.
    pub message: String,
    /// The order taken from the queue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// Body of `POST /add-route`.
///
/// The weight arrives as a plain number and is validated by the handler so
/// that a bad value gets its own error code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRouteRequest {
    /// Origin of the route.
    pub from: Location,
    /// Destination of the route.
    pub to: Location,
    /// Travel cost.
    pub weight: f64,
}

/// Reply to `POST /add-route`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRouteResponse {
    /// Confirmation text.
    pub message: String,
    /// Adjacency lists keyed by origin, as left by this request.
    pub graph: BTreeMap<Location, Vec<Link>>,
}

/// Query of `GET /shortest-route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestRouteQuery {
    /// Where the delivery starts.
    pub start: Location,
    /// Where the delivery ends.
    pub end: Location,
}

/// Reply to `GET /shortest-route`.
///
/// `distance` and `path` are both present when a route exists and both
/// absent otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestRouteResponse {
    /// Outcome text.
    pub message: String,
    /// Cheapest total weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Stops along one cheapest route, endpoints included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Location>>,
}

/// Reply to `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
}
