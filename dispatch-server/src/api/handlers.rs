//! Request handlers.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use dispatch_core::{Order, Weight};

use super::AppState;
use super::dto::{
    AddOrderResponse, AddRouteRequest, AddRouteResponse, HealthResponse, NO_ORDERS, NO_ROUTE,
    ORDER_ADDED, PROCESSING_ORDER, ProcessOrderResponse, ROUTE_ADDED, ROUTE_CALCULATED,
    ShortestRouteQuery, ShortestRouteResponse,
};
use super::error::ApiError;

/// `POST /add-order`: append an order to the queue.
pub(super) async fn add_order(
    State(state): State<AppState>,
    payload: Result<Json<Order>, JsonRejection>,
) -> Result<Json<AddOrderResponse>, ApiError> {
    let Json(order) = payload?;
    tracing::info!(order_id = %order.order_id, location = %order.customer_location, "order queued");
    let orders_queue = state.orders.enqueue(order);
    Ok(Json(AddOrderResponse {
        message: ORDER_ADDED.to_owned(),
        orders_queue,
    }))
}

/// `POST /process-order`: take the oldest pending order, if any.
pub(super) async fn process_order(State(state): State<AppState>) -> Json<ProcessOrderResponse> {
    let response = match state.orders.dequeue_next() {
        Some(order) => {
            tracing::info!(order_id = %order.order_id, "processing order");
            ProcessOrderResponse {
                message: PROCESSING_ORDER.to_owned(),
                order: Some(order),
            }
        }
        None => ProcessOrderResponse {
            message: NO_ORDERS.to_owned(),
            order: None,
        },
    };
    Json(response)
}

/// `POST /add-route`: register a directed edge and echo the graph.
pub(super) async fn add_route(
    State(state): State<AppState>,
    payload: Result<Json<AddRouteRequest>, JsonRejection>,
) -> Result<Json<AddRouteResponse>, ApiError> {
    let Json(AddRouteRequest { from, to, weight }) = payload?;
    let cost = Weight::new(weight)?;
    tracing::info!(%from, %to, %cost, "route added");
    let graph = state.graph.update(|network| {
        network.add_edge(from, to, cost);
        network.adjacency()
    });
    Ok(Json(AddRouteResponse {
        message: ROUTE_ADDED.to_owned(),
        graph,
    }))
}

/// `GET /shortest-route`: cheapest distance and path between two locations.
pub(super) async fn shortest_route(
    State(state): State<AppState>,
    query: Result<Query<ShortestRouteQuery>, QueryRejection>,
) -> Result<Json<ShortestRouteResponse>, ApiError> {
    let Query(ShortestRouteQuery { start, end }) = query?;
    let response = match state.graph.shortest_route(&start, &end) {
        Some(route) => ShortestRouteResponse {
            message: ROUTE_CALCULATED.to_owned(),
            distance: Some(route.distance),
            path: Some(route.stops),
        },
        None => ShortestRouteResponse {
            message: NO_ROUTE.to_owned(),
            distance: None,
            path: None,
        },
    };
    Ok(Json(response))
}

/// `GET /health`: liveness probe.
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
