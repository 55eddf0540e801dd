//! JSON endpoints over the order queue and route graph.
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | `POST` | `/add-order` | Queue an order |
//! | `POST` | `/process-order` | Take the oldest pending order |
//! | `POST` | `/add-route` | Register a directed route |
//! | `GET` | `/shortest-route` | Cheapest distance between two locations |
//! | `GET` | `/health` | Liveness probe |

mod dto;
mod error;
mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use dispatch_core::{SharedOrderQueue, SharedRouteGraph};
use tower_http::trace::TraceLayer;

pub use dto::{
    AddOrderResponse, AddRouteRequest, AddRouteResponse, HealthResponse, ProcessOrderResponse,
    ShortestRouteQuery, ShortestRouteResponse,
};
pub use error::{ApiError, ErrorBody, ErrorDetail};

/// State shared by every request handler.
///
/// The queue and the graph are guarded independently, so order traffic never
/// waits on routing traffic.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Pending orders.
    pub orders: SharedOrderQueue,
    /// Delivery network.
    pub graph: SharedRouteGraph,
}

/// Build the application router around `state`.
///
/// # Examples
/// ```
/// use dispatch_server::api::{AppState, router};
///
/// let app = router(AppState::default());
/// # let _ = app;
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/add-order", post(handlers::add_order))
        .route("/process-order", post(handlers::process_order))
        .route("/add-route", post(handlers::add_route))
        .route("/shortest-route", get(handlers::shortest_route))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
