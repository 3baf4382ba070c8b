//! HTTP API server for order items and the product catalog.
//!
//! Provides REST endpoints for order item CRUD and catalog reads, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use store::Store;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::order_items::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: Store>(state: Arc<AppState<S>>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/orderitem",
            get(routes::order_items::list::<S>).post(routes::order_items::create::<S>),
        )
        .route(
            "/orderitem/{id}",
            get(routes::order_items::get::<S>)
                .put(routes::order_items::replace::<S>)
                .patch(routes::order_items::patch::<S>)
                .delete(routes::order_items::delete::<S>),
        )
        .route("/product", get(routes::products::list::<S>))
        .route(
            "/product/{id}",
            get(routes::products::get::<S>).delete(routes::products::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over a store backend.
pub fn create_state<S: Store>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
