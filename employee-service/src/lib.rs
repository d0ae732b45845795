pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::{
    middleware::from_fn,
    routing::{get, put},
    Router,
};
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{request_id_middleware, request_id_of},
};
use std::sync::Arc;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::services::EmployeeStore;

/// Shared application state, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route(
            "/employee",
            get(handlers::employees::list_employees).post(handlers::employees::create_employee),
        )
        .route(
            "/employee/:id",
            put(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        )
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id_of(request),
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Outermost, so the trace span already sees the request id.
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
