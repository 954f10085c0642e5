//! API route handlers

pub mod config;
pub mod health;
pub mod reconcile;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use bridge_core::ReconcileError;

use crate::dto::ApiError;
use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/config", get(config::get_config))
        .route("/config/fees", post(config::set_fees))
        .route("/reconcile", post(reconcile::reconcile_legs))
        .route("/reconcile/mode", post(reconcile::reconcile_mode))
        .with_state(state)
}

/// Map a reconciliation failure to an HTTP error response
pub(crate) fn reconcile_error(err: ReconcileError) -> (StatusCode, Json<ApiError>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    tracing::warn!(code = err.error_code(), "Reconciliation rejected: {}", err);
    (status, Json(ApiError::new(err.error_code(), err.to_string())))
}
