//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::AppState;

/// GET /health - Liveness plus the fee denominator requests will use
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let fee_denominator = state.config().await.fees.fee_denominator;
    Json(HealthResponse::new(fee_denominator))
}
