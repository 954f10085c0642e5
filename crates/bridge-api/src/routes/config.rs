//! Configuration routes

use axum::{extract::State, http::StatusCode, Json};

use bridge_core::AppConfig;

use crate::dto::{ApiError, FeeConfigRequest};
use crate::AppState;

/// GET /config - Current configuration
pub async fn get_config(State(state): State<AppState>) -> Json<AppConfig> {
    Json(state.config().await)
}

/// POST /config/fees - Change the fee denominator
pub async fn set_fees(
    State(state): State<AppState>,
    Json(request): Json<FeeConfigRequest>,
) -> Result<Json<AppConfig>, (StatusCode, Json<ApiError>)> {
    state
        .set_fee_denominator(request.fee_denominator)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(e.to_string()))))?;

    Ok(Json(state.config().await))
}
