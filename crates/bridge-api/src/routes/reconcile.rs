//! Reconciliation routes

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::{ApiError, ModeReconcileRequest, ReconcileRequest, ReconcileResponse};
use crate::routes::reconcile_error;
use crate::AppState;

/// POST /reconcile - Reconcile an explicit batch of legs
pub async fn reconcile_legs(
    State(state): State<AppState>,
    Json(request): Json<ReconcileRequest>,
) -> Result<Json<ReconcileResponse>, (StatusCode, Json<ApiError>)> {
    let reconciler = state.reconciler().await.map_err(reconcile_error)?;

    let reconciliation = reconciler
        .reconcile_detailed(&request.legs)
        .map_err(reconcile_error)?;

    Ok(Json(reconciliation.into()))
}

/// POST /reconcile/mode - Reconcile one leg repeated per single/multi mode
pub async fn reconcile_mode(
    State(state): State<AppState>,
    Json(request): Json<ModeReconcileRequest>,
) -> Result<Json<ReconcileResponse>, (StatusCode, Json<ApiError>)> {
    let reconciler = state.reconciler().await.map_err(reconcile_error)?;

    let reconciliation = reconciler
        .reconcile_mode(&request.leg, request.mode)
        .map_err(reconcile_error)?;

    Ok(Json(reconciliation.into()))
}
