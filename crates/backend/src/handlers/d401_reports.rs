use axum::{extract::State, Json};
use contracts::dashboards::d401_reports::ReportsResponse;

use super::ApiError;
use crate::dashboards::d401_reports::service;
use crate::shared::app_state::AppState;

/// GET /api/d401/reports
pub async fn get_reports(State(state): State<AppState>) -> Result<Json<ReportsResponse>, ApiError> {
    let guard = state.lock()?;
    Ok(Json(service::get_reports(&guard.ledger)))
}
