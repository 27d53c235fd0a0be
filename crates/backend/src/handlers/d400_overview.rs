use axum::{extract::State, Json};
use contracts::dashboards::d400_overview::OverviewResponse;

use super::ApiError;
use crate::dashboards::d400_overview::service;
use crate::shared::app_state::AppState;

/// GET /api/d400/overview
pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let guard = state.lock()?;
    Ok(Json(service::get_overview(&guard.catalog, &guard.ledger)))
}
