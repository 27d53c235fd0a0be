use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::domain::a002_sales_transaction::{
    preview_total, SaleEntryDto, SaleId, SaleStatus, SaleTransaction, SalesFilter,
    SalesListResponse,
};
use contracts::domain::common::AggregateId;
use contracts::shared::notice::WithNotices;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::domain::a002_sales_transaction::csv_export::{export_file_name, export_sales_csv};
use crate::domain::a002_sales_transaction::SalesError;
use crate::shared::app_state::AppState;
use crate::shared::notifier::NoticeCollector;

/// Варианты для выпадающих списков формы "Sales Entry"
#[derive(Debug, Serialize)]
pub struct SaleFormOptions {
    pub distributors: Vec<String>,
    pub products: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub quantity: String,
    #[serde(default, rename = "unitPrice")]
    pub unit_price: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

fn sales_error(err: SalesError, notifier: &NoticeCollector) -> ApiError {
    match err {
        SalesError::NotFound(_) => ApiError::Status(StatusCode::NOT_FOUND),
        SalesError::Validation(errors) => ApiError::Validation {
            errors,
            notices: notifier.drain(),
        },
    }
}

/// GET /api/a002/sales
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<SalesFilter>,
) -> Result<Json<SalesListResponse>, ApiError> {
    let guard = state.lock()?;
    Ok(Json(guard.ledger.list(&filter)))
}

/// GET /api/a002/sales/form-options
pub async fn form_options(
    State(state): State<AppState>,
) -> Result<Json<SaleFormOptions>, ApiError> {
    let guard = state.lock()?;
    Ok(Json(SaleFormOptions {
        distributors: guard.distributors.clone(),
        products: guard.catalog.product_names(),
    }))
}

/// GET /api/a002/sales/preview-total
pub async fn preview(Query(query): Query<PreviewQuery>) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        total_amount: preview_total(&query.quantity, &query.unit_price),
    })
}

/// POST /api/a002/sales
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<SaleEntryDto>,
) -> Result<(StatusCode, Json<WithNotices<SaleTransaction>>), ApiError> {
    let notifier = NoticeCollector::new();
    let mut guard = state.lock()?;
    let known_products = guard.catalog.product_names();
    let sale = guard
        .ledger
        .record(&dto, &known_products, &notifier)
        .map_err(|e| sales_error(e, &notifier))?;
    Ok((
        StatusCode::CREATED,
        Json(WithNotices {
            data: sale,
            notices: notifier.drain(),
        }),
    ))
}

/// POST /api/a002/sales/:id/status
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> Result<Json<WithNotices<SaleTransaction>>, ApiError> {
    let id = SaleId::from_string(&id).map_err(|_| ApiError::Status(StatusCode::BAD_REQUEST))?;
    let status =
        SaleStatus::from_code(&req.status).ok_or(ApiError::Status(StatusCode::BAD_REQUEST))?;
    let notifier = NoticeCollector::new();
    let mut guard = state.lock()?;
    let sale = guard
        .ledger
        .set_status(&id, status, &notifier)
        .map_err(|e| sales_error(e, &notifier))?;
    Ok(Json(WithNotices {
        data: sale,
        notices: notifier.drain(),
    }))
}

/// GET /api/a002/sales/export.csv
///
/// Выгружаются транзакции, попавшие под текущие фильтры.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(filter): Query<SalesFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = {
        let guard = state.lock()?;
        export_sales_csv(guard.ledger.filtered(&filter)).map_err(|e| {
            tracing::error!("CSV export failed: {}", e);
            ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)
        })?
    };
    let file_name = export_file_name(chrono::Local::now().date_naive());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    ))
}
