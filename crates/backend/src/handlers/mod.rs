pub mod a001_product;
pub mod a002_sales_transaction;
pub mod d400_overview;
pub mod d401_reports;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::notice::{Notice, ValidationFailure};
use contracts::shared::validation::FieldErrors;

/// Ошибка HTTP-обработчика
#[derive(Debug)]
pub enum ApiError {
    Status(StatusCode),
    /// 422 с ошибками по полям формы
    Validation {
        errors: FieldErrors,
        notices: Vec<Notice>,
    },
}

impl From<StatusCode> for ApiError {
    fn from(status: StatusCode) -> Self {
        ApiError::Status(status)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Status(status) => status.into_response(),
            ApiError::Validation { errors, notices } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationFailure { errors, notices }),
            )
                .into_response(),
        }
    }
}
