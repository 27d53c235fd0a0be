use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_product::{CatalogSummary, Product, ProductDto, ProductId};
use contracts::domain::common::AggregateId;
use contracts::shared::list_view::VisiblePage;
use contracts::shared::notice::WithNotices;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::domain::a001_product::{CatalogError, CatalogView};
use crate::shared::app_state::AppState;
use crate::shared::notifier::NoticeCollector;

#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub search: String,
    pub category: Option<String>,
    pub pages: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
}

/// Экран каталога: состояние фильтров и видимая часть списка
#[derive(Debug, Serialize)]
pub struct CatalogViewResponse {
    pub view: CatalogView,
    pub page: VisiblePage<Product>,
}

fn parse_id(id: &str) -> Result<ProductId, ApiError> {
    ProductId::from_string(id).map_err(|_| ApiError::Status(StatusCode::BAD_REQUEST))
}

fn catalog_error(err: CatalogError, notifier: &NoticeCollector) -> ApiError {
    match err {
        CatalogError::NotFound(_) => ApiError::Status(StatusCode::NOT_FOUND),
        CatalogError::Validation(errors) => ApiError::Validation {
            errors,
            notices: notifier.drain(),
        },
        CatalogError::DuplicateId(_) => ApiError::Status(StatusCode::CONFLICT),
    }
}

/// GET /api/a001/products
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<VisiblePage<Product>>, ApiError> {
    let guard = state.lock()?;
    let category = query
        .category
        .as_deref()
        .unwrap_or(contracts::domain::a001_product::ALL_CATEGORIES);
    Ok(Json(guard.catalog.visible_page(
        &query.search,
        category,
        query.pages.unwrap_or(1),
    )))
}

/// GET /api/a001/products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    let guard = state.lock()?;
    guard
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::Status(StatusCode::NOT_FOUND))
}

/// GET /api/a001/products/summary
pub async fn summary(State(state): State<AppState>) -> Result<Json<CatalogSummary>, ApiError> {
    let guard = state.lock()?;
    Ok(Json(guard.catalog.summary()))
}

/// GET /api/a001/products/categories
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let guard = state.lock()?;
    Ok(Json(guard.catalog.distinct_categories()))
}

/// POST /api/a001/products
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<WithNotices<Product>>), ApiError> {
    let notifier = NoticeCollector::new();
    let mut guard = state.lock()?;
    let product = guard
        .catalog
        .add(&dto, &notifier)
        .map_err(|e| catalog_error(e, &notifier))?;
    Ok((
        StatusCode::CREATED,
        Json(WithNotices {
            data: product,
            notices: notifier.drain(),
        }),
    ))
}

/// PUT /api/a001/products/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<WithNotices<Product>>, ApiError> {
    let id = parse_id(&id)?;
    let notifier = NoticeCollector::new();
    let mut guard = state.lock()?;
    let product = guard
        .catalog
        .update(&id, &dto, &notifier)
        .map_err(|e| catalog_error(e, &notifier))?;
    Ok(Json(WithNotices {
        data: product,
        notices: notifier.drain(),
    }))
}

/// DELETE /api/a001/products/:id
///
/// Клиент уже получил подтверждение пользователя. Отсутствующий товар
/// считается уже удалённым: `data = false`, уведомлений нет.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WithNotices<bool>>, ApiError> {
    let id = parse_id(&id)?;
    let notifier = NoticeCollector::new();
    let mut guard = state.lock()?;
    let removed = guard.catalog.remove(&id, &notifier);
    Ok(Json(WithNotices {
        data: removed,
        notices: notifier.drain(),
    }))
}

fn view_response(guard: &crate::shared::app_state::DashboardState) -> CatalogViewResponse {
    CatalogViewResponse {
        view: guard.catalog_view.clone(),
        page: guard.catalog_view.page(&guard.catalog),
    }
}

/// GET /api/a001/catalog-view
pub async fn get_view(
    State(state): State<AppState>,
) -> Result<Json<CatalogViewResponse>, ApiError> {
    let guard = state.lock()?;
    Ok(Json(view_response(&guard)))
}

/// POST /api/a001/catalog-view/search
pub async fn view_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<CatalogViewResponse>, ApiError> {
    let mut guard = state.lock()?;
    guard.catalog_view.set_search(req.term);
    Ok(Json(view_response(&guard)))
}

/// POST /api/a001/catalog-view/category
pub async fn view_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<CatalogViewResponse>, ApiError> {
    let mut guard = state.lock()?;
    guard.catalog_view.set_category(req.category);
    Ok(Json(view_response(&guard)))
}

/// POST /api/a001/catalog-view/load-more
pub async fn view_load_more(
    State(state): State<AppState>,
) -> Result<Json<CatalogViewResponse>, ApiError> {
    let mut guard = state.lock()?;
    guard.catalog_view.load_more();
    Ok(Json(view_response(&guard)))
}

/// POST /api/a001/catalog-view/reset
pub async fn view_reset(
    State(state): State<AppState>,
) -> Result<Json<CatalogViewResponse>, ApiError> {
    let mut guard = state.lock()?;
    guard.catalog_view.reset();
    Ok(Json(view_response(&guard)))
}

/// POST /api/a001/catalog-view/delete-request/:id
pub async fn view_request_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogViewResponse>, ApiError> {
    let id = parse_id(&id)?;
    let mut guard = state.lock()?;
    if guard.catalog.get(&id).is_none() {
        return Err(ApiError::Status(StatusCode::NOT_FOUND));
    }
    guard.catalog_view.request_delete(id);
    Ok(Json(view_response(&guard)))
}

/// POST /api/a001/catalog-view/delete-cancel
pub async fn view_cancel_delete(
    State(state): State<AppState>,
) -> Result<Json<CatalogViewResponse>, ApiError> {
    let mut guard = state.lock()?;
    guard.catalog_view.cancel_delete();
    Ok(Json(view_response(&guard)))
}

/// POST /api/a001/catalog-view/delete-confirm
pub async fn view_confirm_delete(
    State(state): State<AppState>,
) -> Result<Json<WithNotices<CatalogViewResponse>>, ApiError> {
    let notifier = NoticeCollector::new();
    let mut guard = state.lock()?;
    let dashboard = &mut *guard;
    dashboard
        .catalog_view
        .confirm_delete(&mut dashboard.catalog, &notifier);
    Ok(Json(WithNotices {
        data: view_response(dashboard),
        notices: notifier.drain(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::app_state::DashboardState;
    use axum::response::IntoResponse;
    use contracts::shared::notice::{NoticeKind, ValidationFailure};

    fn demo_state() -> AppState {
        AppState::new(DashboardState::demo(6).unwrap())
    }

    fn products(state: &AppState) -> Vec<Product> {
        state.lock().unwrap().catalog.list().to_vec()
    }

    fn candidate() -> ProductDto {
        ProductDto {
            name: "Chemical F-900".into(),
            category: "Solvents".into(),
            sku: "CHM-F900".into(),
            unit_price: "300".into(),
            stock: "In Stock".into(),
            monthly_sales: "500".into(),
            trend: "5".into(),
        }
    }

    async fn failure_body(err: ApiError) -> (StatusCode, ValidationFailure) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_returns_created_with_notice() {
        let state = demo_state();
        let (status, Json(body)) = create(State(state.clone()), Json(candidate()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.data.name, "Chemical F-900");
        assert_eq!(body.notices.len(), 1);
        assert_eq!(body.notices[0].kind, NoticeKind::Success);
        assert_eq!(products(&state).len(), 6);
    }

    #[tokio::test]
    async fn test_create_invalid_is_unprocessable() {
        let state = demo_state();
        let before = products(&state);
        let mut dto = candidate();
        dto.unit_price = "999999".into();
        dto.sku = "XYZ".into();

        let err = create(State(state.clone()), Json(dto)).await.unwrap_err();
        let (status, body) = failure_body(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.errors.contains("unitPrice"));
        assert!(body.errors.contains("sku"));
        assert_eq!(body.errors.len(), 2);
        assert_eq!(body.notices[0].kind, NoticeKind::Error);
        assert_eq!(products(&state), before);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_is_unprocessable() {
        let state = demo_state();
        let mut dto = candidate();
        dto.name = "Chemical B-205".into();

        let err = create(State(state.clone()), Json(dto)).await.unwrap_err();
        let (status, body) = failure_body(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.errors.contains("name"));
        assert_eq!(products(&state).len(), 5);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let state = demo_state();
        let before = products(&state);
        let err = update(State(state.clone()), Path("42".to_string()), Json(candidate()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(products(&state), before);
    }

    #[tokio::test]
    async fn test_update_invalid_is_unprocessable() {
        let state = demo_state();
        let before = products(&state);
        let mut dto = candidate();
        dto.trend = "250".into();

        let err = update(State(state.clone()), Path("3".to_string()), Json(dto))
            .await
            .unwrap_err();
        let (status, body) = failure_body(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.errors.len(), 1);
        assert!(body.errors.contains("trend"));
        assert_eq!(products(&state), before);
    }

    #[tokio::test]
    async fn test_delete_returns_notices() {
        let state = demo_state();
        let Json(body) = delete(State(state.clone()), Path("2".to_string()))
            .await
            .unwrap();
        assert!(body.data);
        assert_eq!(body.notices.len(), 1);
        assert_eq!(body.notices[0].kind, NoticeKind::Success);
        assert_eq!(products(&state).len(), 4);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let state = demo_state();
        let before = products(&state);
        let Json(body) = delete(State(state.clone()), Path("missing".to_string()))
            .await
            .unwrap();
        assert!(!body.data);
        assert!(body.notices.is_empty());
        assert_eq!(products(&state), before);
    }
}
