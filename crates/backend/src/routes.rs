use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::app_state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 PRODUCTS
        // ========================================
        .route(
            "/api/a001/products",
            get(handlers::a001_product::list).post(handlers::a001_product::create),
        )
        .route(
            "/api/a001/products/summary",
            get(handlers::a001_product::summary),
        )
        .route(
            "/api/a001/products/categories",
            get(handlers::a001_product::categories),
        )
        .route(
            "/api/a001/products/:id",
            get(handlers::a001_product::get_by_id)
                .put(handlers::a001_product::update)
                .delete(handlers::a001_product::delete),
        )
        // Экран каталога: поиск, фильтр, "Load more", удаление в два шага
        .route(
            "/api/a001/catalog-view",
            get(handlers::a001_product::get_view),
        )
        .route(
            "/api/a001/catalog-view/search",
            post(handlers::a001_product::view_search),
        )
        .route(
            "/api/a001/catalog-view/category",
            post(handlers::a001_product::view_category),
        )
        .route(
            "/api/a001/catalog-view/load-more",
            post(handlers::a001_product::view_load_more),
        )
        .route(
            "/api/a001/catalog-view/reset",
            post(handlers::a001_product::view_reset),
        )
        .route(
            "/api/a001/catalog-view/delete-request/:id",
            post(handlers::a001_product::view_request_delete),
        )
        .route(
            "/api/a001/catalog-view/delete-cancel",
            post(handlers::a001_product::view_cancel_delete),
        )
        .route(
            "/api/a001/catalog-view/delete-confirm",
            post(handlers::a001_product::view_confirm_delete),
        )
        // ========================================
        // A002 SALES TRANSACTIONS
        // ========================================
        .route(
            "/api/a002/sales",
            get(handlers::a002_sales_transaction::list)
                .post(handlers::a002_sales_transaction::create),
        )
        .route(
            "/api/a002/sales/form-options",
            get(handlers::a002_sales_transaction::form_options),
        )
        .route(
            "/api/a002/sales/preview-total",
            get(handlers::a002_sales_transaction::preview),
        )
        .route(
            "/api/a002/sales/export.csv",
            get(handlers::a002_sales_transaction::export_csv),
        )
        .route(
            "/api/a002/sales/:id/status",
            post(handlers::a002_sales_transaction::set_status),
        )
        // ========================================
        // DASHBOARDS
        // ========================================
        .route(
            "/api/d400/overview",
            get(handlers::d400_overview::get_overview),
        )
        .route(
            "/api/d401/reports",
            get(handlers::d401_reports::get_reports),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::app_state::DashboardState;

    #[test]
    fn test_routes_build_without_conflicts() {
        let state = AppState::new(DashboardState::demo(6).unwrap());
        let _router = configure_routes(state);
    }
}
