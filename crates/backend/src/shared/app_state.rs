use axum::http::StatusCode;
use std::sync::{Arc, Mutex, MutexGuard};

use super::config::Config;
use crate::domain::a001_product::seed::demo_products;
use crate::domain::a001_product::{CatalogManager, CatalogView};
use crate::domain::a002_sales_transaction::seed::{demo_distributors, demo_sales};
use crate::domain::a002_sales_transaction::SalesLedger;

/// Всё состояние дашборда одной сессии.
///
/// Один пользователь, поэтому каталог, экран каталога и журнал продаж лежат
/// под одной блокировкой: каждая команда выполняется целиком.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub catalog: CatalogManager,
    pub catalog_view: CatalogView,
    pub ledger: SalesLedger,
    pub distributors: Vec<String>,
}

impl DashboardState {
    pub fn empty(page_size: usize) -> Self {
        Self {
            catalog: CatalogManager::new(page_size),
            catalog_view: CatalogView::new(),
            ledger: SalesLedger::new(),
            distributors: Vec::new(),
        }
    }

    /// Демонстрационные данные: 5 товаров и 5 продаж января 2024
    pub fn demo(page_size: usize) -> anyhow::Result<Self> {
        let catalog = CatalogManager::with_products(page_size, demo_products())
            .map_err(|e| anyhow::anyhow!("demo catalog is invalid: {e}"))?;
        Ok(Self {
            catalog,
            catalog_view: CatalogView::new(),
            ledger: SalesLedger::with_transactions(demo_sales()),
            distributors: demo_distributors(),
        })
    }
}

/// Состояние, которое axum передаёт в обработчики
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Mutex<DashboardState>>,
}

impl AppState {
    pub fn new(state: DashboardState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let state = if config.catalog.seed_demo_data {
            DashboardState::demo(config.page_size())?
        } else {
            DashboardState::empty(config.page_size())
        };
        tracing::info!(
            "Dashboard state ready: {} products, {} sales",
            state.catalog.len(),
            state.ledger.len()
        );
        Ok(Self::new(state))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, DashboardState>, StatusCode> {
        self.inner.lock().map_err(|_| {
            tracing::error!("Dashboard state lock is poisoned");
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}
