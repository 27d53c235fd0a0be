use contracts::domain::a001_product::{Product, ProductId, ALL_CATEGORIES};
use contracts::shared::list_view::VisiblePage;
use serde::Serialize;

use super::service::CatalogManager;
use crate::shared::notifier::Notifier;

/// Состояние экрана каталога: строка поиска, категория, сколько "страниц"
/// подгружено и какой товар ждёт подтверждения удаления.
///
/// Само по себе ничего не меняет в каталоге, кроме подтверждённого удаления.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    search: String,
    category: String,
    #[serde(rename = "pagesShown")]
    pages_shown: usize,
    #[serde(rename = "pendingDelete")]
    pending_delete: Option<ProductId>,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            pages_shown: 1,
            pending_delete: None,
        }
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn pages_shown(&self) -> usize {
        self.pages_shown
    }

    pub fn pending_delete(&self) -> Option<&ProductId> {
        self.pending_delete.as_ref()
    }

    /// Новый поиск показывает выборку с первой страницы
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.pages_shown = 1;
    }

    /// Новая категория показывает выборку с первой страницы
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.pages_shown = 1;
    }

    pub fn load_more(&mut self) {
        self.pages_shown += 1;
    }

    /// Вернуть поиск и фильтр к значениям по умолчанию
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Первый шаг удаления: запомнить, что пользователь хочет удалить товар
    pub fn request_delete(&mut self, id: ProductId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Второй шаг удаления. Без предварительного запроса ничего не делает.
    pub fn confirm_delete(
        &mut self,
        catalog: &mut CatalogManager,
        notifier: &dyn Notifier,
    ) -> bool {
        match self.pending_delete.take() {
            Some(id) => catalog.remove(&id, notifier),
            None => false,
        }
    }

    /// Текущая видимая часть каталога
    pub fn page(&self, catalog: &CatalogManager) -> VisiblePage<Product> {
        catalog.visible_page(&self.search, &self.category, self.pages_shown)
    }
}
