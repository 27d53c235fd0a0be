use contracts::domain::a001_product::{
    validate_product, CatalogSummary, Product, ProductDto, ProductFields, ProductId,
    ALL_CATEGORIES,
};
use contracts::domain::common::AggregateId;
use contracts::shared::list_view::{visible_page, VisiblePage};
use contracts::shared::validation::FieldErrors;

use super::repository::ProductStore;
use crate::shared::notifier::Notifier;

/// Название товара - единственная связь продаж с каталогом
pub const DUPLICATE_NAME_MESSAGE: &str = "A product with this name already exists";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(ProductId),
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    #[error("product id {0} is already taken")]
    DuplicateId(ProductId),
}

/// Каталог товаров: единственный владелец записей.
///
/// Все изменения идут через `add`, `update` и `remove`; производные
/// представления (поиск, фильтр, сводка) каждый раз пересчитываются
/// по полному списку.
#[derive(Debug, Clone)]
pub struct CatalogManager {
    store: ProductStore,
    page_size: usize,
}

impl CatalogManager {
    pub fn new(page_size: usize) -> Self {
        Self {
            store: ProductStore::new(),
            page_size: page_size.max(1),
        }
    }

    /// Каталог с заранее известными id (демо-данные, импорт).
    /// Каждая запись проходит обычную валидацию.
    pub fn with_products<'a, I>(page_size: usize, records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'a str, ProductDto)>,
    {
        let mut manager = Self::new(page_size);
        for (id, dto) in records {
            let id = ProductId::from_string(id).map_err(|e| {
                let mut errors = FieldErrors::new();
                errors.insert("id", e);
                CatalogError::Validation(errors)
            })?;
            if manager.store.contains(&id) {
                return Err(CatalogError::DuplicateId(id));
            }
            let fields = manager
                .validate_candidate(&dto, None)
                .map_err(CatalogError::Validation)?;
            manager.store.insert(Product::new_with_id(id, fields));
        }
        Ok(manager)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn list(&self) -> &[Product] {
        self.store.list_all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.store.get_by_id(id)
    }

    /// Создать товар из данных формы. Id выпускается здесь.
    pub fn add(
        &mut self,
        candidate: &ProductDto,
        notifier: &dyn Notifier,
    ) -> Result<Product, CatalogError> {
        let fields = match self.validate_candidate(candidate, None) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!("Product rejected: {}", errors);
                notifier.error("Please correct the highlighted fields");
                return Err(CatalogError::Validation(errors));
            }
        };

        let mut id = ProductId::generate();
        while self.store.contains(&id) {
            id = ProductId::generate();
        }

        let product = Product::new_with_id(id, fields);
        tracing::info!("Product {} added: {}", product.id, product.name);
        self.store.insert(product.clone());
        notifier.success(&format!("Product \"{}\" added", product.name));
        Ok(product)
    }

    /// Заменить все поля товара, кроме id. Позиция в списке не меняется.
    pub fn update(
        &mut self,
        id: &ProductId,
        candidate: &ProductDto,
        notifier: &dyn Notifier,
    ) -> Result<Product, CatalogError> {
        if !self.store.contains(id) {
            tracing::debug!("Update of missing product {}", id);
            return Err(CatalogError::NotFound(id.clone()));
        }

        let fields = match self.validate_candidate(candidate, Some(id)) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!("Update of product {} rejected: {}", id, errors);
                notifier.error("Please correct the highlighted fields");
                return Err(CatalogError::Validation(errors));
            }
        };

        let product = self
            .store
            .get_mut(id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        product.update(fields);
        let updated = product.clone();

        tracing::info!("Product {} updated: {}", updated.id, updated.name);
        notifier.success(&format!("Product \"{}\" updated", updated.name));
        Ok(updated)
    }

    /// Валидация формы плюс уникальность названия (без учёта регистра).
    /// `own_id` - запись, которую редактируют: её собственное название не конфликт.
    fn validate_candidate(
        &self,
        candidate: &ProductDto,
        own_id: Option<&ProductId>,
    ) -> Result<ProductFields, FieldErrors> {
        let name_taken = self.name_taken(candidate.name.trim(), own_id);
        match validate_product(candidate) {
            Ok(_) if name_taken => {
                let mut errors = FieldErrors::new();
                errors.insert("name", DUPLICATE_NAME_MESSAGE);
                Err(errors)
            }
            Ok(fields) => Ok(fields),
            Err(mut errors) => {
                if name_taken {
                    errors.insert("name", DUPLICATE_NAME_MESSAGE);
                }
                Err(errors)
            }
        }
    }

    fn name_taken(&self, name: &str, own_id: Option<&ProductId>) -> bool {
        let name = name.to_lowercase();
        !name.is_empty()
            && self
                .store
                .list_all()
                .iter()
                .any(|p| Some(&p.id) != own_id && p.name.to_lowercase() == name)
    }

    /// Удалить товар. Отсутствующий id - не ошибка: возвращается `false`,
    /// уведомление не отправляется.
    ///
    /// Подтверждение удаления пользователем - забота вызывающего
    /// (см. [`super::view::CatalogView::confirm_delete`]).
    pub fn remove(&mut self, id: &ProductId, notifier: &dyn Notifier) -> bool {
        match self.store.delete(id) {
            Some(product) => {
                tracing::info!("Product {} deleted: {}", product.id, product.name);
                notifier.success(&format!("Product \"{}\" deleted", product.name));
                true
            }
            None => {
                tracing::debug!("Delete of missing product {} ignored", id);
                false
            }
        }
    }

    /// Товары, у которых название или артикул содержит `term` без учёта
    /// регистра. Пустой `term` подходит под всё; пробелы не обрезаются.
    /// Вычисляется лениво.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Product> + 'a {
        let needle = term.to_lowercase();
        self.store
            .list_all()
            .iter()
            .filter(move |p| p.matches_search(&needle))
    }

    /// Сузить выборку до одной категории; `"all"` отключает фильтр
    pub fn filter_by_category<'a, I>(
        items: I,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a
    where
        I: Iterator<Item = &'a Product> + 'a,
    {
        items.filter(move |p| p.matches_category(category))
    }

    /// Поиск и фильтр категории, соединённые через AND
    pub fn filtered<'a>(&'a self, term: &str, category: &'a str) -> Vec<&'a Product> {
        Self::filter_by_category(self.search(term), category).collect()
    }

    /// Видимая часть отфильтрованного списка: первые `page_size * pages_shown`
    pub fn visible_page(
        &self,
        term: &str,
        category: &str,
        pages_shown: usize,
    ) -> VisiblePage<Product> {
        let filtered = self.filtered(term, category);
        visible_page(&filtered, self.page_size, pages_shown).map(Product::clone)
    }

    /// Сводка по всему каталогу, фильтры не учитываются
    pub fn summary(&self) -> CatalogSummary {
        let items = self.store.list_all();
        let count = items.len();
        let total_price: f64 = items.iter().map(|p| p.unit_price).sum();
        let average_price = if count == 0 {
            0
        } else {
            (total_price / count as f64).round() as i64
        };
        CatalogSummary {
            count,
            average_price,
            total_monthly_sales: items.iter().map(|p| u64::from(p.monthly_sales)).sum(),
        }
    }

    /// `"all"` и далее категории в порядке первого появления
    pub fn distinct_categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in self.store.list_all() {
            if !categories.iter().any(|c| c == &product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Названия товаров (для выбора в форме продажи)
    pub fn product_names(&self) -> Vec<String> {
        self.store.list_all().iter().map(|p| p.name.clone()).collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.store.list_all().iter().find(|p| p.name == name)
    }
}
