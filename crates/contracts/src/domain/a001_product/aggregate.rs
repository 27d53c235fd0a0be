use crate::domain::common::aggregate_id::parse_opaque_id;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Значение фильтра категорий, отключающее фильтр
pub const ALL_CATEGORIES: &str = "all";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_opaque_id(s).map(ProductId)
    }

    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Stock status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Подпись для UI и для формы
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn all() -> [StockStatus; 3] {
        [
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
        ]
    }

    /// Парсинг из подписи формы
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Typed fields (result of validation)
// ============================================================================

/// Проверенные поля товара; всё, кроме идентификатора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub sku: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub stock: StockStatus,
    #[serde(rename = "monthlySales")]
    pub monthly_sales: u32,
    pub trend: f64,
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub sku: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub stock: StockStatus,
    #[serde(rename = "monthlySales")]
    pub monthly_sales: u32,
    pub trend: f64,
}

impl Product {
    pub fn new_with_id(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            sku: fields.sku,
            unit_price: fields.unit_price,
            stock: fields.stock,
            monthly_sales: fields.monthly_sales,
            trend: fields.trend,
        }
    }

    /// Заменить все поля, кроме идентификатора
    pub fn update(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.category = fields.category;
        self.sku = fields.sku;
        self.unit_price = fields.unit_price;
        self.stock = fields.stock;
        self.monthly_sales = fields.monthly_sales;
        self.trend = fields.trend;
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            category: self.category.clone(),
            sku: self.sku.clone(),
            unit_price: self.unit_price,
            stock: self.stock,
            monthly_sales: self.monthly_sales,
            trend: self.trend,
        }
    }

    /// Регистронезависимое вхождение в название или артикул.
    /// `needle` уже приведён к нижнему регистру.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.sku.to_lowercase().contains(needle)
    }

    pub fn matches_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Сырые данные формы товара: все поля строками, как их ввёл пользователь
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sku: String,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(rename = "monthlySales", default)]
    pub monthly_sales: String,
    #[serde(default)]
    pub trend: String,
}

impl From<&Product> for ProductDto {
    /// Заполнение формы редактирования из существующей записи
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            category: p.category.clone(),
            sku: p.sku.clone(),
            unit_price: p.unit_price.to_string(),
            stock: p.stock.label().to_string(),
            monthly_sales: p.monthly_sales.to_string(),
            trend: p.trend.to_string(),
        }
    }
}

/// Сводка по всему каталогу (без учёта фильтров)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub count: usize,
    /// Средняя цена, округлённая до целого
    #[serde(rename = "averagePrice")]
    pub average_price: i64,
    #[serde(rename = "totalMonthlySales")]
    pub total_monthly_sales: u64,
}
