use crate::domain::common::aggregate_id::parse_opaque_id;
use crate::domain::common::AggregateId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Значения фильтров, отключающие фильтр
pub const ALL_STATUSES: &str = "all";
pub const ALL_PRODUCTS: &str = "all";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub String);

impl SaleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl AggregateId for SaleId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_opaque_id(s).map(SaleId)
    }

    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Completed,
    Pending,
}

impl SaleStatus {
    /// Код статуса (как в фильтре)
    pub fn code(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "completed",
            SaleStatus::Pending => "pending",
        }
    }

    /// Человекочитаемое название (бейдж, CSV)
    pub fn display_name(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "Completed",
            SaleStatus::Pending => "Pending",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(SaleStatus::Completed),
            "pending" => Some(SaleStatus::Pending),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Вторичная продажа: отгрузка дистрибьютора конечному покупателю
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleTransaction {
    pub id: SaleId,
    pub date: NaiveDate,
    pub invoice: String,
    pub distributor: String,
    pub product: String,
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    pub status: SaleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SaleTransaction {
    /// `needle` уже приведён к нижнему регистру
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.distributor.to_lowercase().contains(needle)
            || self.product.to_lowercase().contains(needle)
            || self.invoice.to_lowercase().contains(needle)
    }
}

/// Проверенные поля формы продажи
#[derive(Debug, Clone, PartialEq)]
pub struct SaleEntryFields {
    pub date: NaiveDate,
    pub distributor: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub invoice: Option<String>,
    pub notes: Option<String>,
}

// ============================================================================
// DTO
// ============================================================================

/// Сырые данные формы "Sales Entry"
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SaleEntryDto {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub distributor: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: String,
    #[serde(rename = "invoiceNumber", default)]
    pub invoice_number: String,
    #[serde(default)]
    pub notes: String,
}

/// Фильтры списка транзакций
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_all")]
    pub status: String,
    #[serde(default = "default_all")]
    pub product: String,
}

fn default_all() -> String {
    "all".to_string()
}

impl Default for SalesFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: default_all(),
            product: default_all(),
        }
    }
}

impl SalesFilter {
    pub fn matches(&self, sale: &SaleTransaction) -> bool {
        let needle = self.search.trim().to_lowercase();
        let status_ok = self.status == ALL_STATUSES || sale.status.code() == self.status;
        let product_ok = self.product == ALL_PRODUCTS || sale.product == self.product;
        sale.matches_search(&needle) && status_ok && product_ok
    }
}

/// Итоги по отфильтрованному списку
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    /// Показано записей
    pub shown: usize,
    /// Всего записей в журнале
    pub total: usize,
    #[serde(rename = "totalUnits")]
    pub total_units: u64,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}

/// Ответ со списком транзакций
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesListResponse {
    pub items: Vec<SaleTransaction>,
    pub totals: SalesTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale() -> SaleTransaction {
        SaleTransaction {
            id: SaleId::new("1"),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            invoice: "INV-2024-001".into(),
            distributor: "Alpha Distributors Ltd".into(),
            product: "Chemical A-301".into(),
            quantity: 150,
            unit_price: 450.0,
            total_amount: 67500.0,
            status: SaleStatus::Completed,
            notes: None,
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(SaleStatus::from_code("pending"), Some(SaleStatus::Pending));
        assert_eq!(SaleStatus::from_code("Pending"), None);
        assert_eq!(SaleStatus::Completed.display_name(), "Completed");
    }

    #[test]
    fn test_filter_search_invoice_case_insensitive() {
        let filter = SalesFilter {
            search: "inv-2024-001".into(),
            ..SalesFilter::default()
        };
        assert!(filter.matches(&sale()));
    }

    #[test]
    fn test_filter_status_and_product() {
        let s = sale();
        let mut filter = SalesFilter::default();
        filter.status = "pending".into();
        assert!(!filter.matches(&s));
        filter.status = "completed".into();
        filter.product = "Chemical A-301".into();
        assert!(filter.matches(&s));
        filter.product = "Chemical B-205".into();
        assert!(!filter.matches(&s));
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(sale()).unwrap();
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["totalAmount"], 67500.0);
        assert!(json.get("notes").is_none());
    }
}
