//! Form Validator для карточки товара

use once_cell::sync::Lazy;
use regex::Regex;

use super::aggregate::{ProductDto, ProductFields, StockStatus};
use crate::shared::validation::{max_chars, parse_decimal, parse_whole, required, FieldErrors};

pub const NAME_MAX_LEN: usize = 100;
pub const CATEGORY_MAX_LEN: usize = 50;
pub const UNIT_PRICE_MAX: f64 = 100_000.0;
pub const MONTHLY_SALES_MAX: i64 = 1_000_000;
pub const TREND_LIMIT: f64 = 100.0;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9 \-]+$").unwrap());
static CATEGORY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());
static SKU_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^CHM-[A-Z0-9]{3,10}$").unwrap());

/// Проверить сырые данные формы и собрать типизированные поля.
///
/// Каждое поле проверяется независимо; при ошибках возвращаются сообщения
/// по всем невалидным полям сразу.
pub fn validate_product(dto: &ProductDto) -> Result<ProductFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = errors.check("name", validate_name(&dto.name));
    let category = errors.check("category", validate_category(&dto.category));
    let sku = errors.check("sku", validate_sku(&dto.sku));
    let unit_price = errors.check("unitPrice", validate_unit_price(&dto.unit_price));
    let stock = errors.check("stock", validate_stock(&dto.stock));
    let monthly_sales = errors.check("monthlySales", validate_monthly_sales(&dto.monthly_sales));
    let trend = errors.check("trend", validate_trend(&dto.trend));

    match (name, category, sku, unit_price, stock, monthly_sales, trend) {
        (
            Some(name),
            Some(category),
            Some(sku),
            Some(unit_price),
            Some(stock),
            Some(monthly_sales),
            Some(trend),
        ) => Ok(ProductFields {
            name,
            category,
            sku,
            unit_price,
            stock,
            monthly_sales,
            trend,
        }),
        _ => Err(errors),
    }
}

fn validate_name(raw: &str) -> Result<String, String> {
    let value = required(raw, "Product name")?;
    max_chars(value, NAME_MAX_LEN, "Product name")?;
    if !NAME_RE.is_match(value) {
        return Err("Product name may only contain letters, numbers, spaces and hyphens".into());
    }
    Ok(value.to_string())
}

fn validate_category(raw: &str) -> Result<String, String> {
    let value = required(raw, "Category")?;
    max_chars(value, CATEGORY_MAX_LEN, "Category")?;
    if !CATEGORY_RE.is_match(value) {
        return Err("Category may only contain letters and spaces".into());
    }
    Ok(value.to_string())
}

fn validate_sku(raw: &str) -> Result<String, String> {
    let value = required(raw, "SKU")?;
    if !SKU_RE.is_match(value) {
        return Err(
            "SKU must look like CHM- followed by 3-10 uppercase letters or digits".into(),
        );
    }
    Ok(value.to_string())
}

fn validate_unit_price(raw: &str) -> Result<f64, String> {
    let value = parse_decimal(raw, "Unit price")?;
    if value <= 0.0 || value > UNIT_PRICE_MAX {
        return Err("Unit price must be greater than 0 and at most 100000".into());
    }
    Ok(value)
}

fn validate_stock(raw: &str) -> Result<StockStatus, String> {
    let value = required(raw, "Stock status")?;
    StockStatus::from_label(value).ok_or_else(|| {
        "Stock status must be one of: In Stock, Low Stock, Out of Stock".to_string()
    })
}

fn validate_monthly_sales(raw: &str) -> Result<u32, String> {
    let value = parse_whole(raw, "Monthly sales")?;
    if !(0..=MONTHLY_SALES_MAX).contains(&value) {
        return Err("Monthly sales must be between 0 and 1000000".into());
    }
    u32::try_from(value).map_err(|_| "Monthly sales must be between 0 and 1000000".to_string())
}

fn validate_trend(raw: &str) -> Result<f64, String> {
    let value = parse_decimal(raw, "Trend")?;
    if !(-TREND_LIMIT..=TREND_LIMIT).contains(&value) {
        return Err("Trend must be between -100 and 100".into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> ProductDto {
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

    #[test]
    fn test_valid_candidate() {
        let fields = validate_product(&valid_dto()).unwrap();
        assert_eq!(fields.name, "Chemical F-900");
        assert_eq!(fields.unit_price, 300.0);
        assert_eq!(fields.stock, StockStatus::InStock);
        assert_eq!(fields.monthly_sales, 500);
        assert_eq!(fields.trend, 5.0);
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut dto = valid_dto();
        dto.name = "  Chemical F-900 ".into();
        dto.unit_price = " 300 ".into();
        let fields = validate_product(&dto).unwrap();
        assert_eq!(fields.name, "Chemical F-900");
    }

    #[test]
    fn test_all_failing_fields_reported() {
        let dto = ProductDto::default();
        let errors = validate_product(&dto).unwrap_err();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get("name"), Some("Product name is required"));
        assert_eq!(errors.get("sku"), Some("SKU is required"));
        assert_eq!(errors.get("unitPrice"), Some("Unit price is required"));
    }

    #[test]
    fn test_independent_fields() {
        let mut dto = valid_dto();
        dto.sku = "chm-f900".into();
        dto.unit_price = "999999".into();
        let errors = validate_product(&dto).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("sku"));
        assert!(errors.contains("unitPrice"));
    }

    #[test]
    fn test_name_rules() {
        assert!(validate_name("Chemical A-301").is_ok());
        assert!(validate_name("Chemical_A").is_err());
        assert!(validate_name(&"a".repeat(101)).is_err());
        assert!(validate_name(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_category_rules() {
        assert!(validate_category("Specialty Chemicals").is_ok());
        assert!(validate_category("Polymers 2").is_err());
        assert!(validate_category(&"b".repeat(51)).is_err());
    }

    #[test]
    fn test_sku_rules() {
        assert!(validate_sku("CHM-A301").is_ok());
        assert!(validate_sku("CHM-ABC").is_ok());
        assert!(validate_sku("CHM-ABCDEFGHIJ").is_ok());
        assert!(validate_sku("CHM-AB").is_err());
        assert!(validate_sku("CHM-ABCDEFGHIJK").is_err());
        assert!(validate_sku("CHX-A301").is_err());
        assert!(validate_sku("CHM-a301").is_err());
    }

    #[test]
    fn test_unit_price_bounds() {
        assert!(validate_unit_price("0").is_err());
        assert!(validate_unit_price("-5").is_err());
        assert!(validate_unit_price("0.01").is_ok());
        assert!(validate_unit_price("100000").is_ok());
        assert!(validate_unit_price("100000.01").is_err());
        assert_eq!(
            validate_unit_price("12abc"),
            Err("Unit price must be a number".to_string())
        );
    }

    #[test]
    fn test_monthly_sales_bounds() {
        assert_eq!(validate_monthly_sales("0"), Ok(0));
        assert_eq!(validate_monthly_sales("1000000"), Ok(1_000_000));
        assert!(validate_monthly_sales("1000001").is_err());
        assert!(validate_monthly_sales("-1").is_err());
        assert!(validate_monthly_sales("1.5").is_err());
    }

    #[test]
    fn test_trend_bounds() {
        assert_eq!(validate_trend("-100"), Ok(-100.0));
        assert_eq!(validate_trend("100"), Ok(100.0));
        assert!(validate_trend("100.5").is_err());
        assert!(validate_trend("-2.1").is_ok());
    }

    #[test]
    fn test_stock_labels() {
        assert_eq!(validate_stock("Low Stock"), Ok(StockStatus::LowStock));
        assert!(validate_stock("Plenty").is_err());
        assert_eq!(validate_stock(""), Err("Stock status is required".to_string()));
    }
}
