use chrono::NaiveDate;

use super::aggregate::{SaleEntryDto, SaleEntryFields};
use crate::shared::validation::{max_chars, parse_decimal, parse_whole, required, FieldErrors};

pub const DISTRIBUTOR_MAX_LEN: usize = 100;
pub const INVOICE_MAX_LEN: usize = 30;
pub const NOTES_MAX_LEN: usize = 500;
pub const QUANTITY_MAX: i64 = 1_000_000;
pub const UNIT_PRICE_MAX: f64 = 100_000.0;

/// Проверить форму продажи.
///
/// `known_products` - названия товаров, которые сейчас есть в каталоге:
/// продажу можно записать только по существующему товару.
pub fn validate_sale_entry(
    dto: &SaleEntryDto,
    known_products: &[String],
) -> Result<SaleEntryFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let date = errors.check("date", validate_date(&dto.date));
    let distributor = errors.check("distributor", validate_distributor(&dto.distributor));
    let product = errors.check("product", validate_product_ref(&dto.product, known_products));
    let quantity = errors.check("quantity", validate_quantity(&dto.quantity));
    let unit_price = errors.check("unitPrice", validate_unit_price(&dto.unit_price));
    let invoice = errors.check(
        "invoiceNumber",
        optional_text(&dto.invoice_number, INVOICE_MAX_LEN, "Invoice number"),
    );
    let notes = errors.check("notes", optional_text(&dto.notes, NOTES_MAX_LEN, "Notes"));

    match (date, distributor, product, quantity, unit_price, invoice, notes) {
        (
            Some(date),
            Some(distributor),
            Some(product),
            Some(quantity),
            Some(unit_price),
            Some(invoice),
            Some(notes),
        ) => Ok(SaleEntryFields {
            date,
            distributor,
            product,
            quantity,
            unit_price,
            invoice,
            notes,
        }),
        _ => Err(errors),
    }
}

/// Сумма, которая показывается рядом с формой по мере ввода.
/// Нечисловой ввод считается нулём.
pub fn preview_total(quantity: &str, unit_price: &str) -> f64 {
    let qty = quantity.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
    let price = unit_price.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
    round_cents(qty * price)
}

/// Округление до копеек (центов)
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_date(raw: &str) -> Result<NaiveDate, String> {
    let value = required(raw, "Sale date")?;
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Sale date must be a date in YYYY-MM-DD format".to_string())
}

fn validate_distributor(raw: &str) -> Result<String, String> {
    let value = required(raw, "Distributor")?;
    max_chars(value, DISTRIBUTOR_MAX_LEN, "Distributor")?;
    Ok(value.to_string())
}

fn validate_product_ref(raw: &str, known_products: &[String]) -> Result<String, String> {
    let value = required(raw, "Product")?;
    if !known_products.iter().any(|p| p == value) {
        return Err(format!("Unknown product: {}", value));
    }
    Ok(value.to_string())
}

fn validate_quantity(raw: &str) -> Result<u32, String> {
    let value = parse_whole(raw, "Quantity")?;
    if !(1..=QUANTITY_MAX).contains(&value) {
        return Err("Quantity must be between 1 and 1000000".into());
    }
    u32::try_from(value).map_err(|_| "Quantity must be between 1 and 1000000".to_string())
}

fn validate_unit_price(raw: &str) -> Result<f64, String> {
    let value = parse_decimal(raw, "Unit price")?;
    if value <= 0.0 || value > UNIT_PRICE_MAX {
        return Err("Unit price must be greater than 0 and at most 100000".into());
    }
    Ok(value)
}

fn optional_text(raw: &str, max: usize, label: &str) -> Result<Option<String>, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    max_chars(value, max, label)?;
    Ok(Some(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<String> {
        vec!["Chemical A-301".to_string(), "Chemical B-205".to_string()]
    }

    fn valid_dto() -> SaleEntryDto {
        SaleEntryDto {
            date: "2024-02-01".into(),
            distributor: "Beta Trading Co".into(),
            product: "Chemical B-205".into(),
            quantity: "10".into(),
            unit_price: "380".into(),
            invoice_number: String::new(),
            notes: "  ".into(),
        }
    }

    #[test]
    fn test_valid_entry() {
        let fields = validate_sale_entry(&valid_dto(), &products()).unwrap();
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(fields.quantity, 10);
        assert_eq!(fields.invoice, None);
        assert_eq!(fields.notes, None);
    }

    #[test]
    fn test_required_fields_reported_together() {
        let errors = validate_sale_entry(&SaleEntryDto::default(), &products()).unwrap_err();
        assert!(errors.contains("date"));
        assert!(errors.contains("distributor"));
        assert!(errors.contains("product"));
        assert!(errors.contains("quantity"));
        assert!(errors.contains("unitPrice"));
        assert!(!errors.contains("invoiceNumber"));
        assert!(!errors.contains("notes"));
    }

    #[test]
    fn test_unknown_product_rejected() {
        let mut dto = valid_dto();
        dto.product = "Chemical Z-000".into();
        let errors = validate_sale_entry(&dto, &products()).unwrap_err();
        assert_eq!(errors.get("product"), Some("Unknown product: Chemical Z-000"));
    }

    #[test]
    fn test_bad_date_and_zero_quantity() {
        let mut dto = valid_dto();
        dto.date = "01/02/2024".into();
        dto.quantity = "0".into();
        let errors = validate_sale_entry(&dto, &products()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_preview_total() {
        assert_eq!(preview_total("3", "19.99"), 59.97);
        assert_eq!(preview_total("", "19.99"), 0.0);
        assert_eq!(preview_total("abc", "10"), 0.0);
        assert_eq!(preview_total("150", "450"), 67500.0);
    }
}
