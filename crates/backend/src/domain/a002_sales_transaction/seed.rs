use chrono::NaiveDate;
use contracts::domain::a002_sales_transaction::{SaleId, SaleStatus, SaleTransaction};

/// Демонстрационный журнал: продажи дистрибьюторов за январь 2024
pub fn demo_sales() -> Vec<SaleTransaction> {
    [
        (
            "1",
            (2024, 1, 15),
            "Alpha Distributors Ltd",
            "Chemical A-301",
            150_u32,
            450.0,
            "INV-2024-001",
            SaleStatus::Completed,
        ),
        (
            "2",
            (2024, 1, 16),
            "Beta Trading Co",
            "Chemical B-205",
            200,
            380.0,
            "INV-2024-002",
            SaleStatus::Completed,
        ),
        (
            "3",
            (2024, 1, 17),
            "Gamma Chemicals Pvt Ltd",
            "Chemical C-102",
            120,
            520.0,
            "INV-2024-003",
            SaleStatus::Pending,
        ),
        (
            "4",
            (2024, 1, 18),
            "Delta Supply Chain",
            "Chemical D-450",
            180,
            410.0,
            "INV-2024-004",
            SaleStatus::Completed,
        ),
        (
            "5",
            (2024, 1, 19),
            "Epsilon Distribution",
            "Chemical E-789",
            95,
            680.0,
            "INV-2024-005",
            SaleStatus::Completed,
        ),
    ]
    .into_iter()
    .filter_map(
        |(id, (y, m, d), distributor, product, quantity, unit_price, invoice, status)| {
            Some(SaleTransaction {
                id: SaleId::new(id),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                invoice: invoice.to_string(),
                distributor: distributor.to_string(),
                product: product.to_string(),
                quantity,
                unit_price,
                total_amount: f64::from(quantity) * unit_price,
                status,
                notes: None,
            })
        },
    )
    .collect()
}

/// Дистрибьюторы, доступные в форме ввода продажи
pub fn demo_distributors() -> Vec<String> {
    [
        "Alpha Distributors Ltd",
        "Beta Trading Co",
        "Gamma Chemicals Pvt Ltd",
        "Delta Supply Chain",
        "Epsilon Distribution",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
