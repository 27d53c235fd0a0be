use contracts::dashboards::d400_overview::{
    MonthlyPoint, OverviewKpis, OverviewResponse, TopProduct,
};
use contracts::domain::a002_sales_transaction::round_cents;
use std::collections::{BTreeMap, HashSet};

use crate::dashboards::revenue_by;
use crate::domain::a001_product::CatalogManager;
use crate::domain::a002_sales_transaction::SalesLedger;

/// Количество товаров в блоке "Top Products"
pub const TOP_PRODUCTS_LIMIT: usize = 4;

/// Get overview dashboard data
pub fn get_overview(catalog: &CatalogManager, ledger: &SalesLedger) -> OverviewResponse {
    let sales = ledger.list_all();

    let kpis = OverviewKpis {
        total_revenue: round_cents(sales.iter().map(|s| s.total_amount).sum()),
        units_sold: sales.iter().map(|s| u64::from(s.quantity)).sum(),
        active_distributors: sales
            .iter()
            .map(|s| s.distributor.as_str())
            .collect::<HashSet<_>>()
            .len(),
        product_count: catalog.len(),
    };

    // Period "YYYY-MM" -> (revenue, units); BTreeMap keeps chronological order
    let mut by_month: BTreeMap<String, (f64, u64)> = BTreeMap::new();
    for sale in sales {
        let entry = by_month
            .entry(sale.date.format("%Y-%m").to_string())
            .or_insert((0.0, 0));
        entry.0 += sale.total_amount;
        entry.1 += u64::from(sale.quantity);
    }
    let monthly = by_month
        .into_iter()
        .map(|(month, (revenue, units))| MonthlyPoint {
            month,
            sales: round_cents(revenue),
            units,
        })
        .collect();

    let top_products = top_products(catalog, ledger, TOP_PRODUCTS_LIMIT);

    OverviewResponse {
        kpis,
        monthly,
        top_products,
    }
}

/// Best selling products by revenue, ties broken by name
fn top_products(catalog: &CatalogManager, ledger: &SalesLedger, limit: usize) -> Vec<TopProduct> {
    let totals = revenue_by(ledger.list_all(), |s| s.product.as_str());
    totals
        .into_iter()
        .take(limit)
        .map(|(name, sales)| TopProduct {
            growth: catalog.find_by_name(&name).map(|p| p.trend),
            name,
            sales: round_cents(sales),
        })
        .collect()
}
