use contracts::dashboards::d401_reports::{
    DistributorSales, ProductMixEntry, ReportsResponse, OTHERS_BUCKET,
};
use contracts::domain::a002_sales_transaction::{round_cents, SaleTransaction};

use crate::dashboards::revenue_by;
use crate::domain::a002_sales_transaction::SalesLedger;

/// Сколько товаров показывается в "Product Sales Mix" отдельно
pub const PRODUCT_MIX_TOP: usize = 4;

/// Get reports page data
pub fn get_reports(ledger: &SalesLedger) -> ReportsResponse {
    let sales = ledger.list_all();
    ReportsResponse {
        distributor_sales: distributor_sales(sales),
        product_mix: product_mix(sales, PRODUCT_MIX_TOP),
    }
}

/// Выручка по дистрибьюторам, по убыванию
pub fn distributor_sales(sales: &[SaleTransaction]) -> Vec<DistributorSales> {
    let totals = revenue_by(sales, |s| s.distributor.as_str());
    totals
        .into_iter()
        .map(|(name, sales)| DistributorSales {
            name,
            sales: round_cents(sales),
        })
        .collect()
}

/// Доля выручки по товарам в процентах: `top` лидеров и корзина "Others".
///
/// Проценты целые и в сумме дают ровно 100 (метод наибольшего остатка).
pub fn product_mix(sales: &[SaleTransaction], top: usize) -> Vec<ProductMixEntry> {
    let totals = revenue_by(sales, |s| s.product.as_str());
    let grand_total: f64 = totals.iter().map(|(_, v)| v).sum();
    if grand_total <= 0.0 {
        return Vec::new();
    }

    let mut buckets: Vec<(String, f64)> = totals.iter().take(top).cloned().collect();
    let rest: f64 = totals.iter().skip(top).map(|(_, v)| v).sum();
    if totals.len() > top {
        buckets.push((OTHERS_BUCKET.to_string(), rest));
    }

    let exact: Vec<f64> = buckets
        .iter()
        .map(|(_, v)| v / grand_total * 100.0)
        .collect();
    let mut values: Vec<u32> = exact.iter().map(|v| v.floor() as u32).collect();
    let assigned: u32 = values.iter().sum();

    // Остаток раздаём корзинам с наибольшей дробной частью
    let mut order: Vec<usize> = (0..exact.len()).collect();
    order.sort_by(|&a, &b| {
        let frac = |i: usize| exact[i] - exact[i].floor();
        frac(b).total_cmp(&frac(a))
    });
    for &i in order.iter().take(100u32.saturating_sub(assigned) as usize) {
        values[i] += 1;
    }

    buckets
        .into_iter()
        .zip(values)
        .map(|((name, _), value)| ProductMixEntry { name, value })
        .collect()
}
