pub mod d400_overview;
pub mod d401_reports;

use contracts::domain::a002_sales_transaction::SaleTransaction;

/// Выручка, сгруппированная по ключу: по убыванию, при равенстве - по имени
pub fn revenue_by<'a, F>(sales: &'a [SaleTransaction], key: F) -> Vec<(String, f64)>
where
    F: Fn(&'a SaleTransaction) -> &'a str,
{
    let mut totals: Vec<(String, f64)> = Vec::new();
    for sale in sales {
        let name = key(sale);
        match totals.iter_mut().find(|(n, _)| n == name) {
            Some((_, total)) => *total += sale.total_amount,
            None => totals.push((name.to_string(), sale.total_amount)),
        }
    }
    totals.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    totals
}
