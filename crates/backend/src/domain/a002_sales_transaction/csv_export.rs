use contracts::domain::a002_sales_transaction::SaleTransaction;

/// Заголовок выгрузки; порядок колонок ожидают внешние потребители CSV
pub const CSV_HEADER: [&str; 8] = [
    "Date",
    "Invoice",
    "Distributor",
    "Product",
    "Quantity",
    "Unit Price",
    "Total Amount",
    "Status",
];

/// Выгрузить транзакции в CSV (UTF-8, разделитель запятая)
pub fn export_sales_csv<'a, I>(sales: I) -> anyhow::Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a SaleTransaction>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    let mut rows = 0usize;
    for sale in sales {
        writer.write_record([
            sale.date.format("%Y-%m-%d").to_string(),
            sale.invoice.clone(),
            sale.distributor.clone(),
            sale.product.clone(),
            sale.quantity.to_string(),
            format_amount(sale.unit_price),
            format_amount(sale.total_amount),
            sale.status.display_name().to_string(),
        ])?;
        rows += 1;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv flush failed: {}", e))?;
    tracing::debug!("Exported {} sales rows ({} bytes)", rows, bytes.len());
    Ok(bytes)
}

/// Суммы без разделителей тысяч: целые как есть, иначе два знака
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Имя файла выгрузки, например `sales-2024-01-31.csv`
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("sales-{}.csv", date.format("%Y-%m-%d"))
}
