use contracts::domain::a001_product::ProductDto;

/// Демонстрационный каталог: (id, сырые поля формы)
///
/// Записи проходят ту же валидацию, что и пользовательский ввод.
pub fn demo_products() -> Vec<(&'static str, ProductDto)> {
    vec![
        (
            "1",
            dto(
                "Chemical A-301",
                "Industrial Solvents",
                "CHM-A301",
                "450",
                "In Stock",
                "2450",
                "12.5",
            ),
        ),
        (
            "2",
            dto(
                "Chemical B-205",
                "Catalysts",
                "CHM-B205",
                "380",
                "In Stock",
                "1980",
                "8.3",
            ),
        ),
        (
            "3",
            dto(
                "Chemical C-102",
                "Additives",
                "CHM-C102",
                "520",
                "Low Stock",
                "1450",
                "-2.1",
            ),
        ),
        (
            "4",
            dto(
                "Chemical D-450",
                "Polymers",
                "CHM-D450",
                "410",
                "In Stock",
                "1820",
                "15.7",
            ),
        ),
        (
            "5",
            dto(
                "Chemical E-789",
                "Specialty Chemicals",
                "CHM-E789",
                "680",
                "In Stock",
                "1120",
                "6.4",
            ),
        ),
    ]
}

fn dto(
    name: &str,
    category: &str,
    sku: &str,
    unit_price: &str,
    stock: &str,
    monthly_sales: &str,
    trend: &str,
) -> ProductDto {
    ProductDto {
        name: name.into(),
        category: category.into(),
        sku: sku.into(),
        unit_price: unit_price.into(),
        stock: stock.into(),
        monthly_sales: monthly_sales.into(),
        trend: trend.into(),
    }
}
