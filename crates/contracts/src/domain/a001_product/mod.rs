pub mod aggregate;
pub mod validation;

pub use aggregate::{
    CatalogSummary, Product, ProductDto, ProductFields, ProductId, StockStatus, ALL_CATEGORIES,
};
pub use validation::validate_product;
