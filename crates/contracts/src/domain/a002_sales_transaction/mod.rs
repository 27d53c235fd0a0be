pub mod aggregate;
pub mod validation;

pub use aggregate::{
    SaleEntryDto, SaleEntryFields, SaleId, SaleStatus, SaleTransaction, SalesFilter,
    SalesListResponse, SalesTotals, ALL_PRODUCTS, ALL_STATUSES,
};
pub use validation::{preview_total, round_cents, validate_sale_entry};
