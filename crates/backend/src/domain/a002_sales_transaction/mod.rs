pub mod csv_export;
pub mod repository;
pub mod seed;
pub mod service;

pub use service::{SalesError, SalesLedger};
