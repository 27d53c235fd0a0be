pub mod repository;
pub mod seed;
pub mod service;
pub mod view;

pub use service::{CatalogError, CatalogManager};
pub use view::CatalogView;
