use serde::{Deserialize, Serialize};

/// Bucket name for products outside the top of the mix
pub const OTHERS_BUCKET: &str = "Others";

/// Response for the reports page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportsResponse {
    #[serde(rename = "distributorSales")]
    pub distributor_sales: Vec<DistributorSales>,
    #[serde(rename = "productMix")]
    pub product_mix: Vec<ProductMixEntry>,
}

/// Revenue contribution of one distributor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributorSales {
    pub name: String,
    pub sales: f64,
}

/// Share of revenue of one product, percent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMixEntry {
    pub name: String,
    pub value: u32,
}
