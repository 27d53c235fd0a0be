use serde::{Deserialize, Serialize};

/// Response for the overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub kpis: OverviewKpis,
    /// Monthly series in chronological order
    pub monthly: Vec<MonthlyPoint>,
    /// Best selling products by revenue
    #[serde(rename = "topProducts")]
    pub top_products: Vec<TopProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewKpis {
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
    #[serde(rename = "unitsSold")]
    pub units_sold: u64,
    #[serde(rename = "activeDistributors")]
    pub active_distributors: usize,
    #[serde(rename = "productCount")]
    pub product_count: usize,
}

/// One point of the revenue/units chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Period in format "YYYY-MM"
    pub month: String,
    pub sales: f64,
    pub units: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: f64,
    /// Catalog trend, percent; None when the product left the catalog
    pub growth: Option<f64>,
}
