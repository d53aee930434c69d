// ── Dashboard and revenue domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Aggregate metrics shown on the dashboard screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub total_foods: u64,
    pub total_revenue: f64,
    pub average_rating: f64,
    pub review_count: u64,
}

/// Bucketing granularity for revenue reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RevenuePeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// One bucket of a revenue report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub label: String,
    pub revenue: f64,
    pub order_count: u64,
}
