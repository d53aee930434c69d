// Wire-format response types
//
// Models for the Savor backend's JSON API. All responses are wrapped in the
// `ApiEnvelope<T>` envelope. Fields use `#[serde(default)]` liberally because
// the backend is inconsistent about field presence across deployments.

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard Savor API response envelope.
///
/// Every endpoint wraps its payload:
/// ```json
/// { "success": true, "message": "optional", "data": ... }
/// ```
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

// ── Auth ─────────────────────────────────────────────────────────────

/// Logged-in account record from `api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Login response payload: bearer token plus the account record.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRecord {
    pub token: String,
    pub user: UserRecord,
}

// ── Voucher ──────────────────────────────────────────────────────────

/// Voucher record from `api/vouchers/restaurant/{rid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discount_type: String,
    pub discount_value: f64,
    #[serde(default)]
    pub min_order_amount: Option<f64>,
    #[serde(default)]
    pub max_discount_amount: Option<f64>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Voucher payload for create (`POST`) and update (`PUT`) calls.
#[derive(Debug, Clone, Serialize)]
pub struct VoucherPayload {
    pub code: String,
    pub description: String,
    pub discount_type: String,
    pub discount_value: f64,
    pub min_order_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<f64>,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    pub restaurant_id: String,
}

// ── Food ─────────────────────────────────────────────────────────────

/// Menu item record from `api/foods/restaurant/{rid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

/// Food payload for create and update calls. Update sends only the fields
/// the operator changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FoodPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
}

// ── Order ────────────────────────────────────────────────────────────

/// Order record from `api/orders/restaurant/{rid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemRecord>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Line item nested inside `OrderRecord`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

// ── Review ───────────────────────────────────────────────────────────

/// Customer review record from `api/reviews/restaurant/{rid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Chat ─────────────────────────────────────────────────────────────

/// Conversation summary from `api/chat/conversations/{rid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_at: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Message record from `api/chat/messages/{conversation_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub sender_role: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Outgoing message payload for `POST api/chat/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessagePayload {
    pub conversation_id: String,
    pub sender_role: String,
    pub text: String,
}

// ── Dashboard / Revenue ──────────────────────────────────────────────

/// Aggregate dashboard metrics from `api/dashboard/{rid}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardRecord {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub total_foods: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub review_count: u64,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One bucket of the revenue report from `api/revenue/{rid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePointRecord {
    /// Bucket label, e.g. `"2025-07"` or `"Mon"`.
    pub label: String,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub order_count: u64,
}

// ── Restaurant profile ───────────────────────────────────────────────

/// Restaurant profile record from `api/restaurants/{rid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Profile payload for `PUT api/restaurants/{rid}`. Partial update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RestaurantPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
}
