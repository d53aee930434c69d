// ── Voucher domain types ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::entity_id::EntityId;

/// Discount shape: percentage-of-order or fixed currency amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// A discount code issued by a restaurant.
///
/// `used_count` is server-tracked and read-only from the console's
/// perspective. Status is never stored here -- it is derived on every read
/// by [`crate::rules::classify`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    pub id: EntityId,
    pub code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    /// Defaults to 0 when the backend omits it.
    pub min_order_amount: f64,
    /// Caps the absolute discount; meaningful for percentage vouchers.
    pub max_discount_amount: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// `None` means unlimited redemptions.
    pub usage_limit: Option<u32>,
    pub used_count: u32,
}

/// Derived temporal/usage classification. Computed, never persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VoucherStatus {
    Upcoming,
    Expired,
    UsageExhausted,
    Active,
}
