// ── API-to-domain type conversions ──
//
// Bridges raw `savor_api` response types into canonical `savor_core::model`
// domain types. Each impl normalizes field names, parses strings into strong
// types, and fills sensible defaults for missing optional data. Vouchers are
// the one fallible conversion: a voucher with an unreadable date or discount
// type cannot be classified and is rejected instead of guessed at.

use chrono::{DateTime, NaiveDate, Utc};

use savor_api::models::{
    ConversationRecord, DashboardRecord, FoodRecord, MessageRecord, OrderItemRecord, OrderRecord,
    RestaurantRecord, RevenuePointRecord, ReviewRecord, UserRecord, VoucherPayload, VoucherRecord,
};

use crate::error::CoreError;
use crate::model::{
    ChatMessage, Conversation, DashboardStats, DiscountType, EntityId, Food, Identity, Order,
    OrderItem, OrderStatus, Restaurant, RevenuePoint, Review, Voucher,
};
use crate::rules::ValidatedVoucher;

// ── Helpers ────────────────────────────────────────────────────────

/// Parse a wire date that may arrive as `YYYY-MM-DD` or as a full RFC 3339
/// timestamp (Mongo serializes `Date` fields that way). Only the calendar
/// date matters for voucher windows.
fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Parse an optional RFC 3339 timestamp, silently dropping unparseable values.
fn parse_datetime(raw: &Option<String>) -> Option<DateTime<Utc>> {
    raw.as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// ── Voucher ────────────────────────────────────────────────────────

impl TryFrom<VoucherRecord> for Voucher {
    type Error = CoreError;

    fn try_from(r: VoucherRecord) -> Result<Self, CoreError> {
        let discount_type: DiscountType = r.discount_type.parse().map_err(|_| {
            CoreError::Internal(format!(
                "voucher {}: unknown discount type '{}'",
                r.code, r.discount_type
            ))
        })?;
        let start_date = parse_wire_date(&r.start_date).ok_or_else(|| {
            CoreError::Internal(format!(
                "voucher {}: malformed start date '{}'",
                r.code, r.start_date
            ))
        })?;
        let end_date = parse_wire_date(&r.end_date).ok_or_else(|| {
            CoreError::Internal(format!(
                "voucher {}: malformed end date '{}'",
                r.code, r.end_date
            ))
        })?;

        Ok(Voucher {
            id: EntityId::from(r.id),
            code: r.code,
            description: r.description.unwrap_or_default(),
            discount_type,
            discount_value: r.discount_value,
            min_order_amount: r.min_order_amount.unwrap_or(0.0),
            max_discount_amount: r.max_discount_amount,
            start_date,
            end_date,
            usage_limit: r.usage_limit,
            used_count: r.used_count,
        })
    }
}

/// Build the outgoing create/update payload from a validated form.
pub fn voucher_payload(v: &ValidatedVoucher, restaurant_id: &EntityId) -> VoucherPayload {
    VoucherPayload {
        code: v.code.clone(),
        description: v.description.clone(),
        discount_type: v.discount_type.to_string(),
        discount_value: v.discount_value,
        min_order_amount: v.min_order_amount,
        max_discount_amount: v.max_discount_amount,
        start_date: v.start_date.format("%Y-%m-%d").to_string(),
        end_date: v.end_date.format("%Y-%m-%d").to_string(),
        usage_limit: v.usage_limit,
        restaurant_id: restaurant_id.to_string(),
    }
}

// ── Food ───────────────────────────────────────────────────────────

impl From<FoodRecord> for Food {
    fn from(r: FoodRecord) -> Self {
        Food {
            id: EntityId::from(r.id),
            name: r.name,
            description: r.description,
            category: r.category,
            price: r.price,
            image_url: r.image_url,
            available: r.available,
        }
    }
}

// ── Order ──────────────────────────────────────────────────────────

impl From<OrderItemRecord> for OrderItem {
    fn from(r: OrderItemRecord) -> Self {
        OrderItem {
            name: r.name.unwrap_or_else(|| "(unnamed item)".into()),
            quantity: r.quantity,
            price: r.price,
        }
    }
}

impl From<OrderRecord> for Order {
    fn from(r: OrderRecord) -> Self {
        // Unknown or missing status reads as pending: the safe default is
        // the state that still demands operator attention.
        let status = r
            .status
            .as_deref()
            .and_then(|s| s.parse::<OrderStatus>().ok())
            .unwrap_or(OrderStatus::Pending);

        Order {
            id: EntityId::from(r.id),
            customer_name: r.customer_name,
            customer_phone: r.customer_phone,
            delivery_address: r.delivery_address,
            items: r.items.into_iter().map(OrderItem::from).collect(),
            total_amount: r.total_amount,
            status,
            created_at: parse_datetime(&r.created_at),
        }
    }
}

// ── Review ─────────────────────────────────────────────────────────

impl From<ReviewRecord> for Review {
    fn from(r: ReviewRecord) -> Self {
        Review {
            id: EntityId::from(r.id),
            customer_name: r.customer_name,
            rating: r.rating,
            comment: r.comment,
            created_at: parse_datetime(&r.created_at),
        }
    }
}

// ── Chat ───────────────────────────────────────────────────────────

impl From<ConversationRecord> for Conversation {
    fn from(r: ConversationRecord) -> Self {
        Conversation {
            id: EntityId::from(r.id),
            customer_name: r.customer_name,
            last_message: r.last_message,
            last_message_at: parse_datetime(&r.last_message_at),
            unread_count: r.unread_count,
        }
    }
}

impl From<MessageRecord> for ChatMessage {
    fn from(r: MessageRecord) -> Self {
        ChatMessage {
            id: EntityId::from(r.id),
            conversation_id: r.conversation_id.map(EntityId::from),
            sender_role: r.sender_role.unwrap_or_else(|| "customer".into()),
            text: r.text.unwrap_or_default(),
            sent_at: parse_datetime(&r.sent_at),
        }
    }
}

// ── Dashboard / Revenue ────────────────────────────────────────────

impl From<DashboardRecord> for DashboardStats {
    fn from(r: DashboardRecord) -> Self {
        DashboardStats {
            total_orders: r.total_orders,
            pending_orders: r.pending_orders,
            total_foods: r.total_foods,
            total_revenue: r.total_revenue,
            average_rating: r.average_rating,
            review_count: r.review_count,
        }
    }
}

impl From<RevenuePointRecord> for RevenuePoint {
    fn from(r: RevenuePointRecord) -> Self {
        RevenuePoint {
            label: r.label,
            revenue: r.revenue,
            order_count: r.order_count,
        }
    }
}

// ── Restaurant / Identity ──────────────────────────────────────────

impl From<RestaurantRecord> for Restaurant {
    fn from(r: RestaurantRecord) -> Self {
        Restaurant {
            id: EntityId::from(r.id),
            name: r.name,
            email: r.email,
            phone: r.phone,
            address: r.address,
            description: r.description,
            image_url: r.image_url,
            opening_hours: r.opening_hours,
        }
    }
}

impl From<UserRecord> for Identity {
    fn from(r: UserRecord) -> Self {
        Identity {
            id: EntityId::from(r.id),
            name: r.name,
            role: r.role,
            restaurant_id: r.restaurant_id.map(EntityId::from),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn voucher_record() -> VoucherRecord {
        VoucherRecord {
            id: "v1".into(),
            code: "WELCOME10".into(),
            description: Some("10% off first order".into()),
            discount_type: "percentage".into(),
            discount_value: 10.0,
            min_order_amount: None,
            max_discount_amount: Some(20_000.0),
            start_date: "2025-01-01".into(),
            end_date: "2025-12-31".into(),
            usage_limit: Some(500),
            used_count: 42,
            restaurant_id: Some("r1".into()),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn voucher_parses_plain_and_timestamp_dates() {
        let mut record = voucher_record();
        record.end_date = "2025-12-31T00:00:00.000Z".into();
        let v = Voucher::try_from(record).unwrap();
        assert_eq!(v.start_date.to_string(), "2025-01-01");
        assert_eq!(v.end_date.to_string(), "2025-12-31");
        assert_eq!(v.min_order_amount, 0.0);
        assert_eq!(v.discount_type, DiscountType::Percentage);
    }

    #[test]
    fn voucher_rejects_malformed_date() {
        let mut record = voucher_record();
        record.start_date = "soon".into();
        assert!(Voucher::try_from(record).is_err());
    }

    #[test]
    fn voucher_rejects_unknown_discount_type() {
        let mut record = voucher_record();
        record.discount_type = "bogo".into();
        assert!(Voucher::try_from(record).is_err());
    }

    #[test]
    fn order_status_falls_back_to_pending() {
        let record = OrderRecord {
            id: "o1".into(),
            customer_name: None,
            customer_phone: None,
            delivery_address: None,
            items: vec![],
            total_amount: 0.0,
            status: Some("teleporting".into()),
            created_at: None,
            restaurant_id: None,
            extra: serde_json::Map::new(),
        };
        let order = Order::from(record);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn order_parses_known_status_and_timestamp() {
        let record = OrderRecord {
            id: "o2".into(),
            customer_name: Some("Ana".into()),
            customer_phone: None,
            delivery_address: None,
            items: vec![OrderItemRecord {
                name: Some("Pho".into()),
                quantity: 2,
                price: 45_000.0,
            }],
            total_amount: 90_000.0,
            status: Some("delivering".into()),
            created_at: Some("2025-07-01T12:30:00Z".into()),
            restaurant_id: None,
            extra: serde_json::Map::new(),
        };
        let order = Order::from(record);
        assert_eq!(order.status, OrderStatus::Delivering);
        assert!(order.created_at.is_some());
        assert_eq!(order.items[0].name, "Pho");
    }

    #[test]
    fn payload_round_trips_validated_fields() {
        use chrono::NaiveDate;
        let validated = ValidatedVoucher {
            code: "FLAT5K".into(),
            description: "5000 off".into(),
            discount_type: DiscountType::Fixed,
            discount_value: 5000.0,
            min_order_amount: 30_000.0,
            max_discount_amount: None,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            usage_limit: None,
        };
        let payload = voucher_payload(&validated, &EntityId::from("r1"));
        assert_eq!(payload.discount_type, "fixed");
        assert_eq!(payload.start_date, "2025-01-01");
        assert_eq!(payload.restaurant_id, "r1");
    }
}
