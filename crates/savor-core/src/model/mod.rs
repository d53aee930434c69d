// ── Domain model ──
//
// Plain in-memory records handed to the presentation layer. Wire records
// from savor-api are converted into these types in `convert.rs`; nothing
// in here knows about JSON envelopes or HTTP.

pub mod chat;
pub mod entity_id;
pub mod food;
pub mod identity;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod stats;
pub mod voucher;

pub use chat::{ChatMessage, Conversation};
pub use entity_id::EntityId;
pub use food::Food;
pub use identity::Identity;
pub use order::{Order, OrderItem, OrderStatus};
pub use restaurant::Restaurant;
pub use review::Review;
pub use stats::{DashboardStats, RevenuePeriod, RevenuePoint};
pub use voucher::{DiscountType, Voucher, VoucherStatus};
