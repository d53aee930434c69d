// savor-core: Domain layer between savor-api and the console frontend.

pub mod command;
pub mod config;
pub mod console;
pub mod convert;
pub mod error;
pub mod model;
pub mod rules;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{Command, CommandResult};
pub use command::requests::*;
pub use config::{AuthCredentials, ConsoleConfig, TlsVerification};
pub use console::{ClassifiedVoucher, Console};
pub use error::CoreError;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Core entities
    Conversation, ChatMessage, DashboardStats, DiscountType, EntityId, Food, Identity, Order,
    OrderItem, OrderStatus, Restaurant, RevenuePeriod, RevenuePoint, Review, Voucher,
    VoucherStatus,
};

// Rules engine surface.
pub use rules::{ValidatedVoucher, ValidationError, VoucherForm};
