// ── Command API ──
//
// All write operations flow through a unified `Command` enum. The console
// routes each variant to the matching backend endpoint and returns the
// record the backend echoes back.

pub mod requests;

use crate::model::{
    ChatMessage, EntityId, Food, Order, OrderStatus, Restaurant, Voucher,
};
use crate::rules::ValidatedVoucher;

pub use requests::{
    CreateFoodRequest, SendMessageRequest, UpdateFoodRequest, UpdateProfileRequest,
};

/// All possible write operations against the Savor backend.
///
/// Voucher variants carry a [`ValidatedVoucher`]: the rules engine has
/// already run, so a command in flight can no longer be invalid.
#[derive(Debug, Clone)]
pub enum Command {
    // ── Vouchers ─────────────────────────────────────────────────────
    CreateVoucher(ValidatedVoucher),
    UpdateVoucher {
        id: EntityId,
        update: ValidatedVoucher,
    },
    DeleteVoucher {
        id: EntityId,
    },

    // ── Menu ─────────────────────────────────────────────────────────
    CreateFood(CreateFoodRequest),
    UpdateFood {
        id: EntityId,
        update: UpdateFoodRequest,
    },
    DeleteFood {
        id: EntityId,
    },
    SetFoodAvailability {
        id: EntityId,
        available: bool,
    },

    // ── Orders ───────────────────────────────────────────────────────
    UpdateOrderStatus {
        id: EntityId,
        status: OrderStatus,
    },

    // ── Profile ──────────────────────────────────────────────────────
    UpdateProfile(UpdateProfileRequest),

    // ── Chat ─────────────────────────────────────────────────────────
    SendMessage(SendMessageRequest),
}

/// Result of a command execution.
#[derive(Debug)]
pub enum CommandResult {
    Ok,
    Voucher(Voucher),
    Food(Food),
    Order(Order),
    Restaurant(Restaurant),
    Message(ChatMessage),
}
