// ── Customer chat domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A conversation thread with one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: EntityId,
    pub customer_name: Option<String>,
    pub last_message: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub unread_count: u32,
}

/// One message inside a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: EntityId,
    pub conversation_id: Option<EntityId>,
    /// `"customer"` or `"restaurant"`.
    pub sender_role: String,
    pub text: String,
    pub sent_at: Option<DateTime<Utc>>,
}
