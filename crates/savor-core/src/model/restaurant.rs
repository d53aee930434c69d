// ── Restaurant profile domain type ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// The restaurant entity this console session administers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: EntityId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub opening_hours: Option<String>,
}
