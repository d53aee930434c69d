// ── Menu item domain type ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A dish on the restaurant's menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    /// Unavailable items stay on the menu but cannot be ordered.
    pub available: bool,
}
