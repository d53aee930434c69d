// ── Logged-in identity ──
//
// The backend returns this record at login. It replaces the mobile app's
// ambient device-storage identity: the console caches it in memory for the
// session and consumers read it through `Console::identity()`.

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// The authenticated account for this session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: EntityId,
    pub name: Option<String>,
    pub role: Option<String>,
    /// The restaurant this account administers, when the backend knows it.
    pub restaurant_id: Option<EntityId>,
}
