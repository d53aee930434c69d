// ── Review domain type (read-only) ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A customer review of the restaurant. The console only displays these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: EntityId,
    pub customer_name: Option<String>,
    /// 1.0 to 5.0 stars.
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
